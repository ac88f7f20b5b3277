use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Utc;
use tokio::task;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and authentication.
///
/// Stateless across requests: the repository is the only collaborator with
/// durable state, and the password hasher holds nothing but cost parameters.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with an injected repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let CreateUserCommand {
            username,
            email,
            first_name,
            last_name,
            password,
            role,
        } = command;

        // Argon2 is deliberately slow; keep it off the async workers
        let hasher = self.password_hasher.clone();
        let password_hash = task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        let user = User {
            id: UserId::new(),
            username,
            email,
            first_name,
            last_name,
            role,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, UserError> {
        let Credentials { username, password } = credentials;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))?;

        // A malformed stored hash verifies as a non-match, same as a wrong
        // password; nothing here reveals which one it was
        let hasher = self.password_hasher.clone();
        let stored_hash = user.password_hash.clone();
        let matches = task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
