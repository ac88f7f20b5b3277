use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user from validated input.
    ///
    /// Hashes the password, marks the account active, and hands the record
    /// to the store as one atomic insert. No token is issued here; the
    /// caller logs in separately.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Check credentials against the stored record.
    ///
    /// # Returns
    /// The full user record on success (the caller needs id and role for
    /// token issuance)
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `DatabaseError` - Store operation failed
    ///
    /// Callers exposed to untrusted clients must collapse the first two
    /// into one indistinguishable failure.
    async fn authenticate(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence contract for the user aggregate.
///
/// Implementations provide per-request isolation and enforce
/// username/email uniqueness; the domain performs no pre-check.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage as one atomic insert.
    ///
    /// # Returns
    /// The committed user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact username match.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
