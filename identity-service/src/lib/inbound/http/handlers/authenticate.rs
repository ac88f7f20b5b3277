use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Duration;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Exchange a username and password for a signed bearer token.
///
/// Every authentication failure collapses into the same 401 response:
/// an unknown username, a wrong password, and a username that does not
/// even parse are indistinguishable from outside.
pub async fn authenticate<UR: UserRepository>(
    State(state): State<AppState<UR>>,
    Json(body): Json<AuthenticateRequestBody>,
) -> Result<ApiSuccess<AccessTokenData>, ApiError> {
    let username =
        Username::new(body.username).map_err(|_| ApiError::authentication_failed())?;

    let user = state
        .user_service
        .authenticate(Credentials::new(username, body.password))
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) | UserError::InvalidCredentials => {
                ApiError::authentication_failed()
            }
            other => ApiError::from(other),
        })?;

    let access_token = state
        .token_issuer
        .issue(
            user.username.as_str(),
            user.id,
            Some(&user.role),
            Duration::minutes(state.token_ttl_minutes),
        )
        .map_err(|e| ApiError::InternalServerError(format!("Token issuance failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        AccessTokenData {
            access_token,
            token_type: "Bearer".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticateRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenData {
    pub access_token: String,
    pub token_type: String,
}
