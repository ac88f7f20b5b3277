use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried inside a signed access token.
///
/// The token is a stateless bearer credential: its validity is fully
/// determined by the signature and the `exp` claim, with no server-side
/// session record behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject: the username the token was issued to
    pub sub: String,

    /// User identifier
    pub id: String,

    /// Role carried for downstream consumers; never interpreted here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Build claims for a user expiring `ttl` from now.
    pub fn new(
        subject: impl ToString,
        user_id: impl ToString,
        role: Option<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            id: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Check whether the token is expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
