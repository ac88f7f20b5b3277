use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Issues and verifies signed access tokens.
///
/// Holds the process-wide signing configuration: the secret key and the
/// HMAC algorithm, both loaded once at startup. The secret never leaves
/// this struct and is never logged.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a token issuer from the signing configuration.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (at least 256 bits recommended for HS256)
    /// * `algorithm` - Signature algorithm; symmetric HMAC variants only
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    /// * `UnsupportedAlgorithm` - The algorithm is not HS256/HS384/HS512
    ///
    /// Construction failure is a startup-time condition: a service must
    /// refuse to start rather than issue improperly signed tokens.
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        match algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => return Err(TokenError::UnsupportedAlgorithm(format!("{:?}", other))),
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
        })
    }

    /// Issue a signed token for a user.
    ///
    /// # Arguments
    /// * `subject` - Username the token is issued to
    /// * `user_id` - User identifier, stored in the `id` claim
    /// * `role` - Optional role claim, carried but never interpreted
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// Compact URL-safe signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(
        &self,
        subject: &str,
        user_id: impl ToString,
        role: Option<&str>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let claims = AccessClaims::new(subject, user_id, role.map(str::to_string), ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Expiry is checked against the current time with the library's
    /// default leeway for clock skew.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim is in the past
    /// * `InvalidToken` - Bad signature, malformed token, or wrong algorithm
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
