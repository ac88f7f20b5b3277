//! Credential and token utilities library
//!
//! Provides the building blocks for authenticating users:
//! - Password hashing and verification (Argon2id)
//! - Signed access-token issuance and verification (HMAC JWT)
//!
//! The service defines its own lookup and persistence contracts and composes
//! these primitives; nothing in this crate performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::Algorithm;
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Algorithm::HS256).unwrap();
//! let token = issuer.issue("alice", 42, None, Duration::minutes(20)).unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! assert_eq!(claims.id, "42");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::AccessClaims;
pub use jwt::Algorithm;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
