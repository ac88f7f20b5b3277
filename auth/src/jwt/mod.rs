pub mod claims;
pub mod errors;
pub mod issuer;

pub use claims::AccessClaims;
pub use errors::TokenError;
pub use issuer::TokenIssuer;

// The signing algorithm is part of the issuer's configuration surface
pub use jsonwebtoken::Algorithm;
