pub mod claims;
pub mod error;
pub mod token_service;

pub use claims::{Claims, EXPIRY_CLAIM};
pub use error::{AuthError, Result};
pub use token_service::{DEFAULT_TTL_MINUTES, TokenService};
