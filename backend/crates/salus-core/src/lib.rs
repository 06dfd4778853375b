pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_user::NewUser;
pub use models::user::User;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
