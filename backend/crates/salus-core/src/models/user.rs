//! User entity - one row of the `usuario` table.

use crate::UserRole;

use serde::{Deserialize, Serialize};

/// A registered person.
///
/// The credential is kept exactly as submitted at registration and compared
/// verbatim at login. It must never leave the server; use a DTO projection
/// when returning a user to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique login identifier
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub surname: Option<String>,
    pub role: UserRole,
    pub active: bool,
    /// National identity document number (cedula)
    pub national_id: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Plain equality check against the stored credential
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
