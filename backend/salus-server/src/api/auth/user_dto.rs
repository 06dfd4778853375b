use salus_core::{User, UserRole};

use serde::Serialize;

/// Public projection of a user; never carries the credential
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub tipo: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.name,
            email: user.email,
            tipo: user.role,
        }
    }
}
