use salus_core::User;

use serde::Serialize;

/// Body returned after a successful registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nombre: user.name,
            email: user.email,
        }
    }
}
