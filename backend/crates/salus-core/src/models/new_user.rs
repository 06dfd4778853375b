use crate::UserRole;

/// Payload for inserting a user; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub surname: Option<String>,
    pub role: UserRole,
    pub national_id: Option<String>,
    pub phone: Option<String>,
}

impl NewUser {
    /// Create a self-registered customer account
    pub fn new(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            surname: None,
            role: UserRole::Cliente,
            national_id: None,
            phone: None,
        }
    }
}
