use salus_core::NewUser;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name (required)
    pub nombre: String,

    /// Login identifier, unique across accounts (required)
    pub email: String,

    /// Credential, stored as submitted (required)
    pub contrasena: String,

    #[serde(default)]
    pub apellido: Option<String>,

    #[serde(default)]
    pub cedula: Option<String>,

    #[serde(default)]
    pub telefono: Option<String>,
}

impl RegisterRequest {
    /// Self-registration always produces an active `cliente` account
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            surname: self.apellido,
            national_id: self.cedula,
            phone: self.telefono,
            ..NewUser::new(self.nombre, self.email, self.contrasena)
        }
    }
}
