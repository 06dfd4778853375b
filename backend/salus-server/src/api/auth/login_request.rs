use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email of the account. The web client sends it as `correo`.
    #[serde(alias = "correo")]
    pub username: String,

    pub password: String,
}
