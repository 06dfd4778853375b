use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub mensaje: String,
    pub usuario: UserDto,
}
