pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod preflight;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        register_response::RegisterResponse,
        user_dto::UserDto,
    },
    error::ApiError,
    error::ApiErrorResponse,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, db_connection::DbConnection},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
