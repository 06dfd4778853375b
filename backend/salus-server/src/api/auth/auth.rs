//! Registration and login handlers

use crate::{
    ApiError, ApiJson, ApiResult, DbConnection, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, UserDto,
};

use salus_db::UserRepository;

use std::panic::Location;

use axum::Json;
use error_location::ErrorLocation;
use log::{debug, info};

pub const EMAIL_ALREADY_REGISTERED: &str = "Email ya registrado";
pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas";
pub const INACTIVE_ACCOUNT: &str = "Cuenta inactiva";
pub const LOGIN_SUCCESS: &str = "Inicio de sesión exitoso";

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/registro
///
/// Create a `cliente` account. The email is checked before anything is
/// written; two concurrent registrations of the same email can both pass the
/// check, in which case the loser fails on the unique index with a 500.
pub async fn register(
    mut conn: DbConnection,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    if UserRepository::find_by_email(&mut conn, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict {
            message: EMAIL_ALREADY_REGISTERED.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let user = UserRepository::create(&mut conn, &request.into_new_user()).await?;
    info!("Registered usuario {}", user.id);

    Ok(Json(RegisterResponse::from(user)))
}

/// POST /login
///
/// Unknown email and wrong password get the same 401 so callers cannot probe
/// which accounts exist.
pub async fn login(
    mut conn: DbConnection,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = UserRepository::find_by_email(&mut conn, &request.username)
        .await?
        .filter(|user| user.password_matches(&request.password))
        .ok_or_else(|| ApiError::Unauthorized {
            message: INVALID_CREDENTIALS.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if !user.is_active() {
        return Err(ApiError::Forbidden {
            message: INACTIVE_ACCOUNT.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    debug!("Login succeeded for usuario {}", user.id);

    Ok(Json(LoginResponse {
        mensaje: LOGIN_SUCCESS.to_string(),
        usuario: UserDto::from(user),
    }))
}
