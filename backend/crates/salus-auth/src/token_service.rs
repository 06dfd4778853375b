use crate::{AuthError, Claims, EXPIRY_CLAIM, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::debug;
use serde_json::{Map, Value};

/// Token lifetime used by [`TokenService::issue`]
pub const DEFAULT_TTL_MINUTES: i64 = 60;

/// Issues and verifies HS256 tokens signed with one shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl_minutes: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], default_ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Claims are caller-defined, so an `aud` claim is carried, not checked
        validation.validate_aud = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            default_ttl_minutes,
        }
    }

    /// Sign `claims` with the configured default lifetime
    #[track_caller]
    pub fn issue(&self, claims: Map<String, Value>) -> AuthErrorResult<String> {
        self.issue_with_ttl(claims, self.default_ttl_minutes)
    }

    /// Sign `claims`, setting `exp` to now + `ttl_minutes`.
    ///
    /// Any `exp` already present in `claims` is replaced.
    #[track_caller]
    pub fn issue_with_ttl(
        &self,
        mut claims: Map<String, Value>,
        ttl_minutes: i64,
    ) -> AuthErrorResult<String> {
        let exp = Utc::now()
            .timestamp()
            .saturating_add(ttl_minutes.saturating_mul(60));

        claims.remove(EXPIRY_CLAIM);
        let claims = Claims { extra: claims, exp };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify signature and expiry.
    ///
    /// Returns `Ok(None)` only for a correctly signed token whose `exp` has
    /// passed. Bad signatures, tampered segments and malformed input are
    /// errors, so a forged token can never come back as claims.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Option<Claims>> {
        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => Ok(Some(token_data.claims)),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                debug!("Token expired");
                Ok(None)
            }
            Err(e) => Err(AuthError::JwtDecode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn default_ttl_minutes(&self) -> i64 {
        self.default_ttl_minutes
    }
}
