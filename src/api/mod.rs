//! API handlers for PhoneDesk REST endpoints

pub mod allocations;
pub mod employees;
pub mod health;
pub mod openapi;
pub mod phones;
pub mod stats;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, AppState};

/// Claims carried by the identity provider's tokens. Identity only; the
/// server makes no authorization decisions from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// Subject (user identifier at the identity provider)
    pub sub: String,
    pub email: Option<String>,
    /// Expiry as a unix timestamp
    pub exp: usize,
}

/// Extractor for the authenticated user from a bearer JWT issued by the
/// external identity provider and verified against the shared secret.
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        let claims = decode::<UserClaims>(
            token,
            &DecodingKey::from_secret(state.config.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AppError::Authentication(e.to_string()))?
        .claims;

        Ok(AuthenticatedUser(claims))
    }
}
