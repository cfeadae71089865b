//! Request guards for protected routes.
//!
//! Each guard is an Axum extractor. [`AuthUser`] resolves the Bearer token
//! against the user table; [`Superuser`] additionally requires the superuser
//! flag. Use them as handler parameters to enforce authorization at the type
//! level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::token::decode_token;
use crate::errors::AppError;
use crate::models::User;
use crate::AppState;

/// Authenticated user resolved from a Bearer token in the `Authorization`
/// header.
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> Result<Json<()>, AppError> {
///     tracing::info!(username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Unauthorized("Invalid Authorization format. Expected: Bearer <token>".to_string())
        })?;

        let claims = decode_token(token, &state.config.secret_key)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string()))?;

        // The subject must still map to a live account
        let user = state
            .repo
            .get_user_by_username(&claims.sub)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;

        if !user.is_active {
            return Err(AppError::Unauthorized("User is inactive".to_string()));
        }

        Ok(AuthUser(user))
    }
}

/// Requires the authenticated user to be a superuser. Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(Superuser(user): Superuser) -> Result<Json<()>, AppError> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Superuser(pub User);

impl FromRequestParts<AppState> for Superuser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_superuser {
            return Err(AppError::Forbidden(
                "Superuser privileges required".to_string(),
            ));
        }
        Ok(Superuser(user))
    }
}
