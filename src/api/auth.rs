//! Authentication endpoint.

use axum::{extract::State, Form, Json};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::token::issue_token;
use crate::errors::AppError;
use crate::AppState;

/// Form body accepted by the token endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token issued on successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/auth/token - Exchange username/password for a bearer token.
///
/// Unknown usernames and wrong passwords produce the same 401, so the
/// endpoint does not reveal which accounts exist. The active flag is not
/// checked here; the request guards reject inactive users at use time.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = state.repo.get_user_by_username(&form.username).await?;

    let verified = match &user {
        Some(user) => verify_password(&form.password, &user.hashed_password)?,
        None => false,
    };

    if !verified {
        return Err(AppError::Unauthorized(
            "Incorrect username or password".to_string(),
        ));
    }

    let token = issue_token(
        &form.username,
        &state.config.secret_key,
        state.config.token_ttl_mins,
    )?;

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}
