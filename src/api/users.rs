//! User administration endpoints. Every route requires a superuser.

use axum::{
    extract::{Path, State},
    Json,
};

use super::DeleteResponse;
use crate::auth::guard::Superuser;
use crate::auth::password::hash_password;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, UpdateUserRequest, UserRead};
use crate::AppState;

/// GET /api/users - List all users.
pub async fn list_users(
    State(state): State<AppState>,
    _auth: Superuser,
) -> Result<Json<Vec<UserRead>>, AppError> {
    let users = state.repo.list_users().await?;
    Ok(Json(users.into_iter().map(UserRead::from).collect()))
}

/// POST /api/users - Create a user.
pub async fn create_user(
    State(state): State<AppState>,
    _auth: Superuser,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserRead>, AppError> {
    let hashed = hash_password(&request.password)?;
    let user = state
        .repo
        .create_user(
            &request.username,
            &hashed,
            request.is_active,
            request.is_superuser,
        )
        .await?;
    Ok(Json(UserRead::from(user)))
}

/// PUT /api/users/{id} - Update a user.
///
/// The initial admin keeps its username, role, and active flag; a patch
/// that names any of those fields is rejected before anything is written.
pub async fn update_user(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserRead>, AppError> {
    let user = state
        .repo
        .get_user(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if let Some(username) = &request.username {
        if username != &user.username
            && state.repo.get_user_by_username(username).await?.is_some()
        {
            return Err(AppError::BadRequest(format!(
                "Username '{}' already exists",
                username
            )));
        }
    }

    if user.username == state.config.initial_admin_username
        && (request.username.is_some()
            || request.is_active.is_some()
            || request.is_superuser.is_some())
    {
        return Err(AppError::BadRequest(
            "Default admin username/role/state cannot be changed".to_string(),
        ));
    }

    // An empty password means "keep the current one", matching the admin
    // console's leave-blank-to-keep form behavior.
    let hashed = match request.password.as_deref() {
        Some(password) if !password.is_empty() => Some(hash_password(password)?),
        _ => None,
    };

    let updated = state
        .repo
        .update_user(
            id,
            request.username.as_deref(),
            hashed.as_deref(),
            request.is_active,
            request.is_superuser,
        )
        .await?;

    Ok(Json(UserRead::from(updated)))
}

/// DELETE /api/users/{id} - Delete a user.
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.repo.delete_user(id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
