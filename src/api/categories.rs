//! Category API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::{DeleteResponse, Pagination};
use crate::auth::guard::Superuser;
use crate::errors::AppError;
use crate::models::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::AppState;

/// GET /api/categories - List categories ordered for display.
pub async fn list_categories(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state
        .repo
        .list_categories(pagination.skip, pagination.limit)
        .await?;
    Ok(Json(categories))
}

/// POST /api/categories - Create a category.
pub async fn create_category(
    State(state): State<AppState>,
    _auth: Superuser,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = state.repo.create_category(&request).await?;
    Ok(Json(category))
}

/// PUT /api/categories/{id} - Update a category.
pub async fn update_category(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<Category>, AppError> {
    let category = state.repo.update_category(id, &request).await?;
    Ok(Json(category))
}

/// DELETE /api/categories/{id} - Delete a category and the cards in it.
pub async fn delete_category(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.repo.delete_category(id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
