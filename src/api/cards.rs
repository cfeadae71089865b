//! Navigation card API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{default_limit, DeleteResponse};
use crate::auth::guard::Superuser;
use crate::errors::AppError;
use crate::models::{CreateCardRequest, NavigationCard, UpdateCardRequest};
use crate::AppState;

/// Query parameters for the card list endpoint.
#[derive(Debug, Deserialize)]
pub struct CardListQuery {
    pub category_id: Option<i64>,
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// GET /api/cards - List cards, optionally filtered by category.
pub async fn list_cards(
    State(state): State<AppState>,
    Query(query): Query<CardListQuery>,
) -> Result<Json<Vec<NavigationCard>>, AppError> {
    let cards = state
        .repo
        .list_cards(query.category_id, query.skip, query.limit)
        .await?;
    Ok(Json(cards))
}

/// POST /api/cards - Create a card.
pub async fn create_card(
    State(state): State<AppState>,
    _auth: Superuser,
    Json(request): Json<CreateCardRequest>,
) -> Result<Json<NavigationCard>, AppError> {
    let card = state.repo.create_card(&request).await?;
    Ok(Json(card))
}

/// PUT /api/cards/{id} - Update a card.
pub async fn update_card(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCardRequest>,
) -> Result<Json<NavigationCard>, AppError> {
    let card = state.repo.update_card(id, &request).await?;
    Ok(Json(card))
}

/// DELETE /api/cards/{id} - Delete a card.
pub async fn delete_card(
    State(state): State<AppState>,
    _auth: Superuser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.repo.delete_card(id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
