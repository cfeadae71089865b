//! Site configuration endpoints.
//!
//! The search and branding views are composed over the `site_configs`
//! key/value table: persisted values win, defaults fill the gaps. Updates
//! upsert only the fields present in the payload; keys are never deleted.
//! Every route requires a superuser.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::guard::Superuser;
use crate::errors::AppError;
use crate::models::{
    BRANDING_ICON_KEY, BRANDING_TITLE_KEY, DEFAULT_BRANDING_ICON, DEFAULT_SEARCH_ENGINE_NAME,
    DEFAULT_SEARCH_PLACEHOLDER, SEARCH_ENGINE_NAME_KEY, SEARCH_ENGINE_URL_KEY,
    SEARCH_PLACEHOLDER_KEY,
};
use crate::AppState;

/// Composed search configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchConfigResponse {
    pub placeholder: String,
    pub engine_name: String,
    pub engine_url: String,
}

/// Partial search configuration update.
#[derive(Debug, Default, Deserialize)]
pub struct SearchConfigUpdate {
    pub placeholder: Option<String>,
    pub engine_name: Option<String>,
    pub engine_url: Option<String>,
}

/// Composed branding configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct BrandingConfigResponse {
    pub title: String,
    pub icon: String,
}

/// Partial branding configuration update.
#[derive(Debug, Default, Deserialize)]
pub struct BrandingConfigUpdate {
    pub title: Option<String>,
    pub icon: Option<String>,
}

async fn build_search_config(state: &AppState) -> Result<SearchConfigResponse, AppError> {
    let placeholder = state.repo.get_config(SEARCH_PLACEHOLDER_KEY).await?;
    let engine_name = state.repo.get_config(SEARCH_ENGINE_NAME_KEY).await?;
    let engine_url = state.repo.get_config(SEARCH_ENGINE_URL_KEY).await?;

    Ok(SearchConfigResponse {
        placeholder: placeholder
            .map(|c| c.value)
            .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
        engine_name: engine_name
            .map(|c| c.value)
            .unwrap_or_else(|| DEFAULT_SEARCH_ENGINE_NAME.to_string()),
        engine_url: engine_url
            .map(|c| c.value)
            .unwrap_or_else(|| state.config.search_url.clone()),
    })
}

async fn build_branding_config(state: &AppState) -> Result<BrandingConfigResponse, AppError> {
    let title = state.repo.get_config(BRANDING_TITLE_KEY).await?;
    let icon = state.repo.get_config(BRANDING_ICON_KEY).await?;

    Ok(BrandingConfigResponse {
        title: title
            .map(|c| c.value)
            .unwrap_or_else(|| state.config.app_name.clone()),
        icon: icon
            .map(|c| c.value)
            .unwrap_or_else(|| DEFAULT_BRANDING_ICON.to_string()),
    })
}

/// GET /api/configs/search - Current search configuration.
pub async fn get_search_config(
    State(state): State<AppState>,
    _auth: Superuser,
) -> Result<Json<SearchConfigResponse>, AppError> {
    Ok(Json(build_search_config(&state).await?))
}

/// PUT /api/configs/search - Update search configuration fields.
pub async fn update_search_config(
    State(state): State<AppState>,
    _auth: Superuser,
    Json(payload): Json<SearchConfigUpdate>,
) -> Result<Json<SearchConfigResponse>, AppError> {
    if let Some(placeholder) = &payload.placeholder {
        state
            .repo
            .upsert_config(SEARCH_PLACEHOLDER_KEY, placeholder)
            .await?;
    }
    if let Some(engine_name) = &payload.engine_name {
        state
            .repo
            .upsert_config(SEARCH_ENGINE_NAME_KEY, engine_name)
            .await?;
    }
    if let Some(engine_url) = &payload.engine_url {
        state
            .repo
            .upsert_config(SEARCH_ENGINE_URL_KEY, engine_url)
            .await?;
    }

    Ok(Json(build_search_config(&state).await?))
}

/// GET /api/configs/branding - Current branding configuration.
pub async fn get_branding_config(
    State(state): State<AppState>,
    _auth: Superuser,
) -> Result<Json<BrandingConfigResponse>, AppError> {
    Ok(Json(build_branding_config(&state).await?))
}

/// PUT /api/configs/branding - Update branding configuration fields.
pub async fn update_branding_config(
    State(state): State<AppState>,
    _auth: Superuser,
    Json(payload): Json<BrandingConfigUpdate>,
) -> Result<Json<BrandingConfigResponse>, AppError> {
    if let Some(title) = &payload.title {
        state.repo.upsert_config(BRANDING_TITLE_KEY, title).await?;
    }
    if let Some(icon) = &payload.icon {
        state.repo.upsert_config(BRANDING_ICON_KEY, icon).await?;
    }

    Ok(Json(build_branding_config(&state).await?))
}
