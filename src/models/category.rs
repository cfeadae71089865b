//! Category model: a sidebar grouping that owns navigation cards.

use serde::{Deserialize, Serialize};

/// A navigation grouping shown as a sidebar entry and a page section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    /// Stable identifier used as the menu/section id; unique across categories.
    pub slug: String,
    pub label: String,
    pub icon: String,
    pub order: i64,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryRequest {
    pub slug: String,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub active: bool,
}

/// Request body for updating an existing category.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub active: Option<bool>,
}
