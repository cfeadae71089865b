//! Navigation card model: a single link entry belonging to a category.

use serde::{Deserialize, Serialize};

/// A link card rendered inside its category's section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationCard {
    pub id: i64,
    /// Owning category. Checked against the categories table on create/update.
    pub category_id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub icon: String,
    pub icon_bg_class: String,
    pub icon_color_class: String,
    pub href: String,
    pub order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new card.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCardRequest {
    pub category_id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    pub icon: String,
    pub icon_bg_class: String,
    pub icon_color_class: String,
    pub href: String,
    #[serde(default)]
    pub order: i64,
}

/// Request body for updating an existing card.
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCardRequest {
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_bg_class: Option<String>,
    #[serde(default)]
    pub icon_color_class: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}
