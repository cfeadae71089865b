//! Public navigation document endpoint.

use std::collections::HashMap;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::{
    Branding, Header, Hero, MenuItem, NavigationDocument, SearchEngine, Section, SectionCard,
    Sidebar, SidebarStatus, BRANDING_ICON_KEY, BRANDING_TITLE_KEY, DEFAULT_BRANDING_ICON,
    DEFAULT_SEARCH_ENGINE_NAME, DEFAULT_SEARCH_PLACEHOLDER, SEARCH_ENGINE_NAME_KEY,
    SEARCH_ENGINE_URL_KEY, SEARCH_PLACEHOLDER_KEY,
};
use crate::AppState;

/// GET /api/navigation - The assembled document the frontend renders.
///
/// Categories and cards are each fetched once and joined in memory.
/// Missing config rows fall back to defaults instead of failing the
/// endpoint.
pub async fn get_navigation(
    State(state): State<AppState>,
) -> Result<Json<NavigationDocument>, AppError> {
    let categories = state.repo.list_all_categories().await?;
    let cards = state.repo.list_all_cards().await?;
    let configs = state.repo.list_configs().await?;

    let config_map: HashMap<String, String> =
        configs.into_iter().map(|c| (c.key, c.value)).collect();

    // Group cards by category; the fetch order is the display order
    let mut cards_by_category: HashMap<i64, Vec<SectionCard>> = HashMap::new();
    for card in cards {
        cards_by_category
            .entry(card.category_id)
            .or_default()
            .push(SectionCard {
                title: card.title,
                subtitle: card.subtitle,
                description: card.description,
                icon: card.icon,
                icon_bg_class: card.icon_bg_class,
                icon_color_class: card.icon_color_class,
                href: card.href,
            });
    }

    let mut menu_items = Vec::with_capacity(categories.len());
    let mut sections = Vec::with_capacity(categories.len());

    for category in categories {
        menu_items.push(MenuItem {
            id: category.slug.clone(),
            label: category.label.clone(),
            icon: category.icon,
            href: "#".to_string(),
            active: category.active,
        });

        sections.push(Section {
            id: category.slug,
            section_type: "grid".to_string(),
            title: category.label,
            cards: cards_by_category.remove(&category.id).unwrap_or_default(),
        });
    }

    let document = NavigationDocument {
        branding: Branding {
            icon: config_map
                .get(BRANDING_ICON_KEY)
                .cloned()
                .unwrap_or_else(|| DEFAULT_BRANDING_ICON.to_string()),
            title: config_map
                .get(BRANDING_TITLE_KEY)
                .cloned()
                .unwrap_or_else(|| state.config.app_name.clone()),
        },
        sidebar: Sidebar {
            menu_items,
            status: SidebarStatus::default(),
        },
        header: Header::default(),
        hero: Hero {
            search_placeholder: config_map
                .get(SEARCH_PLACEHOLDER_KEY)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
            search_engine: SearchEngine {
                name: config_map
                    .get(SEARCH_ENGINE_NAME_KEY)
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_SEARCH_ENGINE_NAME.to_string()),
                url: ensure_query_placeholder(
                    config_map
                        .get(SEARCH_ENGINE_URL_KEY)
                        .map(String::as_str)
                        .unwrap_or(&state.config.search_url),
                ),
            },
        },
        sections,
    };

    Ok(Json(document))
}

/// Rewrite a search URL so it carries a `{query}` placeholder the frontend
/// substitutes the search terms into.
fn ensure_query_placeholder(url: &str) -> String {
    if url.is_empty() {
        return "https://www.google.com/search?q={query}".to_string();
    }
    if url.contains("{query}") {
        return url.to_string();
    }
    let separator = if url.contains('?') { "&" } else { "?" };
    format!("{}{}q={{query}}", url, separator)
}
