//! JSON fixture importer.
//!
//! Loads a navigation-document fixture into an empty database: categories
//! from the sidebar menu, cards from the sections (matched to categories
//! by slug), and the branding/hero config keys. A database that already
//! has categories is left untouched, so the importer is safe to run on
//! every startup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{
    CreateCardRequest, CreateCategoryRequest, MenuItem, Section, BRANDING_ICON_KEY,
    BRANDING_TITLE_KEY, SEARCH_PLACEHOLDER_KEY,
};

/// What a seed run did.
#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Nothing was written: data already present or fixture missing.
    Skipped,
    /// Fixture imported.
    Seeded { categories: usize, cards: usize },
}

/// Fixture envelope. Matches the navigation document shape, but every
/// block is optional so partial fixtures still import.
#[derive(Debug, Deserialize)]
struct SeedFixture {
    branding: Option<SeedBranding>,
    #[serde(default)]
    sidebar: SeedSidebar,
    hero: Option<SeedHero>,
    #[serde(default)]
    sections: Vec<Section>,
}

#[derive(Debug, Deserialize)]
struct SeedBranding {
    title: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedSidebar {
    #[serde(default)]
    menu_items: Vec<MenuItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedHero {
    search_placeholder: Option<String>,
}

/// Import the fixture at `path` unless the database already has categories.
pub async fn run(repo: &Repository, path: &Path) -> Result<SeedOutcome, AppError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "seed fixture not found, skipping");
        return Ok(SeedOutcome::Skipped);
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let fixture: SeedFixture = serde_json::from_str(&raw)?;

    if repo.count_categories().await? > 0 {
        tracing::info!("data already exists, skipping seed");
        return Ok(SeedOutcome::Skipped);
    }

    let mut categories = 0;
    let mut cards = 0;

    // Categories come from the sidebar menu; the index is the display order
    let mut slug_to_id = HashMap::new();
    for (idx, item) in fixture.sidebar.menu_items.iter().enumerate() {
        let category = repo
            .create_category(&CreateCategoryRequest {
                slug: item.id.clone(),
                label: item.label.clone(),
                icon: item.icon.clone(),
                order: idx as i64,
                active: item.active,
            })
            .await?;
        slug_to_id.insert(category.slug, category.id);
        categories += 1;
    }

    // Cards come from the sections, matched to categories by slug
    for section in &fixture.sections {
        let Some(&category_id) = slug_to_id.get(&section.id) else {
            tracing::warn!(
                section = %section.id,
                "section has no matching category menu item, skipping"
            );
            continue;
        };

        for (idx, card) in section.cards.iter().enumerate() {
            repo.create_card(&CreateCardRequest {
                category_id,
                title: card.title.clone(),
                subtitle: card.subtitle.clone(),
                description: card.description.clone(),
                icon: card.icon.clone(),
                icon_bg_class: card.icon_bg_class.clone(),
                icon_color_class: card.icon_color_class.clone(),
                href: card.href.clone(),
                order: idx as i64,
            })
            .await?;
            cards += 1;
        }
    }

    if let Some(branding) = &fixture.branding {
        repo.upsert_config(BRANDING_TITLE_KEY, branding.title.as_deref().unwrap_or("Nav"))
            .await?;
        repo.upsert_config(BRANDING_ICON_KEY, branding.icon.as_deref().unwrap_or("hub"))
            .await?;
    }

    if let Some(hero) = &fixture.hero {
        repo.upsert_config(
            SEARCH_PLACEHOLDER_KEY,
            hero.search_placeholder.as_deref().unwrap_or("Search..."),
        )
        .await?;
    }

    tracing::info!(categories, cards, "seed complete");
    Ok(SeedOutcome::Seeded { categories, cards })
}
