//! Site configuration model: a generic key-value settings row.

use serde::{Deserialize, Serialize};

/// A single settings row. Keys come from a small fixed vocabulary
/// (branding title/icon, search placeholder, search engine name/url)
/// and are upserted, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub updated_at: String,
}

/// Config key for the hero search box placeholder text.
pub const SEARCH_PLACEHOLDER_KEY: &str = "hero_search_placeholder";
/// Config key for the search engine display name.
pub const SEARCH_ENGINE_NAME_KEY: &str = "search_engine_name";
/// Config key for the search engine URL template.
pub const SEARCH_ENGINE_URL_KEY: &str = "search_engine_url";
/// Config key for the branding title shown in the sidebar header.
pub const BRANDING_TITLE_KEY: &str = "branding_title";
/// Config key for the branding icon shown in the sidebar header.
pub const BRANDING_ICON_KEY: &str = "branding_icon";

/// Default hero search placeholder.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "搜索工具、资源...";
/// Default search engine display name.
pub const DEFAULT_SEARCH_ENGINE_NAME: &str = "Google";
/// Default branding icon.
pub const DEFAULT_BRANDING_ICON: &str = "hub";
