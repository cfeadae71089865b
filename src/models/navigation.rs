//! The aggregated navigation document served to the public front end.
//!
//! Field names are camelCase on the wire. The same types parse the seed
//! fixture, which is a saved copy of this document shape.

use serde::{Deserialize, Serialize};

/// Root document returned by `GET /api/navigation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationDocument {
    pub branding: Branding,
    pub sidebar: Sidebar,
    pub header: Header,
    pub hero: Hero,
    pub sections: Vec<Section>,
}

/// Site branding block (sidebar header icon + title).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branding {
    pub icon: String,
    pub title: String,
}

/// Sidebar block: one menu item per category plus a fixed status widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub status: SidebarStatus,
}

/// A sidebar menu entry derived from a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// The category slug.
    pub id: String,
    pub label: String,
    pub icon: String,
    #[serde(default = "default_menu_href")]
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

fn default_menu_href() -> String {
    "#".to_string()
}

/// Fixed status widget shown under the sidebar menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarStatus {
    pub indicator: StatusIndicator,
    pub refresh: StatusRefresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusIndicator {
    pub icon: String,
    pub color_class: String,
    pub text: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRefresh {
    pub icon: String,
    pub tooltip: String,
}

impl Default for SidebarStatus {
    fn default() -> Self {
        SidebarStatus {
            indicator: StatusIndicator {
                icon: "circle".to_string(),
                color_class: "text-green-500".to_string(),
                text: "状态: 正常".to_string(),
                tooltip: "所有系统运行正常".to_string(),
            },
            refresh: StatusRefresh {
                icon: "sync".to_string(),
                tooltip: "刚刚更新".to_string(),
            },
        }
    }
}

/// Header block with fixed links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub links: Vec<HeaderLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderLink {
    pub label: String,
    pub href: String,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            links: vec![HeaderLink {
                label: "主站".to_string(),
                href: "/".to_string(),
            }],
        }
    }
}

/// Hero block: search box placeholder and engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub search_placeholder: String,
    pub search_engine: SearchEngine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEngine {
    pub name: String,
    /// URL template; always contains a `{query}` placeholder after normalization.
    pub url: String,
}

/// A page section derived from a category, carrying its cards in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// The category slug.
    pub id: String,
    #[serde(rename = "type", default = "default_section_type")]
    pub section_type: String,
    pub title: String,
    pub cards: Vec<SectionCard>,
}

fn default_section_type() -> String {
    "grid".to_string()
}

/// Card payload embedded in a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionCard {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub description: String,
    pub icon: String,
    pub icon_bg_class: String,
    pub icon_color_class: String,
    pub href: String,
}
