//! Showcase category catalog loaded from the build-time manifest.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/showcase_manifest_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One page of the component catalog.
pub enum ShowcaseCategory {
    /// Button variants and sizes.
    Button,
    /// Switches.
    Toggle,
    /// Checkbox, radio, and select controls.
    Box,
    /// Text input and text area.
    Area,
    /// Modal and form modal.
    Modal,
    /// Data table and pagination.
    Table,
    /// Range calendars.
    Calendar,
    /// Alert, toast, and loading.
    Feedback,
}

impl ShowcaseCategory {
    /// Every category, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Button,
        Self::Toggle,
        Self::Box,
        Self::Area,
        Self::Modal,
        Self::Table,
        Self::Calendar,
        Self::Feedback,
    ];

    /// URL segment and manifest id.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Toggle => "toggle",
            Self::Box => "box",
            Self::Area => "area",
            Self::Modal => "modal",
            Self::Table => "table",
            Self::Calendar => "calendar",
            Self::Feedback => "feedback",
        }
    }

    /// Manifest entry for this category.
    ///
    /// Falls back to a slug-derived entry if the manifest omits the category; the
    /// manifest tests keep the two in sync.
    pub fn entry(self) -> CategoryEntry {
        manifest()
            .categories
            .iter()
            .find(|entry| entry.id == self.slug())
            .cloned()
            .unwrap_or_else(|| CategoryEntry {
                id: self.slug().to_string(),
                label: self.slug().to_string(),
                title: self.slug().to_string(),
                description: String::new(),
            })
    }

    /// Route path that shows this category.
    pub fn href(self) -> String {
        format!("/components/{}", self.slug())
    }
}

impl Default for ShowcaseCategory {
    fn default() -> Self {
        Self::Button
    }
}

impl fmt::Display for ShowcaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown showcase category `{slug}`")]
/// Returned when a route segment names no catalog category.
pub struct CategoryParseError {
    /// The rejected segment.
    pub slug: String,
}

impl FromStr for ShowcaseCategory {
    type Err = CategoryParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let slug = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == slug)
            .ok_or(CategoryParseError {
                slug: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Display copy for one category.
pub struct CategoryEntry {
    /// Manifest id, equal to [`ShowcaseCategory::slug`].
    pub id: String,
    /// Navigation label.
    pub label: String,
    /// Page heading.
    pub title: String,
    /// Page lead text.
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
/// Demo values shared by the category pages.
pub struct DemoDefaults {
    /// Item count behind the pagination demo.
    pub table_total: i64,
    /// Items per page in the pagination demo.
    pub table_page_size: i64,
    /// Page buttons per window.
    pub pagination_visible_count: i64,
    /// Toast auto-dismiss delay.
    pub toast_duration_ms: u32,
}

#[derive(Debug, Clone, Deserialize)]
/// Parsed showcase manifest.
pub struct ShowcaseManifest {
    /// Manifest format version, validated at build time.
    pub schema_version: u32,
    /// Sidebar brand text.
    pub brand: String,
    /// Shared demo values.
    pub demo: DemoDefaults,
    /// Categories in navigation order.
    pub categories: Vec<CategoryEntry>,
}

/// The manifest compiled into this crate.
pub fn manifest() -> &'static ShowcaseManifest {
    static MANIFEST: OnceLock<ShowcaseManifest> = OnceLock::new();
    MANIFEST.get_or_init(|| {
        serde_json::from_str(SHOWCASE_MANIFEST_JSON)
            .expect("generated showcase manifest should parse")
    })
}

/// Shared demo values from the manifest.
pub fn demo_defaults() -> DemoDefaults {
    manifest().demo
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_lists_every_category_in_navigation_order() {
        let ids: Vec<&str> = manifest()
            .categories
            .iter()
            .map(|entry| entry.id.as_str())
            .collect();
        let slugs: Vec<&str> = ShowcaseCategory::ALL
            .iter()
            .map(|category| category.slug())
            .collect();
        assert_eq!(ids, slugs);
    }

    #[test]
    fn manifest_entries_carry_display_copy() {
        for category in ShowcaseCategory::ALL {
            let entry = category.entry();
            assert_eq!(entry.id, category.slug());
            assert!(!entry.label.is_empty());
            assert!(!entry.title.is_empty());
        }
        assert_eq!(ShowcaseCategory::Box.entry().label, "Box");
    }

    #[test]
    fn demo_defaults_match_pagination_walkthrough() {
        let demo = demo_defaults();
        assert_eq!(manifest().schema_version, 1);
        assert_eq!(manifest().brand, "UI Components");
        assert_eq!(demo.table_total, 123);
        assert_eq!(demo.table_page_size, 10);
        assert_eq!(demo.pagination_visible_count, 5);
        assert_eq!(demo.toast_duration_ms, 3000);
    }

    #[test]
    fn slugs_parse_case_insensitively() {
        for category in ShowcaseCategory::ALL {
            assert_eq!(category.slug().parse::<ShowcaseCategory>(), Ok(category));
        }
        assert_eq!("  Calendar ".parse(), Ok(ShowcaseCategory::Calendar));
        assert_eq!(
            "charts".parse::<ShowcaseCategory>(),
            Err(CategoryParseError {
                slug: "charts".to_string()
            })
        );
    }

    #[test]
    fn href_uses_component_route() {
        assert_eq!(ShowcaseCategory::Table.href(), "/components/table");
        assert_eq!(ShowcaseCategory::default(), ShowcaseCategory::Button);
    }
}
