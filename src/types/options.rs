use serde::{Deserialize, Serialize};

/// Flat user options: feature toggles and page-width thresholds consumed by
/// the page-specific feature scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Augment the front page with bookmark state (read markers, blacklist).
    pub frontpage_manager: bool,
    /// Enhanced chapter-page display.
    pub enhanced_display: bool,
    /// Sort the bookmark listing into read/unread sections.
    pub bookmarks_sorting: bool,
    pub max_page_width: u32,
    pub max_double_page_width: u32,
    pub min_page_width: u32,
    pub min_double_page_width: u32,
    /// Disable the max-width clamp entirely.
    pub max_disable: bool,
    /// Disable the min-width clamp entirely.
    pub min_disable: bool,
    /// Master kill switch for every feature.
    pub disabled: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            frontpage_manager: true,
            enhanced_display: true,
            bookmarks_sorting: true,
            max_page_width: 800,
            max_double_page_width: 1800,
            min_page_width: 600,
            min_double_page_width: 1000,
            max_disable: false,
            min_disable: false,
            disabled: false,
        }
    }
}
