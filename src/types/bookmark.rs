use serde::{Deserialize, Serialize};

/// One tracked series, keyed in the store by its manga identifier.
///
/// `name` and `is_completed` are only populated while the store runs in
/// extended mode; baseline entries carry `None` for both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    /// Canonical relative path to the series page, leading `/` stripped
    /// (site format: `Manga/<Name>`).
    pub link: String,
    /// Site-internal identifier of the bookmark row itself. The site manages
    /// bookmarks by this id, not by the manga id.
    pub bookmark_id: String,
    /// Whether the latest tracked chapter is marked read.
    pub is_read: bool,
    /// Display title (extended mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the series has no further unread chapter link (extended mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// One row extracted from the remote bookmark listing.
///
/// Extraction is best-effort: markup missing an expected cell or attribute
/// produces empty/default fields here rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkRow {
    /// Manga identifier (`mid` attribute). Empty when absent in markup.
    pub id: String,
    /// Relative series link with the leading `/` stripped.
    pub link: String,
    /// Bookmark-row identifier (`bdid` attribute).
    pub bookmark_id: String,
    /// Trimmed display title.
    pub name: String,
    /// True when the read marker is visible on the row.
    pub is_read: bool,
    /// True when the row's chapter cell carries no link.
    pub is_completed: bool,
}
