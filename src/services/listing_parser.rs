//! Bookmark listing parser.
//!
//! The remote site has no API; the user's bookmarks exist only as an HTML
//! table on the listing page. Rows after the header carry, across four cells:
//! the series link and title, the latest-chapter link (absent when the series
//! is completed), the bookmark-row id (`bdid`) next to a `read`/`unread`
//! visibility toggle, and the manga id (`mid`).
//!
//! Extraction is best-effort: a cell or attribute missing from a row yields
//! default field values, never an error. Only rows without a manga id are
//! dropped, since they cannot be keyed.

use std::borrow::Cow;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::types::bookmark::BookmarkRow;
use crate::types::errors::SyncError;

/// Removes embedded `<img>` tags from raw listing markup.
///
/// The listing embeds cover thumbnails; parsing them serves no purpose for
/// metadata extraction and triggers eager image loading in DOM-backed
/// consumers, so they are stripped before the document is parsed.
pub fn strip_images(html: &str) -> Cow<'_, str> {
    // Unwrap is safe: the pattern is a literal.
    let img_tag = Regex::new(r"<img[^>]*>").unwrap();
    img_tag.replace_all(html, "")
}

struct ListingSelectors {
    row: Selector,
    cell: Selector,
    series_link: Selector,
    any_link: Selector,
    read_marker: Selector,
}

impl ListingSelectors {
    fn new() -> Result<Self, SyncError> {
        let parse = |css: &str| {
            Selector::parse(css).map_err(|e| SyncError::Parse(e.to_string()))
        };
        Ok(Self {
            row: parse("table.listing tr")?,
            cell: parse("td")?,
            series_link: parse("a.aManga")?,
            any_link: parse("a")?,
            read_marker: parse(".aRead")?,
        })
    }
}

/// The site toggles the read/unread markers with inline `display: none`.
fn is_visible(el: ElementRef) -> bool {
    match el.value().attr("style") {
        Some(style) => {
            let compact: String = style
                .to_ascii_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            !compact.contains("display:none")
        }
        None => true,
    }
}

fn first_attr<'a>(cell: Option<&ElementRef<'a>>, sel: &Selector, attr: &str) -> Option<&'a str> {
    cell.and_then(|c| c.select(sel).next())
        .and_then(|a| a.value().attr(attr))
}

/// Parses the bookmark listing into rows.
///
/// Call [`strip_images`] on the raw markup first; this function parses
/// whatever it is given.
pub fn parse_listing(html: &str) -> Result<Vec<BookmarkRow>, SyncError> {
    let selectors = ListingSelectors::new()?;
    let document = Html::parse_document(html);

    let mut rows = Vec::new();
    // The first row of the listing table is a header.
    for tr in document.select(&selectors.row).skip(1) {
        let cells: Vec<ElementRef> = tr.select(&selectors.cell).collect();

        let series = cells.first().and_then(|c| c.select(&selectors.series_link).next());
        let link = series
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.strip_prefix('/').unwrap_or(href).to_string())
            .unwrap_or_default();
        let name = series
            .map(|a| a.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        // No latest-chapter link means there is nothing left unread to track.
        let is_completed = cells
            .get(1)
            .map(|c| c.select(&selectors.any_link).next().is_none())
            .unwrap_or(false);

        let bookmark_id = first_attr(cells.get(2), &selectors.any_link, "bdid")
            .unwrap_or_default()
            .to_string();
        let is_read = cells
            .get(2)
            .and_then(|c| c.select(&selectors.read_marker).next())
            .map(is_visible)
            .unwrap_or(false);

        let id = first_attr(cells.get(3), &selectors.any_link, "mid")
            .unwrap_or_default()
            .to_string();

        if id.is_empty() {
            tracing::debug!(link = %link, "skipping listing row without a manga id");
            continue;
        }

        rows.push(BookmarkRow {
            id,
            link,
            bookmark_id,
            name,
            is_read,
            is_completed,
        });
    }

    Ok(rows)
}
