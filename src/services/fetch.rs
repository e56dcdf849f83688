//! Listing fetch capability.
//!
//! [`ListingFetcher`] is the narrow seam between the sync machinery and the
//! network, so tests (and alternative transports) can substitute a fake.
//! The reqwest-backed implementation lives behind the `network` feature.

use crate::types::errors::SyncError;

/// Relative path of the bookmark listing page on the site.
pub const BOOKMARK_LIST_PATH: &str = "/BookmarkList";

/// Capability to fetch the raw bookmark listing markup.
pub trait ListingFetcher {
    fn fetch_listing(&self) -> Result<String, SyncError>;
}

#[cfg(feature = "network")]
mod http {
    use std::time::Duration;

    use super::{ListingFetcher, BOOKMARK_LIST_PATH};
    use crate::types::errors::SyncError;

    /// HTTP fetcher for the bookmark listing page.
    pub struct HttpListingFetcher {
        client: reqwest::blocking::Client,
        url: String,
    }

    impl HttpListingFetcher {
        /// Creates a fetcher for the given site base URL (e.g.
        /// `http://kissmanga.com`).
        ///
        /// The client carries a request timeout so a hung remote cannot
        /// leave a sync cycle outstanding forever.
        pub fn new(base_url: &str) -> Result<Self, SyncError> {
            let client = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .map_err(|e| SyncError::Network(e.to_string()))?;
            let url = format!("{}{}", base_url.trim_end_matches('/'), BOOKMARK_LIST_PATH);
            Ok(Self { client, url })
        }

        /// The full listing URL this fetcher targets.
        pub fn url(&self) -> &str {
            &self.url
        }
    }

    impl ListingFetcher for HttpListingFetcher {
        fn fetch_listing(&self) -> Result<String, SyncError> {
            tracing::debug!(url = %self.url, "fetching bookmark listing");
            self.client
                .get(&self.url)
                .send()
                .and_then(|resp| resp.error_for_status())
                .and_then(|resp| resp.text())
                .map_err(|e| SyncError::Network(e.to_string()))
        }
    }
}

#[cfg(feature = "network")]
pub use http::HttpListingFetcher;
