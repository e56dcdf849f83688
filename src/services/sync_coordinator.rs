//! Bookmark synchronization coordinator.
//!
//! Arbitrates concurrent requests to refresh the bookmark store so that at
//! most one listing fetch is in flight per Idle→Fetching cycle. Callers that
//! ask for a sync while a fetch is outstanding contribute only a callback to
//! the queue; when the fetch resolves, the store is replaced wholesale and
//! every queued callback runs exactly once, in FIFO order.
//!
//! The coordinator never performs I/O itself: [`SyncCoordinator::sync`] tells
//! the caller whether a fetch must be issued, and the fetched markup is
//! delivered back through [`SyncCoordinator::complete_sync`]. This keeps the
//! single-fetch guarantee a checkable contract independent of any transport.

use std::collections::VecDeque;

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::listing_parser;
use crate::types::errors::SyncError;

/// Continuation invoked once the bookmark store is up to date.
pub type SyncCallback = Box<dyn FnOnce(&BookmarkStore)>;

/// What a `sync` call decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The coordinator transitioned Idle→Fetching; the caller must fetch the
    /// listing and hand it to `complete_sync` (or call `abort_sync` on
    /// failure).
    FetchRequired,
    /// A fetch is already outstanding; the callback joined its queue.
    Queued,
    /// Answered from the cache; the callback already ran.
    Served,
}

/// Idle/Fetching state machine owning the bookmark store and the callback
/// queue.
pub struct SyncCoordinator {
    store: BookmarkStore,
    fetching: bool,
    callbacks: VecDeque<SyncCallback>,
}

impl SyncCoordinator {
    pub fn new() -> Self {
        Self {
            store: BookmarkStore::new(),
            fetching: false,
            callbacks: VecDeque::new(),
        }
    }

    /// Requests a synchronization.
    ///
    /// With `sync_once` set and a non-empty store, the callback runs
    /// synchronously against the cache and no state changes. Otherwise the
    /// callback (if any) is enqueued and the return value tells the caller
    /// whether this call opened a new fetch cycle.
    pub fn sync(&mut self, callback: Option<SyncCallback>, sync_once: bool) -> SyncAction {
        if sync_once && !self.store.is_empty() {
            if let Some(cb) = callback {
                cb(&self.store);
            }
            return SyncAction::Served;
        }

        if let Some(cb) = callback {
            self.callbacks.push_back(cb);
        }

        if self.fetching {
            SyncAction::Queued
        } else {
            self.fetching = true;
            SyncAction::FetchRequired
        }
    }

    /// Waits for whatever sync is currently happening, if any.
    ///
    /// Joins the in-flight cycle's queue when Fetching; runs the callback
    /// immediately when Idle. Never opens a new cycle.
    pub fn queue_callback(&mut self, callback: SyncCallback) {
        if self.fetching {
            self.callbacks.push_back(callback);
        } else {
            callback(&self.store);
        }
    }

    /// Completes the outstanding fetch cycle with the raw listing markup.
    ///
    /// Strips embedded images, parses the rows, replaces the store contents,
    /// then drains the callback queue in FIFO order — each callback runs to
    /// completion before the next starts. Returns the number of entries now
    /// in the store.
    ///
    /// A parse failure ends the cycle too (back to Idle, queue intact), so a
    /// later sync can retry and still flush the waiting callbacks.
    pub fn complete_sync(&mut self, raw_html: &str) -> Result<usize, SyncError> {
        if !self.fetching {
            return Err(SyncError::NotFetching);
        }

        let stripped = listing_parser::strip_images(raw_html);
        let rows = match listing_parser::parse_listing(&stripped) {
            Ok(rows) => rows,
            Err(e) => {
                self.fetching = false;
                return Err(e);
            }
        };

        self.store.replace_all(&rows);
        tracing::debug!(entries = self.store.count(), "sync cycle applied");

        while let Some(cb) = self.callbacks.pop_front() {
            cb(&self.store);
        }
        self.fetching = false;

        Ok(self.store.count())
    }

    /// Abandons the outstanding fetch cycle after a transport failure.
    ///
    /// Queued callbacks are kept; the next successful cycle flushes them.
    pub fn abort_sync(&mut self) {
        if self.fetching {
            tracing::warn!(
                pending = self.callbacks.len(),
                "sync cycle aborted before completion"
            );
        }
        self.fetching = false;
    }

    /// True while a fetch is outstanding.
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Number of callbacks waiting on the current (or next) cycle.
    pub fn pending_callbacks(&self) -> usize {
        self.callbacks.len()
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookmarkStore {
        &mut self.store
    }
}

impl Default for SyncCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
