//! Bookmark sync service.
//!
//! Composition root for the bookmark cache: drives the [`SyncCoordinator`]
//! with an injected [`ListingFetcher`] and, when storage is attached,
//! persists the resulting bookmark map as a side effect of each successful
//! cycle.

use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::fetch::ListingFetcher;
use crate::services::sync_coordinator::{SyncAction, SyncCallback, SyncCoordinator};
use crate::storage::{KeyValueStore, BOOKMARKS_KEY};
use crate::types::errors::SyncError;

/// High-level bookmark synchronization facade.
pub struct BookmarkSyncService {
    coordinator: SyncCoordinator,
    fetcher: Box<dyn ListingFetcher>,
    storage: Option<Box<dyn KeyValueStore>>,
}

impl BookmarkSyncService {
    pub fn new(fetcher: Box<dyn ListingFetcher>) -> Self {
        Self {
            coordinator: SyncCoordinator::new(),
            fetcher,
            storage: None,
        }
    }

    /// Attaches a key-value store; each successful sync then persists the
    /// bookmark map under the `bookmarks` key.
    pub fn with_storage(mut self, storage: Box<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Synchronizes the bookmarks from the remote listing.
    ///
    /// `sync_once` answers from the cache when the store is already
    /// populated. On a transport or parse failure the coordinator returns to
    /// Idle with its callback queue intact, so a later call can retry and
    /// still flush every waiter.
    pub fn sync(&mut self, callback: Option<SyncCallback>, sync_once: bool) -> Result<(), SyncError> {
        match self.coordinator.sync(callback, sync_once) {
            SyncAction::FetchRequired => {
                let html = match self.fetcher.fetch_listing() {
                    Ok(html) => html,
                    Err(e) => {
                        self.coordinator.abort_sync();
                        return Err(e);
                    }
                };
                let count = self.coordinator.complete_sync(&html)?;
                tracing::info!(count, "bookmarks synchronized");
                self.persist();
                Ok(())
            }
            SyncAction::Queued | SyncAction::Served => Ok(()),
        }
    }

    /// Defers `callback` until the in-flight sync completes, or runs it
    /// immediately if none is outstanding.
    pub fn queue_callback(&mut self, callback: SyncCallback) {
        self.coordinator.queue_callback(callback);
    }

    /// Persists the current bookmark map. Best-effort: a storage failure is
    /// logged but does not fail the sync that produced the data.
    fn persist(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        match serde_json::to_string(self.coordinator.store().all()) {
            Ok(json) => {
                if let Err(e) = storage.set(BOOKMARKS_KEY, &json) {
                    tracing::warn!(error = %e, "failed to persist bookmarks");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize bookmarks"),
        }
    }

    /// Toggles extended-mode capture on the underlying store.
    pub fn set_extended(&mut self, extended: bool) {
        self.coordinator.store_mut().set_extended(extended);
    }

    pub fn store(&self) -> &BookmarkStore {
        self.coordinator.store()
    }

    pub fn store_mut(&mut self) -> &mut BookmarkStore {
        self.coordinator.store_mut()
    }

    pub fn coordinator(&self) -> &SyncCoordinator {
        &self.coordinator
    }
}
