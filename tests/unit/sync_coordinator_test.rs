//! Unit tests for the SyncCoordinator state machine.
//!
//! Covers the Idle/Fetching transitions, callback queuing and FIFO fan-out,
//! the sync-once short circuit, and the failure path.

use std::cell::RefCell;
use std::rc::Rc;

use mangamark::managers::bookmark_store::BookmarkStoreTrait;
use mangamark::services::sync_coordinator::{SyncAction, SyncCoordinator};
use mangamark::types::bookmark::BookmarkRow;
use mangamark::types::errors::SyncError;

/// Raw listing markup: header plus a read row (mid 10) and an unread row
/// (mid 11), with embedded images the way the site serves them.
const LISTING_HTML: &str = "<html><body><table class=\"listing\">\
    <tr><th>Manga Name</th><th>Latest Chapter</th><th></th><th></th></tr>\
    <tr>\
    <td><a class=\"aManga\" href=\"/Manga/Foo\">Foo</a><img src=\"/covers/foo.png\"></td>\
    <td><a href=\"/Manga/Foo/Ch-010\">Ch 010</a></td>\
    <td><a class=\"aRead\" bdid=\"5\" href=\"#\">Read</a>\
        <a class=\"aUnRead\" bdid=\"5\" href=\"#\" style=\"display: none;\">Unread</a></td>\
    <td><a mid=\"10\" href=\"#\">Remove</a></td>\
    </tr>\
    <tr>\
    <td><a class=\"aManga\" href=\"/Manga/Bar\">Bar</a><img src=\"/covers/bar.png\"></td>\
    <td><a href=\"/Manga/Bar/Ch-003\">Ch 003</a></td>\
    <td><a class=\"aRead\" bdid=\"6\" href=\"#\" style=\"display: none;\">Read</a>\
        <a class=\"aUnRead\" bdid=\"6\" href=\"#\">Unread</a></td>\
    <td><a mid=\"11\" href=\"#\">Remove</a></td>\
    </tr>\
    </table></body></html>";

fn seed_row(id: &str) -> BookmarkRow {
    BookmarkRow {
        id: id.to_string(),
        link: format!("Manga/Seed{}", id),
        ..Default::default()
    }
}

#[test]
fn test_first_sync_opens_a_fetch_cycle() {
    let mut coord = SyncCoordinator::new();
    assert!(!coord.is_fetching());

    assert_eq!(coord.sync(None, false), SyncAction::FetchRequired);
    assert!(coord.is_fetching());
}

#[test]
fn test_sync_while_fetching_queues_instead_of_refetching() {
    let mut coord = SyncCoordinator::new();
    assert_eq!(coord.sync(None, false), SyncAction::FetchRequired);

    // Every further request joins the outstanding cycle.
    assert_eq!(coord.sync(Some(Box::new(|_| {})), false), SyncAction::Queued);
    assert_eq!(coord.sync(None, false), SyncAction::Queued);
    assert_eq!(coord.pending_callbacks(), 1);
}

#[test]
fn test_complete_sync_end_to_end() {
    let mut coord = SyncCoordinator::new();
    assert_eq!(coord.sync(None, false), SyncAction::FetchRequired);

    let count = coord.complete_sync(LISTING_HTML).unwrap();
    assert_eq!(count, 2);
    assert!(!coord.is_fetching());

    let store = coord.store();
    assert_eq!(store.count(), 2);
    assert!(store.all()["10"].is_read);
    assert!(!store.all()["11"].is_read);
    assert_eq!(store.all()["10"].bookmark_id, "5");

    let (id, entry) = store.lookup_by_link("/Manga/Bar").expect("should find Bar");
    assert_eq!(id, "11");
    assert_eq!(entry.bookmark_id, "6");
}

#[test]
fn test_callbacks_run_in_fifo_order_exactly_once() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut coord = SyncCoordinator::new();

    for i in 0..4 {
        let order = Rc::clone(&order);
        coord.sync(Some(Box::new(move |_| order.borrow_mut().push(i))), false);
    }
    assert!(order.borrow().is_empty(), "callbacks must wait for completion");

    coord.complete_sync(LISTING_HTML).unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
    assert_eq!(coord.pending_callbacks(), 0);

    // A later cycle must not run them again.
    coord.sync(None, false);
    coord.complete_sync(LISTING_HTML).unwrap();
    assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
}

#[test]
fn test_callbacks_observe_the_updated_store() {
    let seen = Rc::new(RefCell::new(0usize));
    let mut coord = SyncCoordinator::new();
    {
        let seen = Rc::clone(&seen);
        coord.sync(Some(Box::new(move |store| *seen.borrow_mut() = store.count())), false);
    }
    coord.complete_sync(LISTING_HTML).unwrap();
    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn test_sync_once_on_populated_store_serves_from_cache() {
    let mut coord = SyncCoordinator::new();
    coord.store_mut().upsert(&seed_row("10"));

    let ran = Rc::new(RefCell::new(false));
    let action = {
        let ran = Rc::clone(&ran);
        coord.sync(Some(Box::new(move |_| *ran.borrow_mut() = true)), true)
    };

    // Callback ran synchronously; no cycle was opened.
    assert_eq!(action, SyncAction::Served);
    assert!(*ran.borrow());
    assert!(!coord.is_fetching());
    assert_eq!(coord.pending_callbacks(), 0);
}

#[test]
fn test_sync_once_on_empty_store_still_fetches() {
    let mut coord = SyncCoordinator::new();
    assert_eq!(coord.sync(None, true), SyncAction::FetchRequired);
}

#[test]
fn test_queue_callback_runs_immediately_when_idle() {
    let ran = Rc::new(RefCell::new(false));
    let mut coord = SyncCoordinator::new();
    {
        let ran = Rc::clone(&ran);
        coord.queue_callback(Box::new(move |_| *ran.borrow_mut() = true));
    }
    assert!(*ran.borrow());
}

#[test]
fn test_queue_callback_defers_while_fetching() {
    let ran = Rc::new(RefCell::new(false));
    let mut coord = SyncCoordinator::new();
    coord.sync(None, false);
    {
        let ran = Rc::clone(&ran);
        coord.queue_callback(Box::new(move |_| *ran.borrow_mut() = true));
    }
    assert!(!*ran.borrow());

    coord.complete_sync(LISTING_HTML).unwrap();
    assert!(*ran.borrow());
}

#[test]
fn test_complete_sync_while_idle_is_an_error() {
    let mut coord = SyncCoordinator::new();
    match coord.complete_sync(LISTING_HTML) {
        Err(SyncError::NotFetching) => {}
        other => panic!("expected NotFetching, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_abort_sync_returns_to_idle_and_keeps_callbacks() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut coord = SyncCoordinator::new();
    {
        let order = Rc::clone(&order);
        coord.sync(Some(Box::new(move |_| order.borrow_mut().push("queued"))), false);
    }

    coord.abort_sync();
    assert!(!coord.is_fetching());
    assert_eq!(coord.pending_callbacks(), 1);
    assert!(order.borrow().is_empty());

    // The next successful cycle flushes the survivor.
    assert_eq!(coord.sync(None, false), SyncAction::FetchRequired);
    coord.complete_sync(LISTING_HTML).unwrap();
    assert_eq!(*order.borrow(), vec!["queued"]);
}

#[test]
fn test_replace_on_each_cycle_drops_stale_entries() {
    let mut coord = SyncCoordinator::new();
    coord.store_mut().upsert(&seed_row("99"));

    coord.sync(None, false);
    coord.complete_sync(LISTING_HTML).unwrap();

    assert!(!coord.store().all().contains_key("99"));
    assert_eq!(coord.store().count(), 2);
}
