//! MangaMark CLI — one-shot bookmark synchronization.
//!
//! Usage: `mangamark [BASE_URL] [DB_PATH]`
//!
//! Fetches the bookmark listing from the site at `BASE_URL` (default
//! `http://kissmanga.com`), prints the resulting store, and persists it to
//! the SQLite database at `DB_PATH` when given.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mangamark::managers::bookmark_store::BookmarkStoreTrait;
use mangamark::services::fetch::HttpListingFetcher;
use mangamark::services::sync_service::BookmarkSyncService;
use mangamark::storage::SqliteKeyValueStore;

const DEFAULT_BASE_URL: &str = "http://kissmanga.com";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let db_path = args.next();

    let fetcher = HttpListingFetcher::new(&base_url)?;
    let mut service = BookmarkSyncService::new(Box::new(fetcher));
    if let Some(path) = db_path {
        service = service.with_storage(Box::new(SqliteKeyValueStore::open(path)?));
    }
    service.set_extended(true);

    service.sync(None, false)?;

    let store = service.store();
    println!("{} bookmarked series", store.count());
    let mut entries: Vec<_> = store.all().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (id, entry) in entries {
        println!(
            "{:>8}  [{}] {}  ({})",
            id,
            if entry.is_read { "read" } else { "new " },
            entry.name.as_deref().unwrap_or(&entry.link),
            entry.link,
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mangamark: {}", e);
            ExitCode::FAILURE
        }
    }
}
