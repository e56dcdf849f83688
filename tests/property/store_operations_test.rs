//! Property-based tests for BookmarkStore operations.
//!
//! Verifies the replace-all counting law (the store holds exactly the
//! distinct ids of the input rows) and the lookup-by-link law (every stored
//! link resolves back to its id) for arbitrary row sets.

use std::collections::HashSet;

use mangamark::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use mangamark::types::bookmark::BookmarkRow;
use proptest::prelude::*;

/// Strategy for row sets with possibly-duplicated numeric ids.
fn arb_rows() -> impl Strategy<Value = Vec<BookmarkRow>> {
    proptest::collection::vec((0u16..200, any::<bool>(), any::<bool>()), 0..40).prop_map(
        |tuples| {
            tuples
                .into_iter()
                .map(|(id, is_read, is_completed)| BookmarkRow {
                    id: id.to_string(),
                    link: format!("Manga/Series-{}", id),
                    bookmark_id: format!("{}", 10_000 + u32::from(id)),
                    name: format!("Series {}", id),
                    is_read,
                    is_completed,
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // After replace_all(R), count() equals the number of distinct ids in R
    // and all() contains exactly those ids.
    #[test]
    fn replace_all_holds_exactly_the_distinct_ids(rows in arb_rows()) {
        let mut store = BookmarkStore::new();
        store.replace_all(&rows);

        let distinct: HashSet<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(store.count(), distinct.len());
        prop_assert_eq!(store.is_empty(), distinct.is_empty());
        for id in &distinct {
            prop_assert!(store.all().contains_key(*id));
        }
        prop_assert_eq!(store.all().len(), distinct.len());
    }

    // replace_all is a full replacement: no entry from a previous generation
    // survives unless re-listed.
    #[test]
    fn replace_all_is_wholesale(first in arb_rows(), second in arb_rows()) {
        let mut store = BookmarkStore::new();
        store.replace_all(&first);
        store.replace_all(&second);

        let expected: HashSet<&str> = second.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(store.count(), expected.len());
        for id in store.all().keys() {
            prop_assert!(expected.contains(id.as_str()));
        }
    }

    // Every stored link resolves to the entry that carries it, with or
    // without a leading slash, and absent links resolve to nothing.
    #[test]
    fn lookup_by_link_resolves_stored_links(rows in arb_rows()) {
        let mut store = BookmarkStore::new();
        store.replace_all(&rows);

        for row in &rows {
            let (id, entry) = store
                .lookup_by_link(&row.link)
                .expect("stored link should resolve");
            // Links are derived 1:1 from ids here, so the match is exact.
            prop_assert_eq!(id, row.id.as_str());
            prop_assert_eq!(&entry.link, &row.link);

            // The leading-slash form resolves to the same entry.
            let (slashed_id, _) = store
                .lookup_by_link(&format!("/{}", row.link))
                .expect("slashed link should resolve");
            prop_assert_eq!(slashed_id, row.id.as_str());
        }
        prop_assert!(store.lookup_by_link("/Manga/Not-Stored").is_none());
    }
}
