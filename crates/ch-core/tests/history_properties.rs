//! Behavioural checks of the history engine across longer capture sequences.

use std::collections::HashSet;

use ch_core::{rank, Entry, HistoryState, HistoryStore};

/// Deterministic pseudo-random capture stream drawn from a small vocabulary,
/// so that repeats and move-to-front happen often.
fn capture_stream(seed: u64, len: usize) -> Vec<String> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            format!("snippet-{}", (x >> 33) % 40)
        })
        .collect()
}

#[test]
fn entries_stay_unique_and_bounded_for_any_capture_sequence() {
    for seed in 1..20 {
        let mut store = HistoryStore::empty(10);
        for text in capture_stream(seed, 300) {
            store.ingest(&text).unwrap();

            let mut seen = HashSet::new();
            assert!(store.entries().iter().all(|e| seen.insert(e.text().to_owned())));
            assert!(store.len() <= 10);
            assert_eq!(store.head().map(Entry::text), Some(text.as_str()));
        }
    }
}

#[test]
fn pins_survive_capacity_pressure() {
    let mut store = HistoryStore::empty(10);
    for text in ["keep-1", "keep-2", "keep-3"] {
        store.ingest(text).unwrap();
        store.toggle_pin(text).unwrap();
    }

    for text in capture_stream(7, 500) {
        store.ingest(&text).unwrap();
        for pinned in ["keep-1", "keep-2", "keep-3"] {
            assert!(store.contains(pinned), "{pinned} evicted");
        }
        assert!(store.len() <= 10);
    }

    let view = store.ordered_view();
    let head: Vec<&str> = view.iter().take(3).map(Entry::text).collect();
    assert_eq!(head, vec!["keep-3", "keep-2", "keep-1"]);
}

#[test]
fn overfull_ingest_keeps_pins_and_newest_unpinned() {
    // [a*, b, c, d] under a capacity of 3, not yet trimmed.
    let mut store = HistoryStore::empty(3);
    store.restore(HistoryState::new(
        ["a", "b", "c", "d"].into_iter().map(Entry::new).collect(),
        ["a".to_string()].into_iter().collect(),
    ));
    assert_eq!(store.len(), 4);

    assert!(store.ingest("e").unwrap());

    let kept: HashSet<&str> = store.entries().iter().map(Entry::text).collect();
    assert_eq!(kept, HashSet::from(["a", "e", "b"]));
    assert!(store.is_pinned("a"));
    assert_eq!(
        store.ordered_view(),
        vec![Entry::new("a"), Entry::new("e"), Entry::new("b")]
    );
}

#[test]
fn search_runs_over_the_ordered_view() {
    let entries = ["git status", "cargo build", "git commit -m", "go install tool"]
        .iter()
        .map(|t| Entry::new(*t))
        .collect();
    let mut store = HistoryStore::new(HistoryState::new(entries, Default::default()), 50);
    store.toggle_pin("go install tool").unwrap();

    let ranked = rank(&store.ordered_view(), "git");
    let texts: Vec<&str> = ranked.iter().map(Entry::text).collect();
    assert_eq!(texts, vec!["git status", "git commit -m", "go install tool"]);
}
