use crate::engine::clock::{Clock, SystemClock};
use crate::engine::scoring::{MasteryFilter, ProgressSummary};
use crate::store::KeyValueStore;
use crate::store::schema::{CharacterProgress, PROGRESS_KEY, ProgressMap};

/// Per-character attempt counters on top of a [`KeyValueStore`].
///
/// Nothing is cached between calls: every operation reads the whole mapping
/// from the store, and every update writes the whole mapping back. Two
/// trackers over the same store therefore race, and the last write wins.
///
/// With no store attached the tracker runs in unsaved mode: reads are empty
/// and writes are dropped. Store failures and corrupt data are logged and
/// treated the same way, so no call here can fail. An unreadable value is
/// left in place until [`clear_all_progress`](Self::clear_all_progress)
/// removes it.
pub struct ProgressTracker<S, C = SystemClock> {
    store: Option<S>,
    clock: C,
}

impl<S: KeyValueStore> ProgressTracker<S, SystemClock> {
    pub fn new(store: Option<S>) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ProgressTracker<S, C> {
    pub fn with_clock(store: Option<S>, clock: C) -> Self {
        Self { store, clock }
    }

    /// False in unsaved mode.
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// The stored mapping, or `None` when it could not be read or parsed.
    /// A missing key is an empty mapping, not a failure.
    fn try_load_map(&self) -> Option<ProgressMap> {
        let store = self.store.as_ref()?;
        let raw = match store.get(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Some(ProgressMap::new()),
            Err(e) => {
                tracing::warn!("reading progress failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Some(map),
            Err(e) => {
                tracing::warn!("stored progress is corrupt: {e}");
                None
            }
        }
    }

    fn load_map(&self) -> ProgressMap {
        self.try_load_map().unwrap_or_default()
    }

    fn save_map(&self, map: &ProgressMap) {
        let Some(store) = &self.store else {
            tracing::debug!("no progress store attached, update not saved");
            return;
        };
        let json = match serde_json::to_string(map) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("serializing progress failed: {e}");
                return;
            }
        };
        if let Err(e) = store.set(PROGRESS_KEY, &json) {
            tracing::warn!("saving progress failed: {e}");
        }
    }

    /// The one read-modify-write path over the progress mapping. Any locking
    /// for multi-writer backends belongs here.
    fn update_map(&self, mutate: impl FnOnce(&mut ProgressMap)) {
        if self.store.is_none() {
            tracing::debug!("no progress store attached, update not saved");
            return;
        }
        // Never overwrite a value that failed to load.
        let Some(mut map) = self.try_load_map() else {
            tracing::warn!("stored progress unreadable, update not saved");
            return;
        };
        mutate(&mut map);
        self.save_map(&map);
    }

    pub fn record_attempt(&self, glyph: &str, was_correct: bool) {
        let now = self.clock.now();
        self.update_map(|map| {
            let entry = map
                .entry(glyph.to_string())
                .or_insert_with(|| CharacterProgress::new(glyph, now));
            if was_correct {
                entry.correct = entry.correct.saturating_add(1);
            } else {
                entry.incorrect = entry.incorrect.saturating_add(1);
            }
            entry.last_reviewed = now;
        });
    }

    /// Every tracked character, in glyph order.
    pub fn get_all_progress(&self) -> Vec<CharacterProgress> {
        self.load_map().into_values().collect()
    }

    pub fn get_progress(&self, glyph: &str) -> Option<CharacterProgress> {
        self.load_map().remove(glyph)
    }

    /// Irreversibly forget all progress.
    pub fn clear_all_progress(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.remove(PROGRESS_KEY) {
            tracing::warn!("clearing progress failed: {e}");
        }
    }

    pub fn filtered_progress(
        &self,
        filter: MasteryFilter,
        threshold: u32,
    ) -> Vec<CharacterProgress> {
        self.get_all_progress()
            .into_iter()
            .filter(|entry| filter.matches(entry, threshold))
            .collect()
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_entries(&self.get_all_progress())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::engine::clock::FixedClock;
    use crate::engine::scoring::compute_accuracy;
    use crate::store::{MemoryStore, StoreError};

    fn tracker(store: &MemoryStore) -> ProgressTracker<&MemoryStore, FixedClock> {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        ProgressTracker::with_clock(Some(store), FixedClock::new(start))
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::new(key, std::io::Error::other("disk on fire")))
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::new(key, std::io::Error::other("disk on fire")))
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            Err(StoreError::new(key, std::io::Error::other("disk on fire")))
        }
    }

    #[test]
    fn first_attempt_creates_entry() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        assert!(progress.get_progress("あ").is_none());

        progress.record_attempt("あ", true);
        let entry = progress.get_progress("あ").unwrap();
        assert_eq!(entry.glyph, "あ");
        assert_eq!((entry.correct, entry.incorrect), (1, 0));
        assert!(entry.total_attempts() >= 1);
    }

    #[test]
    fn correct_then_incorrect_is_fifty_percent() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        progress.record_attempt("あ", true);
        progress.record_attempt("あ", false);
        let entry = progress.get_progress("あ").unwrap();
        assert_eq!((entry.correct, entry.incorrect), (1, 1));
        assert_eq!(compute_accuracy(&entry), 50);
    }

    #[test]
    fn three_right_one_wrong_is_seventy_five() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        for _ in 0..3 {
            progress.record_attempt("あ", true);
        }
        progress.record_attempt("あ", false);
        assert_eq!(compute_accuracy(&progress.get_progress("あ").unwrap()), 75);
    }

    #[test]
    fn every_attempt_overwrites_timestamp() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        progress.record_attempt("か", true);
        let first = progress.get_progress("か").unwrap().last_reviewed;

        progress.clock.advance(Duration::hours(2));
        progress.record_attempt("か", false);
        let second = progress.get_progress("か").unwrap().last_reviewed;
        assert_eq!(second - first, Duration::hours(2));
    }

    #[test]
    fn clear_then_list_is_empty() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        progress.record_attempt("あ", true);
        progress.record_attempt("い", false);
        assert_eq!(progress.get_all_progress().len(), 2);

        progress.clear_all_progress();
        assert!(progress.get_all_progress().is_empty());
        assert!(progress.get_progress("あ").is_none());
    }

    #[test]
    fn repeated_reads_are_equal() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        progress.record_attempt("う", true);
        progress.record_attempt("え", false);
        assert_eq!(progress.get_all_progress(), progress.get_all_progress());
    }

    #[test]
    fn corrupt_value_reads_as_empty_and_is_kept() {
        let store = MemoryStore::new();
        store.set(PROGRESS_KEY, "{not json").unwrap();
        let progress = tracker(&store);
        assert!(progress.get_all_progress().is_empty());

        progress.record_attempt("お", true);
        assert_eq!(store.get(PROGRESS_KEY).unwrap().as_deref(), Some("{not json"));
        assert!(progress.get_all_progress().is_empty());
    }

    #[test]
    fn malformed_entry_does_not_erase_valid_history() {
        let store = MemoryStore::new();
        let raw = r#"{"あ":{"character":"あ","correct":40,"incorrect":2,"lastReviewed":1700000000000},"い":{"character":"い","correct":1,"incorrect":0}}"#;
        store.set(PROGRESS_KEY, raw).unwrap();
        let progress = tracker(&store);

        progress.record_attempt("う", true);
        assert_eq!(store.get(PROGRESS_KEY).unwrap().as_deref(), Some(raw));
        assert!(progress.get_progress("う").is_none());
    }

    #[test]
    fn clear_recovers_from_corrupt_value() {
        let store = MemoryStore::new();
        store.set(PROGRESS_KEY, "[[[").unwrap();
        let progress = tracker(&store);
        progress.clear_all_progress();

        progress.record_attempt("お", true);
        let all = progress.get_all_progress();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].correct, 1);
    }

    #[test]
    fn unsaved_mode_drops_writes() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let progress: ProgressTracker<MemoryStore, _> =
            ProgressTracker::with_clock(None, FixedClock::new(start));
        assert!(!progress.is_persistent());
        progress.record_attempt("あ", true);
        assert!(progress.get_all_progress().is_empty());
        assert!(progress.get_progress("あ").is_none());
        progress.clear_all_progress();
    }

    #[test]
    fn failing_store_degrades_to_empty() {
        let progress = ProgressTracker::new(Some(BrokenStore));
        progress.record_attempt("あ", true);
        assert!(progress.get_all_progress().is_empty());
        progress.clear_all_progress();
        assert_eq!(progress.summary(), ProgressSummary::default());
    }

    #[test]
    fn stale_full_write_loses_newer_entries() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        progress.record_attempt("あ", true);

        // A second client snapshots the mapping, then writes it back after
        // this tracker has recorded another attempt.
        let snapshot = store.get(PROGRESS_KEY).unwrap().unwrap();
        progress.record_attempt("い", true);
        store.set(PROGRESS_KEY, &snapshot).unwrap();

        assert!(progress.get_progress("い").is_none());
        assert_eq!(progress.get_progress("あ").unwrap().correct, 1);
    }

    #[test]
    fn sequential_writers_both_land() {
        let store = MemoryStore::new();
        let tab_a = tracker(&store);
        let tab_b = tracker(&store);
        tab_a.record_attempt("あ", true);
        tab_b.record_attempt("あ", false);
        tab_b.record_attempt("い", true);
        let entry = tab_a.get_progress("あ").unwrap();
        assert_eq!((entry.correct, entry.incorrect), (1, 1));
        assert_eq!(tab_a.get_all_progress().len(), 2);
    }

    #[test]
    fn filter_and_summary_use_stored_counters() {
        let store = MemoryStore::new();
        let progress = tracker(&store);
        for _ in 0..4 {
            progress.record_attempt("あ", true);
        }
        progress.record_attempt("い", false);

        let mastered = progress.filtered_progress(MasteryFilter::Mastered, 80);
        let learning = progress.filtered_progress(MasteryFilter::Learning, 80);
        assert_eq!(mastered.len(), 1);
        assert_eq!(mastered[0].glyph, "あ");
        assert_eq!(learning.len(), 1);
        assert_eq!(learning[0].glyph, "い");

        let summary = progress.summary();
        assert_eq!(summary.characters_studied, 2);
        assert_eq!(summary.overall_accuracy, 80);
    }
}
