use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key the whole progress mapping is stored under.
pub const PROGRESS_KEY: &str = "kana-progress";

/// Attempt counters for one glyph, persisted as
/// `{"character", "correct", "incorrect", "lastReviewed"}` with the timestamp
/// in epoch milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProgress {
    #[serde(rename = "character")]
    pub glyph: String,
    pub correct: u32,
    pub incorrect: u32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_reviewed: DateTime<Utc>,
}

impl CharacterProgress {
    pub fn new(glyph: &str, now: DateTime<Utc>) -> Self {
        Self {
            glyph: glyph.to_string(),
            correct: 0,
            incorrect: 0,
            last_reviewed: now,
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }
}

/// Glyph -> progress, the single value behind [`PROGRESS_KEY`].
pub type ProgressMap = BTreeMap<String, CharacterProgress>;
