use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::store::schema::CharacterProgress;

/// Accuracy at or above which a character counts as mastered.
pub const DEFAULT_MASTERY_THRESHOLD: u32 = 80;

/// `correct / (correct + incorrect)` as a whole percentage, halves rounded up.
/// Zero attempts give 0.
pub fn accuracy_percent(correct: u64, incorrect: u64) -> u32 {
    let total = correct + incorrect;
    if total == 0 {
        return 0;
    }
    ((correct * 200 + total) / (2 * total)) as u32
}

pub fn compute_accuracy(entry: &CharacterProgress) -> u32 {
    accuracy_percent(entry.correct as u64, entry.incorrect as u64)
}

/// Lowest accuracy first; ties broken by fewer attempts, then glyph.
pub fn sort_weakest_first(entries: &mut [CharacterProgress]) {
    entries.sort_by(|a, b| {
        compute_accuracy(a)
            .cmp(&compute_accuracy(b))
            .then(a.total_attempts().cmp(&b.total_attempts()))
            .then_with(|| a.glyph.cmp(&b.glyph))
    });
}

// --- Mastery Filter ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MasteryFilter {
    #[default]
    All,
    Learning,
    Mastered,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown progress filter '{0}' (expected all, learning or mastered)")]
pub struct ParseFilterError(pub String);

impl MasteryFilter {
    pub fn to_key(self) -> &'static str {
        match self {
            MasteryFilter::All => "all",
            MasteryFilter::Learning => "learning",
            MasteryFilter::Mastered => "mastered",
        }
    }

    pub fn matches(self, entry: &CharacterProgress, threshold: u32) -> bool {
        match self {
            MasteryFilter::All => true,
            MasteryFilter::Learning => compute_accuracy(entry) < threshold,
            MasteryFilter::Mastered => compute_accuracy(entry) >= threshold,
        }
    }
}

impl FromStr for MasteryFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MasteryFilter::All),
            "learning" => Ok(MasteryFilter::Learning),
            "mastered" => Ok(MasteryFilter::Mastered),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

impl fmt::Display for MasteryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_key())
    }
}

// --- Summary ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub characters_studied: usize,
    pub total_correct: u64,
    pub total_incorrect: u64,
    pub overall_accuracy: u32,
}

impl ProgressSummary {
    pub fn from_entries(entries: &[CharacterProgress]) -> Self {
        let total_correct: u64 = entries.iter().map(|e| e.correct as u64).sum();
        let total_incorrect: u64 = entries.iter().map(|e| e.incorrect as u64).sum();
        Self {
            characters_studied: entries.len(),
            total_correct,
            total_incorrect,
            overall_accuracy: accuracy_percent(total_correct, total_incorrect),
        }
    }

    pub fn mastered_count(entries: &[CharacterProgress], threshold: u32) -> usize {
        entries
            .iter()
            .filter(|e| MasteryFilter::Mastered.matches(e, threshold))
            .count()
    }
}
