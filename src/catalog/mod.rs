pub mod kana;
pub mod kanji;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use kana::{KanaCharacter, Script};
pub use kanji::{KanjiCharacter, KanjiExample, KanjiGrade, KanjiGradeSection};

// Read-only accessors over the compiled-in catalogs. Grades without data yield
// an empty slice rather than an error.

pub fn by_script(script: Script) -> &'static [KanaCharacter] {
    match script {
        Script::Hiragana => kana::HIRAGANA,
        Script::Katakana => kana::KATAKANA,
    }
}

pub fn all_kana() -> Vec<KanaCharacter> {
    kana::HIRAGANA.iter().chain(kana::KATAKANA).copied().collect()
}

pub fn by_grade(grade: KanjiGrade) -> &'static [KanjiCharacter] {
    match grade {
        KanjiGrade::Grade1 => kanji::GRADE1_KANJI,
        KanjiGrade::Grade2 => kanji::GRADE2_KANJI,
        _ => &[],
    }
}

pub fn all_kanji() -> Vec<KanjiCharacter> {
    KanjiGrade::all()
        .iter()
        .flat_map(|&grade| by_grade(grade).iter().copied())
        .collect()
}

pub fn grade_sections() -> Vec<KanjiGradeSection> {
    KanjiGrade::all()
        .iter()
        .map(|&grade| KanjiGradeSection {
            grade,
            kanji: by_grade(grade),
        })
        .collect()
}

// --- Learning Mode ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningMode {
    Hiragana,
    Katakana,
    Mixed,
    Kanji,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown learning mode '{0}' (expected hiragana, katakana, mixed or kanji)")]
pub struct ParseModeError(pub String);

impl LearningMode {
    pub fn to_key(self) -> &'static str {
        match self {
            LearningMode::Hiragana => "hiragana",
            LearningMode::Katakana => "katakana",
            LearningMode::Mixed => "mixed",
            LearningMode::Kanji => "kanji",
        }
    }

    pub fn all() -> &'static [LearningMode] {
        &[
            LearningMode::Hiragana,
            LearningMode::Katakana,
            LearningMode::Mixed,
            LearningMode::Kanji,
        ]
    }

    /// Kana pool for this mode. Empty for `Kanji`, which draws from
    /// [`kanji_pool`] instead.
    pub fn kana_pool(self) -> Vec<KanaCharacter> {
        match self {
            LearningMode::Hiragana => by_script(Script::Hiragana).to_vec(),
            LearningMode::Katakana => by_script(Script::Katakana).to_vec(),
            LearningMode::Mixed => all_kana(),
            LearningMode::Kanji => Vec::new(),
        }
    }
}

pub fn kanji_pool(grade: Option<KanjiGrade>) -> Vec<KanjiCharacter> {
    match grade {
        Some(grade) => by_grade(grade).to_vec(),
        None => all_kanji(),
    }
}

impl FromStr for LearningMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        LearningMode::all()
            .iter()
            .copied()
            .find(|mode| mode.to_key() == key)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

impl fmt::Display for LearningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_key())
    }
}
