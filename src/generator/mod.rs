pub mod kana_quiz;
pub mod kanji_quiz;
pub mod options;

use std::collections::HashSet;
use std::fmt;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::catalog::{KanjiGrade, Script};

pub use kana_quiz::generate_quiz_questions;
pub use kanji_quiz::generate_kanji_quiz_questions;
pub use options::{AnswerOptions, OptionsError};

/// Which side of the card is shown. `CharToAnswer` shows the glyph and asks
/// for something about it; `AnswerToChar` asks for the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    CharToAnswer,
    AnswerToChar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionKind {
    CharToRomaji,
    RomajiToChar,
    KanjiToMeaning,
    MeaningToKanji,
    KanjiToReading,
}

impl QuestionKind {
    pub fn to_key(self) -> &'static str {
        match self {
            QuestionKind::CharToRomaji => "char-to-romaji",
            QuestionKind::RomajiToChar => "romaji-to-char",
            QuestionKind::KanjiToMeaning => "kanji-to-meaning",
            QuestionKind::MeaningToKanji => "meaning-to-kanji",
            QuestionKind::KanjiToReading => "kanji-to-reading",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            QuestionKind::CharToRomaji
            | QuestionKind::KanjiToMeaning
            | QuestionKind::KanjiToReading => Direction::CharToAnswer,
            QuestionKind::RomajiToChar | QuestionKind::MeaningToKanji => Direction::AnswerToChar,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_key())
    }
}

/// Script or grade of the subject, carried along for display and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizTag {
    Script(Script),
    Grade(KanjiGrade),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub correct_answer: String,
    pub options: AnswerOptions,
    pub kind: QuestionKind,
    pub tag: QuizTag,
    /// Glyph under test. Attempts are recorded against this, whatever the
    /// direction of the question.
    pub subject: String,
}

impl QuizQuestion {
    pub fn direction(&self) -> Direction {
        self.kind.direction()
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// Pool indices in uniformly shuffled order, keeping only the first index of
/// each glyph so a subject is never asked twice.
fn distinct_subjects<T>(pool: &[T], glyph: impl Fn(&T) -> &str, rng: &mut SmallRng) -> Vec<usize> {
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(rng);
    let mut seen: HashSet<&str> = HashSet::new();
    order.retain(|&index| seen.insert(glyph(&pool[index])));
    order
}
