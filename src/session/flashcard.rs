use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::catalog::{self, KanaCharacter, KanjiCharacter, KanjiGrade, LearningMode};
use crate::engine::clock::Clock;
use crate::engine::progress::ProgressTracker;
use crate::store::KeyValueStore;

/// Readings and meanings shown per kind on the back of a kanji card.
const BACK_LIST_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Kana(KanaCharacter),
    Kanji(KanjiCharacter),
}

impl Card {
    pub fn glyph(&self) -> &'static str {
        match self {
            Card::Kana(k) => k.glyph,
            Card::Kanji(k) => k.glyph,
        }
    }

    /// Lines revealed when the card is turned over. Kanji cards list up to
    /// three meanings, on'yomi and kun'yomi, then every example word.
    pub fn back(&self) -> Vec<String> {
        match self {
            Card::Kana(k) => vec![format!("{} ({})", k.romaji, k.script)],
            Card::Kanji(k) => {
                let mut lines = vec![first_few(k.meanings, ", ")];
                if !k.on_readings.is_empty() {
                    lines.push(format!("On'yomi: {}", first_few(k.on_readings, "、")));
                }
                if !k.kun_readings.is_empty() {
                    lines.push(format!("Kun'yomi: {}", first_few(k.kun_readings, "、")));
                }
                for example in k.examples {
                    lines.push(format!(
                        "{} ({}) {}",
                        example.word, example.reading, example.meaning
                    ));
                }
                lines
            }
        }
    }
}

fn first_few(items: &[&str], sep: &str) -> String {
    let shown: Vec<&str> = items.iter().take(BACK_LIST_LIMIT).copied().collect();
    shown.join(sep)
}

/// Self-graded study deck. Marking a card records it as a correct or
/// incorrect attempt; after the last card the deck is reshuffled and starts
/// over.
pub struct FlashcardDeck {
    cards: Vec<Card>,
    cursor: usize,
    rounds: usize,
}

impl FlashcardDeck {
    pub fn new(mut cards: Vec<Card>, rng: &mut SmallRng) -> Self {
        cards.shuffle(rng);
        Self {
            cards,
            cursor: 0,
            rounds: 0,
        }
    }

    pub fn for_mode(mode: LearningMode, grade: Option<KanjiGrade>, rng: &mut SmallRng) -> Self {
        let cards = match mode {
            LearningMode::Kanji => catalog::kanji_pool(grade)
                .into_iter()
                .map(Card::Kanji)
                .collect(),
            _ => mode.kana_pool().into_iter().map(Card::Kana).collect(),
        };
        Self::new(cards, rng)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Zero-based index of the current card within this pass.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Completed passes through the deck.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Record the current card as known or not and move to the next one.
    /// Returns the marked card, or `None` for an empty deck.
    pub fn mark<S: KeyValueStore, C: Clock>(
        &mut self,
        known: bool,
        tracker: &ProgressTracker<S, C>,
        rng: &mut SmallRng,
    ) -> Option<Card> {
        let card = *self.cards.get(self.cursor)?;
        tracker.record_attempt(card.glyph(), known);

        self.cursor += 1;
        if self.cursor == self.cards.len() {
            self.cards.shuffle(rng);
            self.cursor = 0;
            self.rounds += 1;
            tracing::debug!(rounds = self.rounds, "deck finished, reshuffled");
        }
        Some(card)
    }
}
