use std::path::PathBuf;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use kanaquiz::catalog::{self, KanjiGrade, LearningMode};
use kanaquiz::config::Config;
use kanaquiz::engine::ProgressTracker;
use kanaquiz::generator::{QuizQuestion, generate_kanji_quiz_questions, generate_quiz_questions};
use kanaquiz::session::{Card, FlashcardDeck, QuizResult, QuizSession};
use kanaquiz::store::{JsonStore, KeyValueStore, MemoryStore};

pub type Tracker = ProgressTracker<Box<dyn KeyValueStore>>;

pub struct App {
    pub config: Config,
    pub tracker: Tracker,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, no_save: bool, seed: Option<u64>) -> Self {
        let store = if no_save {
            Some(Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>)
        } else {
            open_store(config.data_path())
        };
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            config,
            tracker: ProgressTracker::new(store),
            rng,
        }
    }

    pub fn build_questions(
        &mut self,
        mode: LearningMode,
        grade: Option<KanjiGrade>,
        count: usize,
    ) -> Vec<QuizQuestion> {
        match mode {
            LearningMode::Kanji => {
                let pool = catalog::kanji_pool(grade);
                generate_kanji_quiz_questions(&pool, count, &mut self.rng)
            }
            _ => generate_quiz_questions(&mode.kana_pool(), count, &mut self.rng),
        }
    }

    pub fn start_quiz(
        &mut self,
        mode: LearningMode,
        grade: Option<KanjiGrade>,
        count: usize,
    ) -> QuizSession {
        QuizSession::new(self.build_questions(mode, grade, count))
    }

    pub fn finish_quiz(&self, session: &QuizSession, mode: LearningMode) -> QuizResult {
        QuizResult::from_session(session, mode, Utc::now())
    }

    pub fn start_deck(&mut self, mode: LearningMode, grade: Option<KanjiGrade>) -> FlashcardDeck {
        FlashcardDeck::for_mode(mode, grade, &mut self.rng)
    }

    pub fn mark_card(&mut self, deck: &mut FlashcardDeck, known: bool) -> Option<Card> {
        deck.mark(known, &self.tracker, &mut self.rng)
    }
}

/// Open the file store, falling back to unsaved mode when the data directory
/// is unusable.
fn open_store(dir: PathBuf) -> Option<Box<dyn KeyValueStore>> {
    match JsonStore::with_base_dir(dir) {
        Ok(store) => {
            if store.clean_interrupted_writes() {
                tracing::warn!("removed leftover files from an interrupted save");
            }
            Some(Box::new(store))
        }
        Err(e) => {
            tracing::warn!("progress will not be saved: {e}");
            None
        }
    }
}
