pub mod flashcard;
pub mod quiz;
pub mod result;

pub use flashcard::{Card, FlashcardDeck};
pub use quiz::{AnswerOutcome, QuizSession};
pub use result::QuizResult;
