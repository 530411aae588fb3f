// Quiz generation and progress scoring for learning kana and kanji.
// The binary in main.rs is a thin stdin/stdout front end over this library;
// benchmarks and integration tests import from here as well.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod generator;
pub mod session;
pub mod store;

pub use engine::{ProgressTracker, compute_accuracy};
pub use generator::{generate_kanji_quiz_questions, generate_quiz_questions};
