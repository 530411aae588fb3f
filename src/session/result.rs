use chrono::{DateTime, Utc};

use crate::catalog::LearningMode;
use crate::session::quiz::QuizSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub mode: String,
    pub correct: usize,
    pub total: usize,
    pub accuracy: u32,
    pub missed: Vec<String>,
    pub completed: bool,
    pub finished_at: DateTime<Utc>,
}

impl QuizResult {
    pub fn from_session(session: &QuizSession, mode: LearningMode, now: DateTime<Utc>) -> Self {
        let missed = session
            .outcomes
            .iter()
            .filter(|o| !o.correct)
            .map(|o| o.subject.clone())
            .collect();
        Self {
            mode: mode.to_key().to_string(),
            correct: session.score(),
            total: session.outcomes.len(),
            accuracy: session.accuracy(),
            missed,
            completed: session.is_complete(),
            finished_at: now,
        }
    }
}
