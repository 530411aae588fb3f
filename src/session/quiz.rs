use crate::engine::clock::Clock;
use crate::engine::progress::ProgressTracker;
use crate::engine::scoring::accuracy_percent;
use crate::generator::QuizQuestion;
use crate::store::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub chosen: String,
    pub correct_answer: String,
    pub subject: String,
}

/// A quiz being taken: questions are answered in order, each answer is
/// recorded against the question's subject.
pub struct QuizSession {
    pub questions: Vec<QuizQuestion>,
    pub cursor: usize,
    pub outcomes: Vec<AnswerOutcome>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            cursor: 0,
            outcomes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.cursor)
    }

    pub fn score(&self) -> usize {
        self.outcomes.iter().filter(|o| o.correct).count()
    }

    pub fn accuracy(&self) -> u32 {
        let correct = self.score() as u64;
        accuracy_percent(correct, self.outcomes.len() as u64 - correct)
    }

    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.cursor as f64 / self.questions.len() as f64
    }

    /// Check `choice` against the current question, record the attempt and
    /// move on. Returns `None` once the session is complete.
    pub fn answer<S: KeyValueStore, C: Clock>(
        &mut self,
        choice: &str,
        tracker: &ProgressTracker<S, C>,
    ) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.cursor)?;
        let correct = question.is_correct(choice);
        tracker.record_attempt(&question.subject, correct);

        let outcome = AnswerOutcome {
            correct,
            chosen: choice.to_string(),
            correct_answer: question.correct_answer.clone(),
            subject: question.subject.clone(),
        };
        self.outcomes.push(outcome.clone());
        self.cursor += 1;
        Some(outcome)
    }

    /// Like [`answer`](Self::answer), picking the option at `index` of the
    /// current question. An out-of-range index leaves the session untouched.
    pub fn answer_option<S: KeyValueStore, C: Clock>(
        &mut self,
        index: usize,
        tracker: &ProgressTracker<S, C>,
    ) -> Option<AnswerOutcome> {
        let choice = self.current()?.options.get(index)?.to_string();
        self.answer(&choice, tracker)
    }

    /// Map typed input to an option index of the current question: a 1-based
    /// option number, or the exact text of one of the options. Anything else
    /// is `None` and should not be recorded.
    pub fn resolve_choice(&self, input: &str) -> Option<usize> {
        let options = &self.current()?.options;
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Some(n - 1),
            _ => options.position(input),
        }
    }
}
