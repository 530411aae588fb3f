use rand::Rng;
use rand::rngs::SmallRng;

use crate::catalog::KanjiCharacter;
use crate::generator::options::{AnswerOptions, pick_distractors};
use crate::generator::{QuestionKind, QuizQuestion, QuizTag, distinct_subjects};

/// Question kinds a kanji can support. Meaning kinds need a meaning, the
/// reading kind needs at least one on'yomi or kun'yomi.
fn supported_kinds(kanji: &KanjiCharacter) -> Vec<QuestionKind> {
    let mut kinds = Vec::with_capacity(3);
    if kanji.primary_meaning().is_some() {
        kinds.push(QuestionKind::KanjiToMeaning);
        kinds.push(QuestionKind::MeaningToKanji);
    }
    if kanji.has_readings() {
        kinds.push(QuestionKind::KanjiToReading);
    }
    kinds
}

/// Answers `kanji` would contribute as a distractor for a question of `kind`.
fn candidate_answers(kind: QuestionKind, kanji: &KanjiCharacter) -> Vec<&'static str> {
    match kind {
        QuestionKind::KanjiToMeaning => kanji.primary_meaning().into_iter().collect(),
        QuestionKind::KanjiToReading => kanji.readings(),
        _ => vec![kanji.glyph],
    }
}

/// Kanji counterpart of [`super::generate_quiz_questions`]: up to `count`
/// questions, one per distinct glyph, each of a kind picked uniformly among
/// the ones the subject supports. Subjects supporting none are skipped.
///
/// Distractors come from kanji of the same grade within the pool first, then
/// from the rest of the pool.
pub fn generate_kanji_quiz_questions(
    pool: &[KanjiCharacter],
    count: usize,
    rng: &mut SmallRng,
) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(count.min(pool.len()));
    if count == 0 {
        return questions;
    }

    for index in distinct_subjects(pool, |k| k.glyph, rng) {
        if questions.len() == count {
            break;
        }
        let subject = &pool[index];
        let kinds = supported_kinds(subject);
        if kinds.is_empty() {
            tracing::debug!(subject = subject.glyph, "no question kind applies, skipping");
            continue;
        }
        let kind = kinds[rng.gen_range(0..kinds.len())];

        let readings = subject.readings();
        let (prompt, correct, excluded): (&str, &str, Vec<&str>) = match kind {
            QuestionKind::KanjiToReading => {
                let reading = readings[rng.gen_range(0..readings.len())];
                (subject.glyph, reading, readings.clone())
            }
            QuestionKind::MeaningToKanji => {
                let meaning = subject.primary_meaning().unwrap_or_default();
                (meaning, subject.glyph, vec![subject.glyph])
            }
            _ => {
                let meaning = subject.primary_meaning().unwrap_or_default();
                (subject.glyph, meaning, subject.meanings.to_vec())
            }
        };

        let mut primary: Vec<&str> = Vec::new();
        let mut relaxed: Vec<&str> = Vec::new();
        for other in pool {
            if other.glyph == subject.glyph {
                continue;
            }
            // A kanji sharing the prompted meaning would be a second right answer.
            if kind == QuestionKind::MeaningToKanji && other.meanings.iter().any(|m| *m == prompt) {
                continue;
            }
            let answers = candidate_answers(kind, other);
            if other.grade == subject.grade {
                primary.extend(answers);
            } else {
                relaxed.extend(answers);
            }
        }
        let distractors = pick_distractors(&primary, &relaxed, &excluded, rng);

        match AnswerOptions::shuffled(correct, distractors, rng) {
            Ok(options) => questions.push(QuizQuestion {
                prompt: prompt.to_string(),
                correct_answer: correct.to_string(),
                options,
                kind,
                tag: QuizTag::Grade(subject.grade),
                subject: subject.glyph.to_string(),
            }),
            Err(e) => tracing::warn!(subject = subject.glyph, "skipping question: {e}"),
        }
    }

    questions
}
