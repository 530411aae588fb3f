use rand::Rng;
use rand::rngs::SmallRng;

use crate::catalog::KanaCharacter;
use crate::generator::options::{AnswerOptions, pick_distractors};
use crate::generator::{QuestionKind, QuizQuestion, QuizTag, distinct_subjects};

/// Build up to `count` multiple-choice questions from `pool`, one per distinct
/// glyph. Stops early when the pool runs out of subjects; an empty pool gives
/// an empty quiz.
///
/// Each subject is asked either as glyph -> romaji or romaji -> glyph with
/// equal odds. Distractors come from the subject's own script within the pool
/// and only cross into the other script when that script cannot supply three.
pub fn generate_quiz_questions(
    pool: &[KanaCharacter],
    count: usize,
    rng: &mut SmallRng,
) -> Vec<QuizQuestion> {
    let mut questions = Vec::with_capacity(count.min(pool.len()));
    if count == 0 {
        return questions;
    }

    for index in distinct_subjects(pool, |c| c.glyph, rng) {
        if questions.len() == count {
            break;
        }
        let subject = &pool[index];

        let kind = if rng.gen_bool(0.5) {
            QuestionKind::CharToRomaji
        } else {
            QuestionKind::RomajiToChar
        };
        let answer_of = |c: &KanaCharacter| match kind {
            QuestionKind::CharToRomaji => c.romaji,
            _ => c.glyph,
        };
        let (prompt, correct) = match kind {
            QuestionKind::CharToRomaji => (subject.glyph, subject.romaji),
            _ => (subject.romaji, subject.glyph),
        };

        let (same, other): (Vec<&KanaCharacter>, Vec<&KanaCharacter>) =
            pool.iter().partition(|c| c.script == subject.script);
        let primary: Vec<&str> = same.into_iter().map(answer_of).collect();
        let relaxed: Vec<&str> = other.into_iter().map(answer_of).collect();
        let distractors = pick_distractors(&primary, &relaxed, &[correct], rng);

        match AnswerOptions::shuffled(correct, distractors, rng) {
            Ok(options) => questions.push(QuizQuestion {
                prompt: prompt.to_string(),
                correct_answer: correct.to_string(),
                options,
                kind,
                tag: QuizTag::Script(subject.script),
                subject: subject.glyph.to_string(),
            }),
            Err(e) => tracing::warn!(subject = subject.glyph, "skipping question: {e}"),
        }
    }

    questions
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;
    use crate::catalog::{self, Script};
    use crate::generator::options::OPTION_COUNT;

    fn vowels() -> Vec<KanaCharacter> {
        catalog::by_script(Script::Hiragana)[..5].to_vec()
    }

    fn script_of(glyph_or_romaji: &str, pool: &[KanaCharacter], kind: QuestionKind) -> Script {
        pool.iter()
            .find(|c| match kind {
                QuestionKind::CharToRomaji => c.romaji == glyph_or_romaji,
                _ => c.glyph == glyph_or_romaji,
            })
            .map(|c| c.script)
            .unwrap()
    }

    #[test]
    fn returns_requested_count_with_four_unique_options() {
        let pool = catalog::by_script(Script::Hiragana);
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let questions = generate_quiz_questions(pool, 10, &mut rng);
            assert_eq!(questions.len(), 10);
            for q in &questions {
                assert_eq!(q.options.len(), OPTION_COUNT);
                let unique: HashSet<&str> = q.options.iter().collect();
                assert_eq!(unique.len(), OPTION_COUNT);
                assert_eq!(q.options.iter().filter(|&o| o == q.correct_answer).count(), 1);
            }
        }
    }

    #[test]
    fn subjects_are_never_repeated() {
        let pool = catalog::by_script(Script::Katakana);
        let mut rng = SmallRng::seed_from_u64(11);
        let questions = generate_quiz_questions(pool, pool.len(), &mut rng);
        assert_eq!(questions.len(), pool.len());
        let subjects: HashSet<&str> = questions.iter().map(|q| q.subject.as_str()).collect();
        assert_eq!(subjects.len(), pool.len());
    }

    #[test]
    fn vowel_pool_caps_at_five_questions() {
        let pool = vowels();
        let mut rng = SmallRng::seed_from_u64(42);
        let questions = generate_quiz_questions(&pool, 10, &mut rng);
        assert_eq!(questions.len(), 5);
        for q in &questions {
            assert_eq!(q.options.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn mixed_pool_keeps_distractors_in_subject_script() {
        let pool = catalog::all_kana();
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            for q in generate_quiz_questions(&pool, 20, &mut rng) {
                let QuizTag::Script(script) = q.tag else {
                    panic!("kana question tagged with a grade");
                };
                match q.kind {
                    // Romaji is shared between scripts, so only the glyph
                    // direction can show which script an option came from.
                    QuestionKind::RomajiToChar => {
                        for option in q.options.iter() {
                            assert_eq!(script_of(option, &pool, q.kind), script);
                        }
                    }
                    QuestionKind::CharToRomaji => {
                        let same: HashSet<&str> = catalog::by_script(script)
                            .iter()
                            .map(|c| c.romaji)
                            .collect();
                        assert!(q.options.iter().all(|o| same.contains(o)));
                    }
                    other => panic!("unexpected kind {other}"),
                }
            }
        }
    }

    #[test]
    fn both_directions_appear() {
        let pool = catalog::by_script(Script::Hiragana);
        let mut rng = SmallRng::seed_from_u64(3);
        let kinds: HashSet<&str> = generate_quiz_questions(pool, 30, &mut rng)
            .iter()
            .map(|q| q.kind.to_key())
            .collect();
        assert!(kinds.contains("char-to-romaji"));
        assert!(kinds.contains("romaji-to-char"));
    }

    #[test]
    fn prompt_and_answer_match_direction() {
        let pool = catalog::by_script(Script::Hiragana);
        let mut rng = SmallRng::seed_from_u64(8);
        for q in generate_quiz_questions(pool, 20, &mut rng) {
            let subject = pool.iter().find(|c| c.glyph == q.subject).unwrap();
            match q.kind {
                QuestionKind::CharToRomaji => {
                    assert_eq!(q.prompt, subject.glyph);
                    assert_eq!(q.correct_answer, subject.romaji);
                }
                QuestionKind::RomajiToChar => {
                    assert_eq!(q.prompt, subject.romaji);
                    assert_eq!(q.correct_answer, subject.glyph);
                }
                other => panic!("unexpected kind {other}"),
            }
        }
    }

    #[test]
    fn empty_pool_and_zero_count_give_no_questions() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(generate_quiz_questions(&[], 10, &mut rng).is_empty());
        assert!(generate_quiz_questions(&vowels(), 0, &mut rng).is_empty());
    }

    #[test]
    fn tiny_pool_falls_back_without_hanging() {
        let pool = vec![
            KanaCharacter::new("あ", "a", Script::Hiragana),
            KanaCharacter::new("い", "i", Script::Hiragana),
            KanaCharacter::new("カ", "ka", Script::Katakana),
            KanaCharacter::new("キ", "ki", Script::Katakana),
        ];
        let mut rng = SmallRng::seed_from_u64(2);
        let questions = generate_quiz_questions(&pool, 4, &mut rng);
        assert_eq!(questions.len(), 4);
        for q in &questions {
            // One same-script distractor, then two from the other script.
            assert_eq!(q.options.len(), OPTION_COUNT);
            let unique: HashSet<&str> = q.options.iter().collect();
            assert_eq!(unique.len(), OPTION_COUNT);
        }
    }

    #[test]
    fn single_character_pool_yields_answer_only() {
        let pool = vec![KanaCharacter::new("ん", "n", Script::Hiragana)];
        let mut rng = SmallRng::seed_from_u64(4);
        let questions = generate_quiz_questions(&pool, 3, &mut rng);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.as_slice(), [questions[0].correct_answer.clone()]);
    }

    #[test]
    fn same_seed_same_quiz() {
        let pool = catalog::all_kana();
        let a = generate_quiz_questions(&pool, 10, &mut SmallRng::seed_from_u64(99));
        let b = generate_quiz_questions(&pool, 10, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
