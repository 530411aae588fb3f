use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use thiserror::Error;

pub const OPTION_COUNT: usize = 4;
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Random draws allowed per missing distractor before switching to a scan of
/// the remaining candidates.
const DRAWS_PER_DISTRACTOR: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("option '{0}' appears more than once")]
    Duplicate(String),
    #[error("{0} options given, at most {OPTION_COUNT} allowed")]
    TooMany(usize),
}

/// Answer choices in presentation order. Holds the correct answer exactly
/// once and no repeated strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptions {
    options: Vec<String>,
}

impl AnswerOptions {
    pub fn shuffled(
        correct: &str,
        distractors: Vec<String>,
        rng: &mut SmallRng,
    ) -> Result<Self, OptionsError> {
        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(correct.to_string());
        for distractor in distractors {
            if options.contains(&distractor) {
                return Err(OptionsError::Duplicate(distractor));
            }
            options.push(distractor);
        }
        if options.len() > OPTION_COUNT {
            return Err(OptionsError::TooMany(options.len()));
        }
        options.shuffle(rng);
        Ok(Self { options })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn position(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|o| o == answer)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}

/// Pick up to [`DISTRACTOR_COUNT`] wrong answers.
///
/// `primary` holds the preferred candidates (same script or grade as the
/// subject), `relaxed` the ones used only when `primary` runs dry. Nothing in
/// `excluded` is ever returned, and the result has no duplicates. Random draws
/// from `primary` are capped; after that the remaining eligible candidates are
/// taken in shuffled order, first from `primary` and then from `relaxed`. A
/// short result means both sets are exhausted.
pub(crate) fn pick_distractors(
    primary: &[&str],
    relaxed: &[&str],
    excluded: &[&str],
    rng: &mut SmallRng,
) -> Vec<String> {
    let mut picked: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT);

    if !primary.is_empty() {
        for _ in 0..DISTRACTOR_COUNT * DRAWS_PER_DISTRACTOR {
            if picked.len() == DISTRACTOR_COUNT {
                break;
            }
            let candidate = primary[rng.gen_range(0..primary.len())];
            if !excluded.contains(&candidate) && !picked.contains(&candidate) {
                picked.push(candidate);
            }
        }
    }

    fill_from(&mut picked, primary, excluded, rng);
    if picked.len() < DISTRACTOR_COUNT && !relaxed.is_empty() {
        tracing::debug!(
            have = picked.len(),
            "same-group distractors exhausted, widening candidate pool"
        );
        fill_from(&mut picked, relaxed, excluded, rng);
    }
    if picked.len() < DISTRACTOR_COUNT {
        tracing::debug!(have = picked.len(), "emitting question with fewer options");
    }

    picked.into_iter().map(str::to_string).collect()
}

fn fill_from<'a>(
    picked: &mut Vec<&'a str>,
    candidates: &[&'a str],
    excluded: &[&str],
    rng: &mut SmallRng,
) {
    if picked.len() >= DISTRACTOR_COUNT {
        return;
    }
    let mut remaining: Vec<&'a str> = Vec::new();
    for &candidate in candidates {
        if !excluded.contains(&candidate)
            && !picked.contains(&candidate)
            && !remaining.contains(&candidate)
        {
            remaining.push(candidate);
        }
    }
    remaining.shuffle(rng);
    let needed = DISTRACTOR_COUNT - picked.len();
    picked.extend(remaining.into_iter().take(needed));
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shuffled_keeps_correct_exactly_once() {
        let mut rng = SmallRng::seed_from_u64(1);
        let options = AnswerOptions::shuffled("a", strings(&["i", "u", "e"]), &mut rng).unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(options.iter().filter(|&o| o == "a").count(), 1);
        assert!(options.position("a").is_some());
    }

    #[test]
    fn shuffled_rejects_duplicates() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = AnswerOptions::shuffled("a", strings(&["i", "i", "e"]), &mut rng).unwrap_err();
        assert_eq!(err, OptionsError::Duplicate("i".to_string()));
        let err = AnswerOptions::shuffled("a", strings(&["a"]), &mut rng).unwrap_err();
        assert_eq!(err, OptionsError::Duplicate("a".to_string()));
    }

    #[test]
    fn shuffled_rejects_too_many() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = AnswerOptions::shuffled("a", strings(&["i", "u", "e", "o"]), &mut rng)
            .unwrap_err();
        assert_eq!(err, OptionsError::TooMany(5));
    }

    #[test]
    fn correct_answer_position_varies() {
        let positions: HashSet<usize> = (0..40u64)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                AnswerOptions::shuffled("a", strings(&["i", "u", "e"]), &mut rng)
                    .unwrap()
                    .position("a")
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn picks_three_distinct_from_primary() {
        let mut rng = SmallRng::seed_from_u64(3);
        let primary = ["a", "i", "u", "e", "o", "a", "i"];
        for _ in 0..50 {
            let picked = pick_distractors(&primary, &[], &["a"], &mut rng);
            assert_eq!(picked.len(), DISTRACTOR_COUNT);
            let unique: HashSet<&String> = picked.iter().collect();
            assert_eq!(unique.len(), DISTRACTOR_COUNT);
            assert!(!picked.contains(&"a".to_string()));
        }
    }

    #[test]
    fn prefers_primary_over_relaxed() {
        let mut rng = SmallRng::seed_from_u64(5);
        let picked = pick_distractors(&["a", "i", "u", "e"], &["A", "I"], &["a"], &mut rng);
        let mut sorted = picked.clone();
        sorted.sort();
        assert_eq!(sorted, strings(&["e", "i", "u"]));
    }

    #[test]
    fn falls_back_to_relaxed_when_primary_is_small() {
        let mut rng = SmallRng::seed_from_u64(5);
        let picked = pick_distractors(&["a", "i"], &["A", "i", "U"], &["a"], &mut rng);
        assert_eq!(picked.len(), DISTRACTOR_COUNT);
        assert!(picked.contains(&"i".to_string()));
        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), DISTRACTOR_COUNT);
    }

    #[test]
    fn returns_short_when_everything_is_exhausted() {
        let mut rng = SmallRng::seed_from_u64(5);
        let picked = pick_distractors(&["a", "a", "i"], &["a"], &["a"], &mut rng);
        assert_eq!(picked, strings(&["i"]));
        let picked = pick_distractors(&[], &[], &["a"], &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn all_candidates_excluded_terminates() {
        let mut rng = SmallRng::seed_from_u64(9);
        let primary = ["a"; 64];
        let picked = pick_distractors(&primary, &[], &["a"], &mut rng);
        assert!(picked.is_empty());
    }
}
