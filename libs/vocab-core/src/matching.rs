//! Answer matching for quiz mode.
//!
//! Answers are normalized, then graded in tiers: exact match, close typo,
//! containment with a similar length, and finally a looser similarity tier
//! meant for answer sets already expanded with synonyms.

use crate::types::{Feedback, MatchThresholds, ValidationResult};

/// Characters removed entirely before comparing answers.
const STRIPPED_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Grade a typed answer against every accepted answer using default thresholds.
pub fn validate_answer<S: AsRef<str>>(user_answer: &str, valid_answers: &[S]) -> ValidationResult {
    validate_answer_with(user_answer, valid_answers, &MatchThresholds::default())
}

/// Grade a typed answer against a single correct answer.
pub fn validate_single(user_answer: &str, correct_answer: &str) -> ValidationResult {
    validate_answer(user_answer, &[correct_answer])
}

/// Grade a typed answer against every accepted answer.
pub fn validate_answer_with<S: AsRef<str>>(
    user_answer: &str,
    valid_answers: &[S],
    thresholds: &MatchThresholds,
) -> ValidationResult {
    let user = normalize_text(user_answer);
    let references: Vec<String> = valid_answers
        .iter()
        .map(|a| normalize_text(a.as_ref()))
        .collect();

    if references.iter().any(|r| *r == user) {
        return ValidationResult::exact();
    }

    let best = references
        .iter()
        .map(|r| similarity(&user, r))
        .fold(0.0, f64::max);

    if best >= thresholds.accept {
        let feedback = (best < 100.0).then_some(Feedback::MinorSpelling);
        return ValidationResult::accepted(best, feedback);
    }

    // Checked before the synonym tier so its feedback wins when both apply.
    if references
        .iter()
        .any(|r| is_alternative_form(&user, r, thresholds.min_length_ratio))
    {
        return ValidationResult::accepted(best, Some(Feedback::AlternativeForm));
    }

    if best >= thresholds.synonym {
        return ValidationResult::accepted(best, Some(Feedback::Synonym));
    }

    ValidationResult::rejected(best)
}

/// One string contains the other and their lengths are close.
fn is_alternative_form(user: &str, reference: &str, min_length_ratio: f64) -> bool {
    if !user.contains(reference) && !reference.contains(user) {
        return false;
    }

    let user_len = user.chars().count();
    let reference_len = reference.chars().count();
    let longer = user_len.max(reference_len);
    if longer == 0 {
        return true;
    }

    let ratio = user_len.min(reference_len) as f64 / longer as f64;
    ratio >= min_length_ratio
}

/// Lowercase, trim, drop sentence punctuation and collapse whitespace.
pub fn normalize_text(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity percentage (0.0 to 100.0) based on Levenshtein distance.
///
/// Lengths are counted in chars, so accented and Cyrillic answers score the
/// same as ASCII ones with the same number of edits.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein_distance(a, b);
    100.0 * (max_len - distance) as f64 / max_len as f64
}
