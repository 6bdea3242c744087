//! Perceived Stress Scale (PSS-10) scoring.
//!
//! The scale has 10 items answered on a 0-4 scale. Items 4, 5, 6, 7, 9 and 10
//! are positively worded and are reverse scored before summing, which gives a
//! total in 0..=40.

use crate::{Error, Result, StressLevel};

/// Number of items in the questionnaire
pub const QUESTION_COUNT: usize = 10;

/// Highest answer value on the 0-4 scale
pub const MAX_ANSWER: u8 = 4;

/// Zero-based positions of the reverse-scored items
pub const REVERSE_SCORED_ITEMS: [usize; 6] = [3, 4, 5, 6, 8, 9];

/// Upper bound (inclusive) of the low stress band
pub const LOW_STRESS_MAX: u8 = 13;

/// Upper bound (inclusive) of the moderate stress band
pub const MODERATE_STRESS_MAX: u8 = 26;

/// Question texts, in answer order
pub const PSS10_QUESTIONS: [&str; QUESTION_COUNT] = [
    "In the last month, how often have you been upset because of something that happened unexpectedly?",
    "In the last month, how often have you felt that you were unable to control the important things in your life?",
    "In the last month, how often have you felt nervous and stressed?",
    "In the last month, how often have you felt confident about your ability to handle your personal problems?",
    "In the last month, how often have you felt that things were going your way?",
    "In the last month, how often have you found that you could not cope with all the things that you had to do?",
    "In the last month, how often have you been able to control irritations in your life?",
    "In the last month, how often have you felt that you were on top of things?",
    "In the last month, how often have you been angered because of things that happened that were outside of your control?",
    "In the last month, how often have you felt difficulties were piling up so high that you could not overcome them?",
];

/// Labels for answers 0 through 4
pub const ANSWER_LABELS: [&str; 5] = [
    "Never",
    "Almost never",
    "Sometimes",
    "Fairly often",
    "Very often",
];

/// True when the zero-based item is reverse scored
pub fn is_reverse_scored(index: usize) -> bool {
    REVERSE_SCORED_ITEMS.contains(&index)
}

/// Check that a single answer lies on the 0-4 scale
pub fn validate_answer(index: usize, value: u8) -> Result<()> {
    if value > MAX_ANSWER {
        return Err(Error::Questionnaire(format!(
            "answer {} to question {} is outside 0..={}",
            value,
            index + 1,
            MAX_ANSWER
        )));
    }
    Ok(())
}

/// Compute the PSS-10 total score
///
/// Requires exactly 10 answers, each in 0..=4. Anything else is rejected
/// without producing a partial score.
pub fn score(responses: &[u8]) -> Result<u8> {
    if responses.len() != QUESTION_COUNT {
        return Err(Error::Questionnaire(format!(
            "PSS-10 requires exactly {} responses, got {}",
            QUESTION_COUNT,
            responses.len()
        )));
    }

    let mut total = 0u8;
    for (index, &value) in responses.iter().enumerate() {
        validate_answer(index, value)?;
        total += if is_reverse_scored(index) {
            MAX_ANSWER - value
        } else {
            value
        };
    }

    tracing::debug!("PSS-10 score computed: {}", total);
    Ok(total)
}

/// Map a PSS-10 total onto its stress band
pub fn classify(score: u8) -> StressLevel {
    if score <= LOW_STRESS_MAX {
        StressLevel::Low
    } else if score <= MODERATE_STRESS_MAX {
        StressLevel::Moderate
    } else {
        StressLevel::High
    }
}
