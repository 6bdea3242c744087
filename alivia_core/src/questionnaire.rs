//! Step-by-step PSS-10 questionnaire.
//!
//! A [`Questionnaire`] holds the current question and the answers collected
//! so far. Answering moves on to the next question automatically; the wizard
//! is consumed by [`Questionnaire::complete`], which scores it exactly once.

use crate::pss::{self, PSS10_QUESTIONS, QUESTION_COUNT};
use crate::{Error, Result, StressAssessment};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// In-progress PSS-10 questionnaire
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Questionnaire {
    current: usize,
    responses: [Option<u8>; QUESTION_COUNT],
}

impl Questionnaire {
    /// Start a fresh questionnaire on the first question
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the question being shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Text of the question being shown
    pub fn current_question(&self) -> &'static str {
        PSS10_QUESTIONS[self.current]
    }

    /// Answer recorded for the current question, if any
    pub fn current_answer(&self) -> Option<u8> {
        self.responses[self.current]
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.responses.get(index).is_some_and(|r| r.is_some())
    }

    pub fn answered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_last_question(&self) -> bool {
        self.current == QUESTION_COUNT - 1
    }

    /// Position through the questionnaire as a whole percentage
    pub fn progress_percent(&self) -> u8 {
        (((self.current + 1) * 100 + QUESTION_COUNT / 2) / QUESTION_COUNT) as u8
    }

    /// True once every question has an answer
    pub fn can_submit(&self) -> bool {
        self.responses.iter().all(|r| r.is_some())
    }

    /// Record an answer for the current question
    ///
    /// Moves to the next question unless this is the last one. Re-answering a
    /// question replaces the earlier answer.
    pub fn answer(&mut self, value: u8) -> Result<()> {
        pss::validate_answer(self.current, value)?;
        self.responses[self.current] = Some(value);
        tracing::debug!("Question {} answered with {}", self.current + 1, value);

        if !self.is_last_question() {
            self.current += 1;
        }
        Ok(())
    }

    /// Move forward; only allowed once the current question is answered
    pub fn next(&mut self) -> bool {
        if self.is_last_question() || self.current_answer().is_none() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move back one question
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump straight to a question
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= QUESTION_COUNT {
            return Err(Error::Questionnaire(format!(
                "question index {} is outside 0..{}",
                index, QUESTION_COUNT
            )));
        }
        self.current = index;
        Ok(())
    }

    /// Finish the questionnaire and score it
    pub fn complete(self, now: DateTime<Utc>) -> Result<StressAssessment> {
        let mut responses = [0u8; QUESTION_COUNT];
        for (index, answer) in self.responses.iter().enumerate() {
            responses[index] = answer.ok_or_else(|| {
                Error::Questionnaire(format!("question {} has not been answered", index + 1))
            })?;
        }

        let total_score = pss::score(&responses)?;
        let stress_level = pss::classify(total_score);

        tracing::info!(
            "Questionnaire completed: score {} ({})",
            total_score,
            stress_level
        );

        Ok(StressAssessment {
            id: Uuid::new_v4(),
            completed_at: now,
            responses,
            total_score,
            stress_level,
        })
    }
}
