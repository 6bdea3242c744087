#![forbid(unsafe_code)]

//! Core domain model and business logic for Alivia.
//!
//! This crate provides:
//! - Domain types (medications, dose slots, stress assessments, pain reports)
//! - PSS-10 stress scoring and the questionnaire wizard
//! - Medication dose scheduling (next dose, urgency ordering, grouping)
//! - Pain history summaries
//! - Configuration, logging and CSV reporting

pub mod types;
pub mod error;
pub mod pss;
pub mod questionnaire;
pub mod schedule;
pub mod pain;
pub mod sample;
pub mod medications;
pub mod report;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use pss::{classify, score};
pub use questionnaire::Questionnaire;
pub use schedule::{group_by_category, next_dose, order_by_urgency, summarize, CategoryGroup, MedicationSummary};
pub use sample::{sample_medications, sample_pain_reports};
pub use medications::load_medications;
pub use config::Config;
