//! Core domain types for Alivia.
//!
//! This module defines the fundamental types used throughout the system:
//! - Wall-clock time of day
//! - Medications and their dose slots
//! - Stress levels and completed stress assessments
//! - Pain reports

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Time of Day
// ============================================================================

/// A wall-clock time of day with minute precision.
///
/// There is no date or timezone component; values are compared as minutes
/// since midnight. Serialized as `"HH:MM"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Build a time of day from an hour (0-23) and minute (0-59)
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour >= 24 || minute >= 60 {
            return Err(Error::InvalidTime(format!("{}:{}", hour, minute)));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Const constructor for literal times; out-of-range values fail to
    /// compile when evaluated in a const context
    pub(crate) const fn from_hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Build a time of day from minutes since midnight
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(Error::InvalidTime(format!("{} minutes", minutes)));
        }
        Ok(Self { minutes })
    }

    /// Current local wall-clock time
    pub fn now() -> Self {
        chrono::Local::now().time().into()
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidTime(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

// ============================================================================
// Medication Types
// ============================================================================

/// Therapeutic category of a medication
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MedicationCategory {
    Pain,
    Mood,
    Chronic,
    Supplement,
    Other,
}

impl MedicationCategory {
    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            MedicationCategory::Pain => "Pain",
            MedicationCategory::Mood => "Mood",
            MedicationCategory::Chronic => "Chronic",
            MedicationCategory::Supplement => "Supplement",
            MedicationCategory::Other => "Other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationCategory::Pain => "pain",
            MedicationCategory::Mood => "mood",
            MedicationCategory::Chronic => "chronic",
            MedicationCategory::Supplement => "supplement",
            MedicationCategory::Other => "other",
        }
    }
}

/// A single scheduled time of day at which a medication should be taken
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DoseSlot {
    pub time: TimeOfDay,
    #[serde(default)]
    pub taken: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<TimeOfDay>,
}

impl DoseSlot {
    /// An untaken slot at the given time
    pub fn pending(time: TimeOfDay) -> Self {
        Self {
            time,
            taken: false,
            taken_at: None,
        }
    }
}

/// A prescribed medication with its daily dose schedule
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub dose: String,
    pub category: MedicationCategory,
    pub schedule: Vec<DoseSlot>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub prescribed_by: Option<String>,
    pub color_tone: String,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Medication {
    /// True when every slot of the schedule has been taken
    pub fn all_taken(&self) -> bool {
        self.schedule.iter().all(|slot| slot.taken)
    }

    /// Number of slots still waiting to be taken
    pub fn pending_doses(&self) -> usize {
        self.schedule.iter().filter(|slot| !slot.taken).count()
    }
}

/// The next untaken dose of a medication relative to a given time
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NextDose {
    pub time: TimeOfDay,
    pub minutes_remaining: u32,
    /// Hours until the dose, rounded to one decimal place
    pub hours_remaining: f64,
}

// ============================================================================
// Stress Types
// ============================================================================

/// PSS-10 perceived stress classification
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Moderate => "moderate",
            StressLevel::High => "high",
        }
    }

    /// Short explanation shown alongside a result
    pub fn description(&self) -> &'static str {
        match self {
            StressLevel::Low => "Perceived stress is low for the past month.",
            StressLevel::Moderate => "Perceived stress is moderate for the past month.",
            StressLevel::High => {
                "Perceived stress is high for the past month. Consider talking to a professional."
            }
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed PSS-10 questionnaire with its score
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StressAssessment {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub responses: [u8; 10],
    pub total_score: u8,
    pub stress_level: StressLevel,
}

// ============================================================================
// Pain Types
// ============================================================================

/// How a reported pain behaves over time
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PainTemporality {
    Constant,
    Intermittent,
    Occasional,
}

/// A single self-reported pain episode
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PainReport {
    pub id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub time: TimeOfDay,
    pub locations: Vec<String>,
    /// Intensity on a 0-10 scale
    pub intensity: u8,
    pub pain_types: Vec<String>,
    pub temporality: PainTemporality,
    #[serde(default)]
    pub notes: Option<String>,
}
