//! Built-in sample data for demos and tests.
//!
//! Mirrors the mock medications and pain reports shown by the patient views
//! when no real data source is connected.

use crate::types::*;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Cached sample medications - built once and reused
static SAMPLE_MEDICATIONS: Lazy<Vec<Medication>> = Lazy::new(build_sample_medications);

/// Cached sample pain reports, oldest first
static SAMPLE_PAIN_REPORTS: Lazy<Vec<PainReport>> = Lazy::new(build_sample_pain_reports);

/// Get the sample medication list
pub fn sample_medications() -> &'static [Medication] {
    &SAMPLE_MEDICATIONS
}

/// Get the sample pain reports
pub fn sample_pain_reports() -> &'static [PainReport] {
    &SAMPLE_PAIN_REPORTS
}

/// Time of day checked at compile time
macro_rules! time {
    ($hour:expr, $minute:expr) => {
        const { TimeOfDay::from_hm($hour, $minute) }
    };
}

/// Calendar date checked at compile time
macro_rules! date {
    ($year:expr, $month:expr, $day:expr) => {
        const {
            match NaiveDate::from_ymd_opt($year, $month, $day) {
                Some(date) => date,
                None => panic!("invalid sample date"),
            }
        }
    };
}

fn taken(time: TimeOfDay, at: TimeOfDay) -> DoseSlot {
    DoseSlot {
        time,
        taken: true,
        taken_at: Some(at),
    }
}

fn pending(time: TimeOfDay) -> DoseSlot {
    DoseSlot::pending(time)
}

fn build_sample_medications() -> Vec<Medication> {
    vec![
        Medication {
            id: "med-001".into(),
            patient_id: "patient-001".into(),
            name: "Tramadol".into(),
            dose: "50mg".into(),
            category: MedicationCategory::Pain,
            schedule: vec![taken(time!(8, 0), time!(8, 5)), pending(time!(20, 0))],
            start_date: date!(2025, 10, 1),
            end_date: None,
            prescribed_by: Some("Dr. García".into()),
            color_tone: "#3b82f6".into(),
            instructions: Some("Take with food".into()),
        },
        Medication {
            id: "med-002".into(),
            patient_id: "patient-001".into(),
            name: "Gabapentin".into(),
            dose: "300mg".into(),
            category: MedicationCategory::Chronic,
            schedule: vec![taken(time!(9, 0), time!(9, 10)), pending(time!(21, 0))],
            start_date: date!(2025, 9, 15),
            end_date: None,
            prescribed_by: Some("Dr. García".into()),
            color_tone: "#8b5cf6".into(),
            instructions: Some("Do not stop abruptly".into()),
        },
        Medication {
            id: "med-003".into(),
            patient_id: "patient-001".into(),
            name: "Amitriptyline".into(),
            dose: "25mg".into(),
            category: MedicationCategory::Mood,
            schedule: vec![pending(time!(22, 0))],
            start_date: date!(2025, 11, 1),
            end_date: None,
            prescribed_by: Some("Dr. López".into()),
            color_tone: "#ec4899".into(),
            instructions: Some("Take before bed".into()),
        },
        Medication {
            id: "med-004".into(),
            patient_id: "patient-001".into(),
            name: "Ibuprofen".into(),
            dose: "400mg".into(),
            category: MedicationCategory::Pain,
            schedule: vec![taken(time!(12, 0), time!(12, 15)), pending(time!(18, 0))],
            start_date: date!(2025, 11, 10),
            end_date: Some(date!(2025, 11, 25)),
            prescribed_by: Some("Dr. García".into()),
            color_tone: "#06b6d4".into(),
            instructions: Some("Take after meals".into()),
        },
        Medication {
            id: "med-005".into(),
            patient_id: "patient-001".into(),
            name: "Vitamin D".into(),
            dose: "1000 IU".into(),
            category: MedicationCategory::Supplement,
            schedule: vec![taken(time!(10, 0), time!(10, 5))],
            start_date: date!(2025, 10, 20),
            end_date: None,
            prescribed_by: None,
            color_tone: "#f59e0b".into(),
            instructions: Some("Take with breakfast".into()),
        },
    ]
}

fn build_sample_pain_reports() -> Vec<PainReport> {
    vec![
        PainReport {
            id: "pr-003".into(),
            patient_id: "patient-001".into(),
            date: date!(2025, 11, 18),
            time: time!(9, 15),
            locations: vec!["lower-back".into(), "right-leg".into()],
            intensity: 8,
            pain_types: vec!["electric".into(), "sharp".into()],
            temporality: PainTemporality::Intermittent,
            notes: Some("Severe pain on waking".into()),
        },
        PainReport {
            id: "pr-002".into(),
            patient_id: "patient-001".into(),
            date: date!(2025, 11, 19),
            time: time!(14, 0),
            locations: vec!["lower-back".into()],
            intensity: 5,
            pain_types: vec!["dull".into(), "throbbing".into()],
            temporality: PainTemporality::Constant,
            notes: None,
        },
        PainReport {
            id: "pr-001".into(),
            patient_id: "patient-001".into(),
            date: date!(2025, 11, 20),
            time: time!(8, 30),
            locations: vec!["lower-back".into(), "left-leg".into()],
            intensity: 7,
            pain_types: vec!["sharp".into(), "shooting".into()],
            temporality: PainTemporality::Intermittent,
            notes: Some("Pain increases after sitting for a long time".into()),
        },
    ]
}
