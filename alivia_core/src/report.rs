//! CSV export of the medication schedule.
//!
//! Rows follow urgency order so the export matches what the schedule view
//! shows at the same point in time.

use crate::schedule::{rank_by_urgency, ScheduledMedication};
use crate::{Medication, Result, TimeOfDay};
use std::io::Write;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    name: String,
    dose: String,
    category: &'static str,
    next_time: Option<String>,
    hours_remaining: Option<f64>,
    status: &'static str,
}

impl From<&ScheduledMedication<'_>> for CsvRow {
    fn from(entry: &ScheduledMedication<'_>) -> Self {
        let medication = entry.medication;
        CsvRow {
            id: medication.id.clone(),
            name: medication.name.clone(),
            dose: medication.dose.clone(),
            category: medication.category.as_str(),
            next_time: entry.next.as_ref().map(|n| n.time.to_string()),
            hours_remaining: entry.next.as_ref().map(|n| n.hours_remaining),
            status: if entry.next.is_some() {
                "pending"
            } else {
                "complete"
            },
        }
    }
}

/// Write the schedule as CSV, most urgent first
///
/// Returns the number of rows written.
pub fn write_schedule_csv<W: Write>(
    writer: W,
    medications: &[Medication],
    now: TimeOfDay,
) -> Result<usize> {
    let ranked = rank_by_urgency(medications, now)?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in &ranked {
        csv_writer.serialize(CsvRow::from(entry))?;
    }
    csv_writer.flush()?;

    tracing::debug!("Wrote {} schedule rows", ranked.len());
    Ok(ranked.len())
}
