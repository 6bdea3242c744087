//! Medication list loading, validation and in-memory dose marking.

use crate::{Error, Medication, Result, TimeOfDay};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

/// Load a JSON array of medications from a file
///
/// Unlike optional inputs, a medications file that was asked for must exist
/// and parse; both failures are returned to the caller.
pub fn load_medications(path: &Path) -> Result<Vec<Medication>> {
    let contents = std::fs::read_to_string(path)?;
    let medications: Vec<Medication> = serde_json::from_str(&contents)?;

    for medication in &medications {
        for problem in medication.validate() {
            tracing::warn!("{}", problem);
        }
    }

    tracing::info!("Loaded {} medications from {:?}", medications.len(), path);
    Ok(medications)
}

impl Medication {
    /// Validate the medication, returning a list of problems
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.is_empty() {
            errors.push("Medication has empty ID".to_string());
        }
        if self.name.is_empty() {
            errors.push(format!("Medication '{}' has empty name", self.id));
        }
        if self.schedule.is_empty() {
            errors.push(format!("Medication '{}' has no dose slots", self.id));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                errors.push(format!(
                    "Medication '{}': end date {} is before start date {}",
                    self.id, end, self.start_date
                ));
            }
        }

        let mut seen = HashSet::new();
        for slot in &self.schedule {
            if !seen.insert(slot.time) {
                errors.push(format!(
                    "Medication '{}' has duplicate dose slot at {}",
                    self.id, slot.time
                ));
            }
        }

        errors
    }

    /// True when the medication is prescribed for the given date
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date >= self.start_date && self.end_date.map_or(true, |end| date <= end)
    }

    /// Mark one dose slot as taken at the given time
    ///
    /// Only the in-memory value changes.
    pub fn mark_taken(&mut self, slot_index: usize, at: TimeOfDay) -> Result<()> {
        let id = self.id.clone();
        let slot = self.schedule.get_mut(slot_index).ok_or_else(|| {
            Error::Schedule(format!(
                "medication '{}' has no dose slot {}",
                id, slot_index
            ))
        })?;

        if slot.taken {
            return Err(Error::Schedule(format!(
                "dose at {} for medication '{}' is already taken",
                slot.time, id
            )));
        }

        slot.taken = true;
        slot.taken_at = Some(at);
        tracing::debug!("Marked {} dose at {} taken at {}", id, slot.time, at);
        Ok(())
    }
}
