//! Medication dose scheduling.
//!
//! Times are compared as minutes since midnight. When every remaining dose
//! of the day is already behind `now`, the earliest untaken dose is treated
//! as tomorrow's.

use crate::{Error, Medication, MedicationCategory, NextDose, Result, TimeOfDay};
use serde::Serialize;

impl NextDose {
    /// Build a next dose from the minutes left until it is due
    pub fn new(time: TimeOfDay, minutes_remaining: u32) -> Self {
        Self {
            time,
            minutes_remaining,
            hours_remaining: f64::from(tenths_of_hour(minutes_remaining)) / 10.0,
        }
    }

    /// Hours remaining expressed in whole tenths (e.g. 25 for 2.5h)
    pub fn rounded_tenths(&self) -> u32 {
        tenths_of_hour(self.minutes_remaining)
    }

    /// True when the dose is due within `threshold_minutes`
    pub fn is_due_soon(&self, threshold_minutes: u32) -> bool {
        self.rounded_tenths() * 6 <= threshold_minutes
    }

    /// Compact countdown label: minutes of the rounded hours under an hour
    /// (`48m` for 0.8h), whole hours otherwise
    pub fn compact_label(&self) -> String {
        let tenths = self.rounded_tenths();
        if tenths < 10 {
            format!("{}m", tenths * 6)
        } else {
            format!("{}h", (tenths + 5) / 10)
        }
    }
}

/// Minutes converted to hours, rounded half-up to one decimal, in tenths
fn tenths_of_hour(minutes: u32) -> u32 {
    (minutes * 10 + 30) / 60
}

/// Find the next untaken dose of a medication
///
/// Returns `Ok(None)` when every slot has been taken. A medication with no
/// slots at all is a malformed schedule and is rejected.
pub fn next_dose(medication: &Medication, now: TimeOfDay) -> Result<Option<NextDose>> {
    if medication.schedule.is_empty() {
        return Err(Error::Schedule(format!(
            "medication '{}' has no dose slots",
            medication.id
        )));
    }

    let mut untaken: Vec<TimeOfDay> = medication
        .schedule
        .iter()
        .filter(|slot| !slot.taken)
        .map(|slot| slot.time)
        .collect();

    if untaken.is_empty() {
        tracing::debug!("All doses taken for {}", medication.id);
        return Ok(None);
    }

    untaken.sort();

    let now_minutes = i32::from(now.minutes_since_midnight());
    let selected = untaken
        .iter()
        .copied()
        .find(|t| i32::from(t.minutes_since_midnight()) > now_minutes)
        .unwrap_or(untaken[0]);

    let mut minutes_remaining = i32::from(selected.minutes_since_midnight()) - now_minutes;
    if minutes_remaining < 0 {
        minutes_remaining += i32::from(TimeOfDay::MINUTES_PER_DAY);
    }

    let next = NextDose::new(selected, minutes_remaining as u32);
    tracing::debug!(
        "Next dose for {} at {} ({}h)",
        medication.id,
        next.time,
        next.hours_remaining
    );
    Ok(Some(next))
}

/// A medication paired with its next dose at a fixed point in time
#[derive(Clone, Debug, Serialize)]
pub struct ScheduledMedication<'a> {
    pub medication: &'a Medication,
    pub next: Option<NextDose>,
}

/// Rank medications by how soon their next dose is due
///
/// All next doses are computed against the same `now`. Medications with
/// nothing left to take come last. The sort is stable, so ties keep their
/// input order.
pub fn rank_by_urgency(
    medications: &[Medication],
    now: TimeOfDay,
) -> Result<Vec<ScheduledMedication<'_>>> {
    let mut ranked = Vec::with_capacity(medications.len());
    for medication in medications {
        ranked.push(ScheduledMedication {
            medication,
            next: next_dose(medication, now)?,
        });
    }

    ranked.sort_by_key(|entry| match &entry.next {
        Some(next) => (false, next.rounded_tenths()),
        None => (true, 0),
    });

    Ok(ranked)
}

/// Order medications by urgency of their next dose
pub fn order_by_urgency(medications: &[Medication], now: TimeOfDay) -> Result<Vec<&Medication>> {
    Ok(rank_by_urgency(medications, now)?
        .into_iter()
        .map(|entry| entry.medication)
        .collect())
}

/// Medications sharing a category
#[derive(Clone, Debug, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: MedicationCategory,
    pub medications: Vec<&'a Medication>,
}

/// Group medications by category
///
/// Groups appear in the order their category is first encountered, and each
/// group keeps the input order of its medications.
pub fn group_by_category(medications: &[Medication]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();

    for medication in medications {
        match groups
            .iter_mut()
            .find(|group| group.category == medication.category)
        {
            Some(group) => group.medications.push(medication),
            None => groups.push(CategoryGroup {
                category: medication.category,
                medications: vec![medication],
            }),
        }
    }

    groups
}

/// Counts shown under a medication list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MedicationSummary {
    pub total: usize,
    /// Medications whose every dose has been taken
    pub completed: usize,
    /// Medications with at least one dose left
    pub pending: usize,
}

pub fn summarize(medications: &[Medication]) -> MedicationSummary {
    let completed = medications.iter().filter(|m| m.all_taken()).count();
    let pending = medications.iter().filter(|m| m.pending_doses() > 0).count();

    MedicationSummary {
        total: medications.len(),
        completed,
        pending,
    }
}
