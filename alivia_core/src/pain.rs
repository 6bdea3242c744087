//! Pain history summaries.

use crate::PainReport;
use serde::Serialize;

/// Number of most recent reports considered for the trend
pub const TREND_WINDOW: usize = 7;

/// Reports averaged at each end of the trend window
const TREND_EDGE: usize = 3;

/// Change in average intensity needed before a trend is reported
const TREND_THRESHOLD: f64 = 0.5;

/// Direction of recent pain intensity
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PainTrend {
    Increasing,
    Decreasing,
    Stable,
}

/// Intensity statistics over a set of pain reports
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq)]
pub struct PainSummary {
    pub count: usize,
    /// Mean intensity rounded to one decimal
    pub average: f64,
    pub min: u8,
    pub max: u8,
}

/// Summarize intensities; an empty slice yields all zeros
pub fn summarize(reports: &[PainReport]) -> PainSummary {
    if reports.is_empty() {
        return PainSummary::default();
    }

    let intensities: Vec<u8> = reports.iter().map(|r| r.intensity).collect();
    let average = mean(&intensities);

    PainSummary {
        count: intensities.len(),
        average: (average * 10.0).round() / 10.0,
        min: intensities.iter().copied().min().unwrap_or(0),
        max: intensities.iter().copied().max().unwrap_or(0),
    }
}

/// Compare the start and end of the most recent reports
///
/// Reports are taken in the order given, oldest first. Within the last
/// [`TREND_WINDOW`] reports, the mean of the first three is compared with the
/// mean of the last three (the whole window when it holds fewer than three).
pub fn trend(reports: &[PainReport]) -> PainTrend {
    let start = reports.len().saturating_sub(TREND_WINDOW);
    let recent: Vec<u8> = reports[start..].iter().map(|r| r.intensity).collect();

    let (first, last) = if recent.len() >= TREND_EDGE {
        (
            mean(&recent[..TREND_EDGE]),
            mean(&recent[recent.len() - TREND_EDGE..]),
        )
    } else {
        let all = mean(&recent);
        (all, all)
    };

    let trend = if last > first + TREND_THRESHOLD {
        PainTrend::Increasing
    } else if last < first - TREND_THRESHOLD {
        PainTrend::Decreasing
    } else {
        PainTrend::Stable
    };

    tracing::debug!(
        "Pain trend over {} reports: {:.2} -> {:.2} ({:?})",
        recent.len(),
        first,
        last,
        trend
    );
    trend
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}
