use serde::Serialize;
use std::collections::BTreeMap;

use super::engine::{calculate_average, calculate_percentage, round_to};
use crate::levels::{BandTable, EngagementLevel};

/// Aggregated engagement picture for one cohort of scores.
///
/// Serializes with the level wire labels as distribution keys, ready to
/// embed in class-level API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSummary {
    /// Scores per level, zero-filled so every level is always present
    pub distribution: BTreeMap<EngagementLevel, usize>,

    /// Scores at an alert level (CRITICAL or AT_RISK)
    pub alert_count: usize,

    /// Percentage of scores at PASSIVE or above, 1 decimal
    pub engagement_rate: f64,

    /// Mean score rounded to the nearest integer
    pub engagement_index: i64,

    /// Mean score, 1 decimal
    pub mean_score: f64,
}

/// Summarize a cohort's engagement scores against the built-in thresholds.
pub fn summarize_engagement(scores: &[f64]) -> EngagementSummary {
    summarize_engagement_with(&BandTable::engagement(), scores)
}

/// Summarize a cohort's engagement scores against a tuned band table.
pub fn summarize_engagement_with(
    table: &BandTable<EngagementLevel>,
    scores: &[f64],
) -> EngagementSummary {
    let mut distribution: BTreeMap<EngagementLevel, usize> =
        EngagementLevel::ALL.iter().map(|&level| (level, 0)).collect();

    for &score in scores {
        *distribution.entry(table.classify(score)).or_insert(0) += 1;
    }

    let alert_count = distribution
        .iter()
        .filter(|(level, _)| level.is_alert())
        .map(|(_, count)| count)
        .sum();

    let engaged_or_passive: usize = distribution
        .iter()
        .filter(|(level, _)| **level >= EngagementLevel::Passive)
        .map(|(_, count)| count)
        .sum();

    let mean = calculate_average(scores);

    EngagementSummary {
        distribution,
        alert_count,
        engagement_rate: calculate_percentage(engaged_or_passive as f64, scores.len() as f64, 1),
        engagement_index: mean.round() as i64,
        mean_score: round_to(mean, 1),
    }
}
