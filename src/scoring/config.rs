use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::levels::{Band, BandTable, EngagementLevel, MasteryLevel, ENGAGEMENT_BANDS, MASTERY_BANDS};

/// Main scoring configuration.
///
/// Tunes the threshold bands behind level categorization. Each taxonomy is
/// optional; an omitted taxonomy keeps the built-in thresholds. A tuned band
/// list may shift bounds or stop early (omitting upper levels), but bounds
/// must start at 0 and ascend, and levels must ascend with them.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   mastery:
///     - { lower: 0,  level: NOT_STARTED }
///     - { lower: 25, level: DEVELOPING }
///     - { lower: 55, level: APPROACHING }
///     - { lower: 75, level: PROFICIENT }
///     - { lower: 92, level: MASTERED }
///   engagement:
///     - { lower: 0,  level: CRITICAL }
///     - { lower: 40, level: AT_RISK }
///     - { lower: 70, level: ENGAGED }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Mastery bands as `(lower bound, level label)` pairs
    /// Labels are the wire names: NOT_STARTED, DEVELOPING, ...
    #[serde(default)]
    pub mastery: Option<Vec<BandSpec>>,

    /// Engagement bands as `(lower bound, level label)` pairs
    /// Labels are the wire names: CRITICAL, AT_RISK, ...
    #[serde(default)]
    pub engagement: Option<Vec<BandSpec>>,
}

/// One configured threshold band.
///
/// Scores at or above `lower` (and below the next band's bound) map to
/// `level`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BandSpec {
    /// Inclusive lower bound of the band, in [0, 100)
    pub lower: f64,

    /// Wire label of the level this band maps to (e.g. "PROFICIENT")
    pub level: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mastery: Some(
                MASTERY_BANDS
                    .iter()
                    .map(|band| BandSpec {
                        lower: band.lower,
                        level: band.level.as_str().to_string(),
                    })
                    .collect(),
            ),
            engagement: Some(
                ENGAGEMENT_BANDS
                    .iter()
                    .map(|band| BandSpec {
                        lower: band.lower,
                        level: band.level.as_str().to_string(),
                    })
                    .collect(),
            ),
        }
    }
}

impl ScoringConfig {
    /// Typed mastery table for this config, falling back to the built-in
    /// thresholds when the section is omitted.
    pub fn mastery_table(&self) -> Result<BandTable<MasteryLevel>> {
        match &self.mastery {
            Some(specs) => {
                let bands = specs
                    .iter()
                    .map(|spec| {
                        Ok(Band {
                            lower: spec.lower,
                            level: MasteryLevel::parse(&spec.level)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let table = BandTable::new(bands)?;
                debug!("tuned mastery bands replace defaults ({} bands)", table.bands().len());
                Ok(table)
            }
            None => Ok(BandTable::mastery()),
        }
    }

    /// Typed engagement table for this config, falling back to the built-in
    /// thresholds when the section is omitted.
    pub fn engagement_table(&self) -> Result<BandTable<EngagementLevel>> {
        match &self.engagement {
            Some(specs) => {
                let bands = specs
                    .iter()
                    .map(|spec| {
                        Ok(Band {
                            lower: spec.lower,
                            level: EngagementLevel::parse(&spec.level)?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let table = BandTable::new(bands)?;
                debug!("tuned engagement bands replace defaults ({} bands)", table.bands().len());
                Ok(table)
            }
            None => Ok(BandTable::engagement()),
        }
    }
}
