use anyhow::{bail, Result};

use super::engagement::EngagementLevel;
use super::mastery::MasteryLevel;

/// One threshold band: scores at or above `lower` (and below the next
/// band's bound) classify as `level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<L> {
    pub lower: f64,
    pub level: L,
}

/// Built-in mastery thresholds.
pub const MASTERY_BANDS: [Band<MasteryLevel>; 5] = [
    Band { lower: 0.0, level: MasteryLevel::NotStarted },
    Band { lower: 20.0, level: MasteryLevel::Developing },
    Band { lower: 50.0, level: MasteryLevel::Approaching },
    Band { lower: 70.0, level: MasteryLevel::Proficient },
    Band { lower: 90.0, level: MasteryLevel::Mastered },
];

/// Built-in engagement thresholds.
pub const ENGAGEMENT_BANDS: [Band<EngagementLevel>; 5] = [
    Band { lower: 0.0, level: EngagementLevel::Critical },
    Band { lower: 30.0, level: EngagementLevel::AtRisk },
    Band { lower: 50.0, level: EngagementLevel::Monitor },
    Band { lower: 60.0, level: EngagementLevel::Passive },
    Band { lower: 75.0, level: EngagementLevel::Engaged },
];

/// Classify a score against an ordered band list.
///
/// Reverse scan: the last band whose lower bound does not exceed the score
/// wins, so boundary values land in the higher band. Scores below the first
/// bound saturate to the first band. `bands` must be non-empty.
pub(crate) fn classify_bands<L: Copy>(bands: &[Band<L>], score: f64) -> L {
    debug_assert!(!bands.is_empty());
    for band in bands.iter().rev() {
        if score >= band.lower {
            return band.level;
        }
    }
    bands[0].level
}

/// An ordered, validated list of threshold bands for one taxonomy.
///
/// Construction enforces the band invariants (first bound at 0, strictly
/// ascending bounds below 100, strictly ascending levels), so `classify`
/// is total for any real score.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable<L> {
    bands: Vec<Band<L>>,
}

impl<L: Copy + PartialOrd> BandTable<L> {
    /// Build a table from ascending `(lower bound, level)` pairs.
    pub fn new(bands: Vec<Band<L>>) -> Result<Self> {
        if bands.is_empty() {
            bail!("band table must contain at least one band");
        }
        if bands[0].lower != 0.0 {
            bail!("first band must start at 0, got {}", bands[0].lower);
        }
        for (i, pair) in bands.windows(2).enumerate() {
            if pair[1].lower <= pair[0].lower {
                bail!(
                    "band bounds must be strictly ascending ({} after {} at index {})",
                    pair[1].lower,
                    pair[0].lower,
                    i + 1
                );
            }
            if pair[1].level <= pair[0].level {
                bail!("band levels must be strictly ascending at index {}", i + 1);
            }
        }
        if let Some(last) = bands.last() {
            if last.lower >= 100.0 {
                bail!("band bounds must stay below 100, got {}", last.lower);
            }
        }
        Ok(Self { bands })
    }

    /// Map a score to its band's level.
    pub fn classify(&self, score: f64) -> L {
        classify_bands(&self.bands, score)
    }

    /// The bands in ascending order.
    pub fn bands(&self) -> &[Band<L>] {
        &self.bands
    }
}

impl BandTable<MasteryLevel> {
    /// Table holding the built-in mastery thresholds.
    pub fn mastery() -> Self {
        Self {
            bands: MASTERY_BANDS.to_vec(),
        }
    }
}

impl BandTable<EngagementLevel> {
    /// Table holding the built-in engagement thresholds.
    pub fn engagement() -> Self {
        Self {
            bands: ENGAGEMENT_BANDS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_match_constants() {
        assert_eq!(BandTable::mastery().bands(), &MASTERY_BANDS);
        assert_eq!(BandTable::engagement().bands(), &ENGAGEMENT_BANDS);
    }

    #[test]
    fn test_classify_boundary_belongs_to_higher_band() {
        let table = BandTable::mastery();
        assert_eq!(table.classify(20.0), MasteryLevel::Developing);
        assert_eq!(table.classify(19.999), MasteryLevel::NotStarted);
        assert_eq!(table.classify(90.0), MasteryLevel::Mastered);
    }

    #[test]
    fn test_classify_saturates_below_first_bound() {
        let table = BandTable::engagement();
        assert_eq!(table.classify(-12.0), EngagementLevel::Critical);
    }

    #[test]
    fn test_classify_saturates_above_last_bound() {
        let table = BandTable::engagement();
        assert_eq!(table.classify(100.0), EngagementLevel::Engaged);
        assert_eq!(table.classify(250.0), EngagementLevel::Engaged);
    }

    #[test]
    fn test_new_accepts_partial_taxonomy() {
        let table = BandTable::new(vec![
            Band { lower: 0.0, level: EngagementLevel::Critical },
            Band { lower: 40.0, level: EngagementLevel::Monitor },
            Band { lower: 70.0, level: EngagementLevel::Engaged },
        ])
        .unwrap();
        assert_eq!(table.classify(55.0), EngagementLevel::Monitor);
        assert_eq!(table.classify(39.9), EngagementLevel::Critical);
    }

    #[test]
    fn test_new_rejects_empty() {
        let result = BandTable::<MasteryLevel>::new(vec![]);
        assert!(result.unwrap_err().to_string().contains("at least one"));
    }

    #[test]
    fn test_new_rejects_nonzero_first_bound() {
        let result = BandTable::new(vec![Band { lower: 10.0, level: MasteryLevel::NotStarted }]);
        assert!(result.unwrap_err().to_string().contains("start at 0"));
    }

    #[test]
    fn test_new_rejects_descending_bounds() {
        let result = BandTable::new(vec![
            Band { lower: 0.0, level: MasteryLevel::NotStarted },
            Band { lower: 50.0, level: MasteryLevel::Developing },
            Band { lower: 30.0, level: MasteryLevel::Approaching },
        ]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("strictly ascending"));
    }

    #[test]
    fn test_new_rejects_out_of_order_levels() {
        let result = BandTable::new(vec![
            Band { lower: 0.0, level: MasteryLevel::Developing },
            Band { lower: 50.0, level: MasteryLevel::NotStarted },
        ]);
        assert!(result.unwrap_err().to_string().contains("levels"));
    }

    #[test]
    fn test_new_rejects_bound_at_100() {
        let result = BandTable::new(vec![
            Band { lower: 0.0, level: MasteryLevel::NotStarted },
            Band { lower: 100.0, level: MasteryLevel::Mastered },
        ]);
        assert!(result.unwrap_err().to_string().contains("below 100"));
    }
}
