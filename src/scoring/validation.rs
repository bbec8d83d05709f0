use anyhow::Result;

use super::config::{BandSpec, ScoringConfig};
use crate::levels::{EngagementLevel, MasteryLevel};

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref specs) = config.mastery {
        validate_bands(specs, "scoring.mastery", MasteryLevel::parse, &mut errors);
    }

    if let Some(ref specs) = config.engagement {
        validate_bands(specs, "scoring.engagement", EngagementLevel::parse, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_bands<L, F>(specs: &[BandSpec], section: &str, parse_level: F, errors: &mut Vec<String>)
where
    L: Copy + PartialOrd,
    F: Fn(&str) -> Result<L>,
{
    if specs.is_empty() {
        errors.push(format!("{}: must contain at least one band", section));
        return;
    }

    if specs[0].lower != 0.0 {
        errors.push(format!(
            "{}[0].lower: first bound must be 0, got {}",
            section, specs[0].lower
        ));
    }

    let mut prev_lower: Option<f64> = None;
    let mut prev_level: Option<L> = None;

    for (i, spec) in specs.iter().enumerate() {
        if !(0.0..100.0).contains(&spec.lower) {
            errors.push(format!(
                "{}[{}].lower: must be in [0, 100), got {}",
                section, i, spec.lower
            ));
        }

        if let Some(prev) = prev_lower {
            if spec.lower <= prev {
                errors.push(format!(
                    "{}[{}].lower: bounds must be strictly ascending ({} after {})",
                    section, i, spec.lower, prev
                ));
            }
        }
        prev_lower = Some(spec.lower);

        match parse_level(&spec.level) {
            Ok(level) => {
                if let Some(prev) = prev_level {
                    if level <= prev {
                        errors.push(format!(
                            "{}[{}].level: levels must be strictly ascending, '{}' repeats or goes backwards",
                            section, i, spec.level
                        ));
                    }
                }
                prev_level = Some(level);
            }
            Err(e) => {
                errors.push(format!(
                    "{}[{}].level: invalid '{}' - {}",
                    section, i, spec.level, e
                ));
            }
        }
    }
}
