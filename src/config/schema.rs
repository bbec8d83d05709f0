use serde::{Deserialize, Serialize};

use crate::calendar::CalendarConfig;
use crate::scoring::ScoringConfig;

/// Top-level config file shape.
///
/// Both sections are optional; an omitted section keeps the built-in
/// defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
}
