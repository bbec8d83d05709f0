use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Engagement levels, in ascending band order.
///
/// Levels serialize to the SCREAMING_SNAKE_CASE labels used in API payloads
/// and threshold config files (`CRITICAL`, `AT_RISK`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementLevel {
    Critical,
    AtRisk,
    Monitor,
    Passive,
    Engaged,
}

impl EngagementLevel {
    /// All levels in ascending band order.
    pub const ALL: [EngagementLevel; 5] = [
        EngagementLevel::Critical,
        EngagementLevel::AtRisk,
        EngagementLevel::Monitor,
        EngagementLevel::Passive,
        EngagementLevel::Engaged,
    ];

    /// Wire label for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            EngagementLevel::Critical => "CRITICAL",
            EngagementLevel::AtRisk => "AT_RISK",
            EngagementLevel::Monitor => "MONITOR",
            EngagementLevel::Passive => "PASSIVE",
            EngagementLevel::Engaged => "ENGAGED",
        }
    }

    /// Parse a wire label back into a level.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "CRITICAL" => Ok(EngagementLevel::Critical),
            "AT_RISK" => Ok(EngagementLevel::AtRisk),
            "MONITOR" => Ok(EngagementLevel::Monitor),
            "PASSIVE" => Ok(EngagementLevel::Passive),
            "ENGAGED" => Ok(EngagementLevel::Engaged),
            _ => bail!("unknown engagement level: {}", s),
        }
    }

    /// Whether this level triggers attention lists (`CRITICAL` or `AT_RISK`).
    pub fn is_alert(self) -> bool {
        matches!(self, EngagementLevel::Critical | EngagementLevel::AtRisk)
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngagementLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
