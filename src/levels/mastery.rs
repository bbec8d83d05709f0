use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mastery progression levels, in ascending band order.
///
/// Levels serialize to the SCREAMING_SNAKE_CASE labels used in API payloads
/// and threshold config files (`NOT_STARTED`, `DEVELOPING`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MasteryLevel {
    NotStarted,
    Developing,
    Approaching,
    Proficient,
    Mastered,
}

impl MasteryLevel {
    /// All levels in ascending band order.
    pub const ALL: [MasteryLevel; 5] = [
        MasteryLevel::NotStarted,
        MasteryLevel::Developing,
        MasteryLevel::Approaching,
        MasteryLevel::Proficient,
        MasteryLevel::Mastered,
    ];

    /// Wire label for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            MasteryLevel::NotStarted => "NOT_STARTED",
            MasteryLevel::Developing => "DEVELOPING",
            MasteryLevel::Approaching => "APPROACHING",
            MasteryLevel::Proficient => "PROFICIENT",
            MasteryLevel::Mastered => "MASTERED",
        }
    }

    /// Parse a wire label back into a level.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "NOT_STARTED" => Ok(MasteryLevel::NotStarted),
            "DEVELOPING" => Ok(MasteryLevel::Developing),
            "APPROACHING" => Ok(MasteryLevel::Approaching),
            "PROFICIENT" => Ok(MasteryLevel::Proficient),
            "MASTERED" => Ok(MasteryLevel::Mastered),
            _ => bail!("unknown mastery level: {}", s),
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MasteryLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for level in MasteryLevel::ALL {
            assert_eq!(MasteryLevel::parse(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = MasteryLevel::parse("EXPERT").unwrap_err();
        assert!(err.to_string().contains("EXPERT"));
    }

    #[test]
    fn test_ordering_follows_bands() {
        assert!(MasteryLevel::NotStarted < MasteryLevel::Developing);
        assert!(MasteryLevel::Proficient < MasteryLevel::Mastered);
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&MasteryLevel::NotStarted).unwrap();
        assert_eq!(json, "\"NOT_STARTED\"");
        let level: MasteryLevel = serde_json::from_str("\"MASTERED\"").unwrap();
        assert_eq!(level, MasteryLevel::Mastered);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(MasteryLevel::Approaching.to_string(), "APPROACHING");
    }
}
