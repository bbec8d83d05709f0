//! Engagement and mastery scoring for academic monitoring backends.
//!
//! Converts raw learning signals into bounded 0-100 scores and discrete
//! categorical levels:
//!
//! - **Scoring engine**: percentage, average, clamp, and min-max
//!   normalization arithmetic with documented safe-division policies for
//!   degenerate inputs.
//! - **Level taxonomies**: the ordered `MasteryLevel` and `EngagementLevel`
//!   enumerations, their wire labels, and the alert predicate that drives
//!   attention lists.
//! - **Band tables**: threshold bands kept as ordered data rather than
//!   chained conditionals, tunable through a YAML config file.
//! - **Cohort summaries**: per-level distributions, alert counts, and
//!   engagement rates over collections of scores.
//! - **Helpers**: reporting windows and academic calendar math, slice
//!   pagination, and text slugs carried over from the surrounding backend.
//!
//! The crate performs no I/O apart from the optional threshold loader in
//! [`config`]; every scoring operation is a pure function safe for
//! unsynchronized concurrent use.

pub mod calendar;
pub mod config;
pub mod levels;
pub mod paging;
pub mod scoring;
pub mod text;

pub use config::{load_config, Config};
pub use levels::{Band, BandTable, EngagementLevel, MasteryLevel, ENGAGEMENT_BANDS, MASTERY_BANDS};
pub use scoring::{
    calculate_average, calculate_percentage, categorize_engagement_level,
    categorize_mastery_level, clamp, normalize_score, round_to, summarize_engagement,
    summarize_engagement_with, validate_scoring, BandSpec, EngagementSummary, ScoringConfig,
};
