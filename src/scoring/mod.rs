pub mod config;
pub mod engine;
pub mod summary;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_average, calculate_percentage, categorize_engagement_level,
    categorize_mastery_level, clamp, normalize_score, round_to,
};
pub use summary::{summarize_engagement, summarize_engagement_with, EngagementSummary};
pub use validation::validate_scoring;
