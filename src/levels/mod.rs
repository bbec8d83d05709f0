pub mod bands;
pub mod engagement;
pub mod mastery;

pub use bands::{Band, BandTable, ENGAGEMENT_BANDS, MASTERY_BANDS};
pub use engagement::EngagementLevel;
pub use mastery::MasteryLevel;
