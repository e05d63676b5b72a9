mod summary;
pub mod views;

pub use summary::{estimated_fill_rate_pct, hiring_activity, CompanyMetrics};
pub use views::{AverageGhostScore, CompanyMetricsView};

/// Lower bound of the estimated fill rate.
pub const FILL_RATE_FLOOR_PCT: u8 = 60;
/// Upper bound of the estimated fill rate.
pub const FILL_RATE_CEILING_PCT: u8 = 95;
