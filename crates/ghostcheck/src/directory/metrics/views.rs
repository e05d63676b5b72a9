use std::fmt;

use serde::{Serialize, Serializer};

/// Mean ghost score of a company's listings in tenths, or `NoData` when it has none.
/// `NoData` is never rendered as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageGhostScore {
    NoData,
    Tenths(u16),
}

impl AverageGhostScore {
    pub fn value(self) -> Option<f32> {
        match self {
            Self::NoData => None,
            Self::Tenths(tenths) => Some(f32::from(tenths) / 10.0),
        }
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AverageGhostScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => f.write_str("—"),
            Self::Tenths(tenths) => write!(f, "{}.{}", tenths / 10, tenths % 10),
        }
    }
}

impl Serialize for AverageGhostScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoData => serializer.serialize_none(),
            Self::Tenths(_) => serializer.serialize_some(&self.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyMetricsView {
    pub open_roles: usize,
    pub avg_days_posted: u32,
    pub avg_ghost_score: AverageGhostScore,
    pub avg_ghost_score_label: String,
    pub estimated_fill_rate_pct: u8,
    pub fill_rate_is_estimate: bool,
}
