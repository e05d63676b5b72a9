mod rules;

pub use rules::FilterRule;

use super::domain::{Listing, RemoteType, MAX_GHOST_SCORE};
use serde::{Deserialize, Serialize};

/// Remote-type constraint supplied by the caller. `All` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RemoteFilter {
    #[default]
    #[serde(alias = "all")]
    All,
    #[serde(alias = "remote")]
    Remote,
    #[serde(alias = "hybrid")]
    Hybrid,
    #[serde(alias = "onsite")]
    Onsite,
}

impl RemoteFilter {
    pub fn admits(self, remote_type: RemoteType) -> bool {
        match self {
            Self::All => true,
            Self::Remote => remote_type == RemoteType::Remote,
            Self::Hybrid => remote_type == RemoteType::Hybrid,
            Self::Onsite => remote_type == RemoteType::Onsite,
        }
    }
}

impl From<RemoteType> for RemoteFilter {
    fn from(value: RemoteType) -> Self {
        match value {
            RemoteType::Remote => Self::Remote,
            RemoteType::Hybrid => Self::Hybrid,
            RemoteType::Onsite => Self::Onsite,
        }
    }
}

/// Caller-supplied search parameters. Every condition must hold for a listing to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    pub keywords: String,
    pub location: String,
    pub tech_stack: Vec<String>,
    pub max_ghost_score: i32,
    pub remote_type: RemoteFilter,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            location: String::new(),
            tech_stack: Vec::new(),
            max_ghost_score: i32::from(MAX_GHOST_SCORE),
            remote_type: RemoteFilter::All,
        }
    }
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        self.first_rejection(listing).is_none()
    }

    /// The first rule that rejects the listing, or `None` when it matches.
    pub fn first_rejection(&self, listing: &Listing) -> Option<FilterRule> {
        let criteria = rules::Criteria::from_filter(self);
        FilterRule::ordered()
            .into_iter()
            .find(|rule| !criteria.passes(*rule, listing))
    }
}
