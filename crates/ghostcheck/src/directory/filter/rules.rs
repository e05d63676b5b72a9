use std::collections::HashSet;

use serde::Serialize;

use super::super::classifier::classify_location;
use super::super::domain::Listing;
use super::{ListingFilter, RemoteFilter};

/// Individual conditions of a listing filter, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    Keywords,
    Location,
    TechStack,
    GhostScoreCeiling,
    RemoteType,
}

impl FilterRule {
    pub fn ordered() -> [Self; 5] {
        [
            Self::Keywords,
            Self::Location,
            Self::TechStack,
            Self::GhostScoreCeiling,
            Self::RemoteType,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Location => "location",
            Self::TechStack => "tech stack",
            Self::GhostScoreCeiling => "ghost score ceiling",
            Self::RemoteType => "remote type",
        }
    }
}

/// Filter inputs normalized once per evaluation.
pub(crate) struct Criteria {
    keywords: String,
    location: String,
    tech_stack: Vec<String>,
    max_ghost_score: i32,
    remote_type: RemoteFilter,
}

impl Criteria {
    pub(crate) fn from_filter(filter: &ListingFilter) -> Self {
        Self {
            keywords: filter.keywords.trim().to_lowercase(),
            location: filter.location.trim().to_lowercase(),
            tech_stack: filter
                .tech_stack
                .iter()
                .map(|tag| tag.to_lowercase())
                .collect(),
            max_ghost_score: filter.max_ghost_score,
            remote_type: filter.remote_type,
        }
    }

    pub(crate) fn passes(&self, rule: FilterRule, listing: &Listing) -> bool {
        match rule {
            FilterRule::Keywords => {
                self.keywords.is_empty() || listing.title.to_lowercase().contains(&self.keywords)
            }
            FilterRule::Location => {
                self.location.is_empty()
                    || listing.location.to_lowercase().contains(&self.location)
            }
            FilterRule::TechStack => {
                if self.tech_stack.is_empty() {
                    return true;
                }
                let listing_tags: HashSet<String> = listing
                    .tech_stack
                    .iter()
                    .map(|tag| tag.to_lowercase())
                    .collect();
                self.tech_stack
                    .iter()
                    .all(|required| listing_tags.contains(required))
            }
            FilterRule::GhostScoreCeiling => i32::from(listing.ghost_score) <= self.max_ghost_score,
            FilterRule::RemoteType => {
                self.remote_type == RemoteFilter::All
                    || self.remote_type.admits(classify_location(&listing.location))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::{CompanyId, JobId};

    fn listing() -> Listing {
        Listing {
            id: JobId::new("job-1"),
            title: "Senior Engineer".to_string(),
            company_id: CompanyId::new("c-1"),
            location: "Remote - US".to_string(),
            tech_stack: vec!["react".to_string(), "node".to_string()],
            salary_min: 0,
            salary_max: 0,
            days_posted: 3,
            ghost_score: 3,
            red_flags: Vec::new(),
            green_flags: Vec::new(),
            seniority: None,
            description: None,
            application_url: None,
        }
    }

    #[test]
    fn keyword_is_trimmed_and_case_insensitive() {
        let criteria = Criteria::from_filter(&ListingFilter {
            keywords: "  ENGINEER ".to_string(),
            ..ListingFilter::default()
        });
        assert!(criteria.passes(FilterRule::Keywords, &listing()));
    }

    #[test]
    fn keyword_does_not_search_location() {
        let criteria = Criteria::from_filter(&ListingFilter {
            keywords: "remote".to_string(),
            ..ListingFilter::default()
        });
        assert!(!criteria.passes(FilterRule::Keywords, &listing()));
    }

    #[test]
    fn tech_stack_requires_every_tag() {
        let criteria = Criteria::from_filter(&ListingFilter {
            tech_stack: vec!["React".to_string(), "Go".to_string()],
            ..ListingFilter::default()
        });
        assert!(!criteria.passes(FilterRule::TechStack, &listing()));

        let criteria = Criteria::from_filter(&ListingFilter {
            tech_stack: vec!["NODE".to_string(), "React".to_string()],
            ..ListingFilter::default()
        });
        assert!(criteria.passes(FilterRule::TechStack, &listing()));
    }

    #[test]
    fn negative_ceiling_rejects_everything() {
        let mut zero = listing();
        zero.ghost_score = 0;
        let criteria = Criteria::from_filter(&ListingFilter {
            max_ghost_score: -1,
            ..ListingFilter::default()
        });
        assert!(!criteria.passes(FilterRule::GhostScoreCeiling, &zero));
    }

    #[test]
    fn first_rejection_reports_rule() {
        let filter = ListingFilter {
            remote_type: RemoteFilter::Onsite,
            ..ListingFilter::default()
        };
        assert_eq!(
            filter.first_rejection(&listing()),
            Some(FilterRule::RemoteType)
        );
    }
}
