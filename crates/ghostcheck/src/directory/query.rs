use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::classifier::classify_location;
use super::domain::{CompanyId, Listing, RemoteType};
use super::filter::{FilterRule, ListingFilter};

/// Display name used when a listing references an unknown company.
pub const UNKNOWN_COMPANY: &str = "—";

/// Resolves company display names for listings.
pub trait CompanyNames {
    fn company_name(&self, id: &CompanyId) -> Option<&str>;
}

impl CompanyNames for HashMap<CompanyId, String> {
    fn company_name(&self, id: &CompanyId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Listing enriched with the resolved company name and its inferred remote type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub company_name: String,
    pub remote_type: RemoteType,
}

impl EnrichedListing {
    pub fn new<N: CompanyNames + ?Sized>(listing: &Listing, names: &N) -> Self {
        let company_name = names
            .company_name(&listing.company_id)
            .unwrap_or(UNKNOWN_COMPANY)
            .to_string();
        Self {
            listing: listing.clone(),
            company_name,
            remote_type: classify_location(&listing.location),
        }
    }
}

/// Keep the listings that match `filter`, in input order, enriched for display.
pub fn query_listings<'a, I, N>(listings: I, names: &N, filter: &ListingFilter) -> Vec<EnrichedListing>
where
    I: IntoIterator<Item = &'a Listing>,
    N: CompanyNames + ?Sized,
{
    let mut scanned = 0usize;
    let mut rejected = [0usize; 5];
    let matches: Vec<EnrichedListing> = listings
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter(|listing| match filter.first_rejection(listing) {
            Some(rule) => {
                rejected[rule as usize] += 1;
                false
            }
            None => true,
        })
        .map(|listing| EnrichedListing::new(listing, names))
        .collect();

    debug!(
        scanned,
        matched = matches.len(),
        rejected_keywords = rejected[FilterRule::Keywords as usize],
        rejected_location = rejected[FilterRule::Location as usize],
        rejected_tech_stack = rejected[FilterRule::TechStack as usize],
        rejected_ghost_score = rejected[FilterRule::GhostScoreCeiling as usize],
        rejected_remote_type = rejected[FilterRule::RemoteType as usize],
        "listing query evaluated"
    );
    matches
}

/// Enrich listings without filtering; used for saved and company pages.
pub fn enrich_listings<'a, I, N>(listings: I, names: &N) -> Vec<EnrichedListing>
where
    I: IntoIterator<Item = &'a Listing>,
    N: CompanyNames + ?Sized,
{
    listings
        .into_iter()
        .map(|listing| EnrichedListing::new(listing, names))
        .collect()
}
