use serde::Serialize;

use super::domain::{Company, GhostScoreBand, JobId};
use super::filter::ListingFilter;
use super::metrics::CompanyMetricsView;
use super::pagination::Page;
use super::query::EnrichedListing;

/// Listing as shown in result lists: enriched data plus display labels and saved state.
#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    #[serde(flatten)]
    pub listing: EnrichedListing,
    pub salary_label: String,
    pub salary_disclosed: bool,
    pub posted_label: String,
    pub ghost_band: GhostScoreBand,
    pub saved: bool,
}

impl ListingCard {
    pub fn new(listing: EnrichedListing, saved: bool) -> Self {
        let compensation = listing.listing.compensation();
        Self {
            salary_label: compensation.label(),
            salary_disclosed: compensation.is_disclosed(),
            posted_label: listing.listing.posted_label(),
            ghost_band: listing.listing.ghost_band(),
            saved,
            listing,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub filter: ListingFilter,
    #[serde(flatten)]
    pub results: Page<ListingCard>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDetailView {
    #[serde(flatten)]
    pub card: ListingCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_ghost_score: Option<u8>,
    pub is_high_risk: bool,
    /// Catalog text when present, otherwise generated from the listing fields.
    /// Serialized apart from the listing's optional `description`.
    #[serde(rename = "full_description")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HiringActivityEntry {
    pub job_id: JobId,
    pub title: String,
    pub days_posted: u32,
    pub posted_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub company: Company,
    pub ghost_band: GhostScoreBand,
    pub metrics: CompanyMetricsView,
    pub open_roles: Vec<ListingCard>,
    pub hiring_activity: Vec<HiringActivityEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedStatusView {
    pub job_id: JobId,
    pub saved: bool,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavedListingsView {
    pub count: usize,
    pub jobs: Vec<ListingCard>,
}
