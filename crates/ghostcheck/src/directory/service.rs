use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::{CatalogNames, ListingSource};
use super::domain::JobId;
use super::filter::ListingFilter;
use super::metrics::{hiring_activity, CompanyMetrics};
use super::pagination::{self, PaginationError};
use super::query::{enrich_listings, query_listings, EnrichedListing};
use super::saved::{SavedBackend, SavedItemsStore};
use super::views::{
    CompanyProfile, HiringActivityEntry, JobDetailView, ListingCard, SavedListingsView,
    SavedStatusView, SearchPage,
};

/// Presentation-facing operations over a catalog snapshot and the saved-items store.
pub struct DirectoryService<S, B> {
    catalog: Arc<S>,
    saved: Arc<SavedItemsStore<B>>,
    page_size: usize,
}

impl<S, B> DirectoryService<S, B>
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    /// Fails when `page_size` is zero.
    pub fn new(
        catalog: Arc<S>,
        saved: Arc<SavedItemsStore<B>>,
        page_size: usize,
    ) -> Result<Self, PaginationError> {
        pagination::total_pages(0, page_size)?;
        Ok(Self {
            catalog,
            saved,
            page_size,
        })
    }

    pub fn catalog(&self) -> &S {
        &self.catalog
    }

    pub fn saved(&self) -> &SavedItemsStore<B> {
        &self.saved
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filter the catalog and return the requested (clamped) page.
    pub fn search(&self, filter: &ListingFilter, page: i64) -> Result<SearchPage, PaginationError> {
        let names = CatalogNames(self.catalog.as_ref());
        let matches = query_listings(self.catalog.listings(), &names, filter);
        let results = pagination::paginate(&matches, self.page_size, page)?
            .map(|listing| self.card(listing));

        debug!(
            total = results.total_items,
            page = results.page,
            total_pages = results.total_pages,
            "search page built"
        );

        Ok(SearchPage {
            filter: filter.clone(),
            has_previous: results.has_previous(),
            has_next: results.has_next(),
            results,
        })
    }

    pub fn job_detail(&self, id: &JobId) -> Option<JobDetailView> {
        let listing = self.catalog.listing(id)?;
        let company = self.catalog.company(&listing.company_id);
        let names = CatalogNames(self.catalog.as_ref());
        let enriched = EnrichedListing::new(listing, &names);

        Some(JobDetailView {
            is_high_risk: listing.is_high_risk(),
            company_slug: company.map(|company| company.slug.clone()),
            company_ghost_score: company.map(|company| company.ghost_score),
            description: listing.full_description(&enriched.company_name),
            card: self.card(enriched),
        })
    }

    pub fn company_profile(&self, slug: &str) -> Option<CompanyProfile> {
        let company = self.catalog.company_by_slug(slug)?;
        let listings = self.catalog.listings_for_company(&company.id);
        let metrics = CompanyMetrics::compute(company, listings.iter().copied());
        let names = CatalogNames(self.catalog.as_ref());

        let open_roles = enrich_listings(listings.iter().copied(), &names)
            .into_iter()
            .map(|listing| self.card(listing))
            .collect();

        let hiring_activity = hiring_activity(listings.iter().copied())
            .into_iter()
            .map(|listing| HiringActivityEntry {
                job_id: listing.id.clone(),
                title: listing.title.clone(),
                days_posted: listing.days_posted,
                posted_label: listing.posted_label(),
            })
            .collect();

        Some(CompanyProfile {
            company: company.clone(),
            ghost_band: company.ghost_band(),
            metrics: metrics.to_view(),
            open_roles,
            hiring_activity,
        })
    }

    /// Saved listings in save order; ids missing from the catalog are skipped.
    pub fn saved_listings(&self) -> SavedListingsView {
        if let Err(err) = self.saved.reload() {
            warn!(error = %err, "serving cached saved items");
        }
        let ids = self.saved.ids();
        let names = CatalogNames(self.catalog.as_ref());
        let jobs: Vec<ListingCard> = enrich_listings(self.catalog.listings_by_ids(&ids), &names)
            .into_iter()
            .map(|listing| ListingCard::new(listing, true))
            .collect();

        SavedListingsView {
            count: jobs.len(),
            jobs,
        }
    }

    pub fn saved_status(&self, id: JobId) -> SavedStatusView {
        SavedStatusView {
            saved: self.saved.contains(&id),
            count: self.saved.count(),
            job_id: id,
        }
    }

    pub fn toggle_saved(&self, id: JobId) -> SavedStatusView {
        let saved = self.saved.toggle(id.clone());
        SavedStatusView {
            job_id: id,
            saved,
            count: self.saved.count(),
        }
    }

    fn card(&self, listing: EnrichedListing) -> ListingCard {
        let saved = self.saved.contains(&listing.listing.id);
        ListingCard::new(listing, saved)
    }
}
