//! Listing directory: classification, filtering, pagination, company metrics,
//! the catalog provider and the saved-items store.

pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod filter;
pub mod metrics;
pub mod pagination;
pub mod query;
pub mod router;
pub mod saved;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogError, CatalogImportError, CatalogImporter, CatalogNames, InMemoryCatalog,
    ListingSource,
};
pub use classifier::classify_location;
pub use domain::{
    slugify, Company, CompanyId, Compensation, GhostScoreBand, JobId, Listing, RemoteType,
    Seniority, MAX_GHOST_SCORE,
};
pub use filter::{FilterRule, ListingFilter, RemoteFilter};
pub use metrics::{estimated_fill_rate_pct, hiring_activity, AverageGhostScore, CompanyMetrics};
pub use pagination::{paginate, Page, PaginationError, DEFAULT_PAGE_SIZE};
pub use query::{enrich_listings, query_listings, CompanyNames, EnrichedListing, UNKNOWN_COMPANY};
pub use router::directory_router;
pub use saved::{
    FileBackend, InMemoryBackend, SavedBackend, SavedItemsStore, SavedStoreError, SAVED_JOBS_KEY,
};
pub use service::DirectoryService;
