mod parser;
mod sample;

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{Company, CompanyId, JobId, Listing, MAX_GHOST_SCORE};
use super::query::CompanyNames;

/// Read-only provider of the listing and company snapshot.
///
/// Lookups never fail: unknown identifiers yield `None` or an empty collection.
pub trait ListingSource: Send + Sync {
    fn listings(&self) -> &[Listing];
    fn companies(&self) -> &[Company];
    fn company(&self, id: &CompanyId) -> Option<&Company>;
    fn listing(&self, id: &JobId) -> Option<&Listing>;
    fn company_by_slug(&self, slug: &str) -> Option<&Company>;

    /// Listings for the requested ids, in request order. Unknown ids are skipped.
    fn listings_by_ids(&self, ids: &[JobId]) -> Vec<&Listing> {
        ids.iter().filter_map(|id| self.listing(id)).collect()
    }

    fn listings_for_company(&self, id: &CompanyId) -> Vec<&Listing> {
        self.listings()
            .iter()
            .filter(|listing| &listing.company_id == id)
            .collect()
    }
}

/// Snapshot held in memory with id and slug indexes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    companies: Vec<Company>,
    listings: Vec<Listing>,
    company_index: HashMap<CompanyId, usize>,
    slug_index: HashMap<String, usize>,
    listing_index: HashMap<JobId, usize>,
}

impl InMemoryCatalog {
    pub fn new(companies: Vec<Company>, listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut company_index = HashMap::with_capacity(companies.len());
        let mut slug_index = HashMap::with_capacity(companies.len());
        for (position, company) in companies.iter().enumerate() {
            if company.id.0.trim().is_empty() {
                return Err(CatalogError::MissingId { kind: "company" });
            }
            if company.ghost_score > MAX_GHOST_SCORE {
                return Err(CatalogError::GhostScoreOutOfRange {
                    id: company.id.0.clone(),
                    score: company.ghost_score,
                });
            }
            if company_index.insert(company.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCompany(company.id.clone()));
            }
            if let Some(first) = slug_index.insert(company.slug.clone(), position) {
                return Err(CatalogError::DuplicateSlug {
                    slug: company.slug.clone(),
                    first: companies[first].id.clone(),
                    second: company.id.clone(),
                });
            }
        }

        let mut listing_index = HashMap::with_capacity(listings.len());
        for (position, listing) in listings.iter().enumerate() {
            if listing.id.0.trim().is_empty() {
                return Err(CatalogError::MissingId { kind: "listing" });
            }
            if listing.ghost_score > MAX_GHOST_SCORE {
                return Err(CatalogError::GhostScoreOutOfRange {
                    id: listing.id.0.clone(),
                    score: listing.ghost_score,
                });
            }
            if listing_index.insert(listing.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateListing(listing.id.clone()));
            }
        }

        Ok(Self {
            companies,
            listings,
            company_index,
            slug_index,
            listing_index,
        })
    }

    /// Built-in demo snapshot used when no CSV export is configured.
    pub fn sample() -> Self {
        let (companies, listings) = sample::dataset();
        match Self::new(companies, listings) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(error = %err, "built-in sample catalog is invalid; starting empty");
                Self::default()
            }
        }
    }

    /// Map of company id to display name.
    pub fn company_names(&self) -> HashMap<CompanyId, String> {
        self.companies
            .iter()
            .map(|company| (company.id.clone(), company.name.clone()))
            .collect()
    }

    /// Listings whose company reference does not resolve.
    pub fn dangling_listings(&self) -> Vec<&JobId> {
        self.listings
            .iter()
            .filter(|listing| !self.company_index.contains_key(&listing.company_id))
            .map(|listing| &listing.id)
            .collect()
    }
}

impl ListingSource for InMemoryCatalog {
    fn listings(&self) -> &[Listing] {
        &self.listings
    }

    fn companies(&self) -> &[Company] {
        &self.companies
    }

    fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.company_index
            .get(id)
            .and_then(|position| self.companies.get(*position))
    }

    fn listing(&self, id: &JobId) -> Option<&Listing> {
        self.listing_index
            .get(id)
            .and_then(|position| self.listings.get(*position))
    }

    fn company_by_slug(&self, slug: &str) -> Option<&Company> {
        self.slug_index
            .get(slug)
            .and_then(|position| self.companies.get(*position))
    }
}

/// Resolves company names through any listing source.
pub struct CatalogNames<'a, S: ?Sized>(pub &'a S);

impl<S: ListingSource + ?Sized> CompanyNames for CatalogNames<'_, S> {
    fn company_name(&self, id: &CompanyId) -> Option<&str> {
        self.0.company(id).map(|company| company.name.as_str())
    }
}

/// Snapshot validation failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} row is missing an id")]
    MissingId { kind: &'static str },
    #[error("duplicate company id {0}")]
    DuplicateCompany(CompanyId),
    #[error("duplicate listing id {0}")]
    DuplicateListing(JobId),
    #[error("companies {first} and {second} share the slug {slug:?}")]
    DuplicateSlug {
        slug: String,
        first: CompanyId,
        second: CompanyId,
    },
    #[error("ghost score {score} for {id} exceeds {}", MAX_GHOST_SCORE)]
    GhostScoreOutOfRange { id: String, score: u8 },
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Catalog(CatalogError),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::Catalog(err) => write!(f, "catalog snapshot rejected: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Catalog(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<CatalogError> for CatalogImportError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

/// Loads a catalog snapshot from company and job CSV exports.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        companies_path: P,
        jobs_path: Q,
        as_of: NaiveDate,
    ) -> Result<InMemoryCatalog, CatalogImportError> {
        let companies = std::fs::File::open(companies_path)?;
        let jobs = std::fs::File::open(jobs_path)?;
        Self::from_readers(companies, jobs, as_of)
    }

    /// `as_of` anchors `Posted On` dates when a row has no explicit `Days Posted`.
    pub fn from_readers<C: Read, J: Read>(
        companies: C,
        jobs: J,
        as_of: NaiveDate,
    ) -> Result<InMemoryCatalog, CatalogImportError> {
        let companies = parser::parse_companies(companies)?;
        let listings = parser::parse_listings(jobs, as_of)?;
        let catalog = InMemoryCatalog::new(companies, listings)?;

        let dangling = catalog.dangling_listings().len();
        let distinct_companies: HashSet<&CompanyId> = catalog
            .listings()
            .iter()
            .map(|listing| &listing.company_id)
            .collect();
        info!(
            companies = catalog.companies().len(),
            listings = catalog.listings().len(),
            referenced_companies = distinct_companies.len(),
            dangling,
            "catalog imported"
        );

        Ok(catalog)
    }
}
