use chrono::NaiveDate;
use ghostcheck::config::{AppConfig, CatalogSources};
use ghostcheck::directory::{
    CatalogImporter, DirectoryService, FileBackend, InMemoryCatalog, RemoteFilter,
    SavedItemsStore,
};
use ghostcheck::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type Directory = DirectoryService<InMemoryCatalog, FileBackend>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog exports named on the command line, taking precedence over the environment.
#[derive(Debug, Default, Clone)]
pub(crate) struct CatalogOverrides {
    pub(crate) companies_csv: Option<PathBuf>,
    pub(crate) jobs_csv: Option<PathBuf>,
    pub(crate) page_size: Option<usize>,
}

impl CatalogOverrides {
    pub(crate) fn apply(self, config: &mut AppConfig) -> Result<(), AppError> {
        if self.companies_csv.is_some() || self.jobs_csv.is_some() {
            config.catalog.sources = CatalogSources::from_paths(self.companies_csv, self.jobs_csv)?;
        }
        if let Some(page_size) = self.page_size {
            config.catalog.page_size = page_size;
        }
        Ok(())
    }
}

pub(crate) fn load_catalog(
    sources: &CatalogSources,
    as_of: NaiveDate,
) -> Result<InMemoryCatalog, AppError> {
    match sources {
        CatalogSources::Csv { companies, jobs } => {
            info!(companies = %companies.display(), jobs = %jobs.display(), %as_of, "importing catalog");
            Ok(CatalogImporter::from_paths(companies, jobs, as_of)?)
        }
        CatalogSources::Sample => Ok(InMemoryCatalog::sample()),
    }
}

pub(crate) fn build_directory(config: &AppConfig, as_of: NaiveDate) -> Result<Directory, AppError> {
    let catalog = load_catalog(&config.catalog.sources, as_of)?;
    let backend = FileBackend::new(config.saved.dir.clone());
    let saved = SavedItemsStore::open(Arc::new(backend));
    let service = DirectoryService::new(
        Arc::new(catalog),
        Arc::new(saved),
        config.catalog.page_size,
    )?;
    Ok(service)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_remote_filter(raw: &str) -> Result<RemoteFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(RemoteFilter::All),
        "remote" => Ok(RemoteFilter::Remote),
        "hybrid" => Ok(RemoteFilter::Hybrid),
        "onsite" => Ok(RemoteFilter::Onsite),
        _ => Err(format!(
            "'{raw}' is not a work mode (expected all, remote, hybrid or onsite)"
        )),
    }
}

pub(crate) fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(format!("'{raw}' is not a positive page size")),
    }
}
