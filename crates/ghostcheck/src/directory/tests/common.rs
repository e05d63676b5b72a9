use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::directory::domain::{Company, CompanyId, JobId, Listing};
use crate::directory::saved::{InMemoryBackend, SavedBackend, SavedStoreError};
use crate::directory::{directory_router, DirectoryService, InMemoryCatalog, SavedItemsStore};

pub(super) type SampleService = DirectoryService<InMemoryCatalog, InMemoryBackend>;

pub(super) fn company(id: &str, name: &str, ghost_score: u8) -> Company {
    Company {
        id: CompanyId::new(id),
        name: name.to_string(),
        slug: crate::directory::slugify(name),
        ghost_score,
        logo_url: None,
        website: None,
        description: None,
    }
}

pub(super) fn listing(id: &str, company_id: &str, title: &str, location: &str) -> Listing {
    Listing {
        id: JobId::new(id),
        title: title.to_string(),
        company_id: CompanyId::new(company_id),
        location: location.to_string(),
        tech_stack: vec!["Rust".to_string()],
        salary_min: 100_000,
        salary_max: 120_000,
        days_posted: 5,
        ghost_score: 5,
        red_flags: Vec::new(),
        green_flags: Vec::new(),
        seniority: None,
        description: None,
        application_url: None,
    }
}

pub(super) fn sample_service(page_size: usize) -> (SampleService, InMemoryBackend) {
    let backend = InMemoryBackend::default();
    let store = Arc::new(SavedItemsStore::open(Arc::new(backend.clone())));
    let service = DirectoryService::new(Arc::new(InMemoryCatalog::sample()), store, page_size)
        .expect("page size is positive");
    (service, backend)
}

pub(super) fn sample_router() -> Router {
    let (service, _) = sample_service(5);
    directory_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn ids(payload: &Value, field: &str) -> Vec<String> {
    payload[field]
        .as_array()
        .expect("array field")
        .iter()
        .map(|item| item["id"].as_str().expect("id field").to_string())
        .collect()
}

/// Backend that accepts reads but refuses every write.
#[derive(Default)]
pub(super) struct ReadOnlyBackend {
    pub(super) inner: InMemoryBackend,
}

impl SavedBackend for ReadOnlyBackend {
    fn read(&self, key: &str) -> Result<Option<String>, SavedStoreError> {
        self.inner.read(key)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), SavedStoreError> {
        Err(SavedStoreError::Unavailable("quota exceeded".to_string()))
    }
}

/// Backend whose reads always fail.
pub(super) struct OfflineBackend;

impl SavedBackend for OfflineBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, SavedStoreError> {
        Err(SavedStoreError::Unavailable("storage offline".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), SavedStoreError> {
        Err(SavedStoreError::Unavailable("storage offline".to_string()))
    }
}
