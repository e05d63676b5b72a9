use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::ListingSource;
use super::domain::{JobId, MAX_GHOST_SCORE};
use super::filter::{ListingFilter, RemoteFilter};
use super::saved::SavedBackend;
use super::service::DirectoryService;
use super::views::SearchPage;
use crate::error::AppError;

/// Router builder exposing the listing directory over HTTP.
pub fn directory_router<S, B>(service: Arc<DirectoryService<S, B>>) -> Router
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(search_handler::<S, B>))
        .route("/api/v1/jobs/:job_id", get(job_handler::<S, B>))
        .route("/api/v1/companies/:slug", get(company_handler::<S, B>))
        .route("/api/v1/saved", get(saved_list_handler::<S, B>))
        .route("/api/v1/saved/:job_id", get(saved_status_handler::<S, B>))
        .route(
            "/api/v1/saved/:job_id/toggle",
            post(saved_toggle_handler::<S, B>),
        )
        .with_state(service)
}

/// Query-string form of a listing filter. `tech` is comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tech: Option<String>,
    #[serde(default)]
    pub max_ghost_score: Option<i32>,
    #[serde(default)]
    pub remote_type: Option<RemoteFilter>,
    #[serde(default)]
    pub page: Option<i64>,
}

impl SearchParams {
    pub fn filter(&self) -> ListingFilter {
        let tech_stack = self
            .tech
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        ListingFilter {
            keywords: self.keywords.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            tech_stack,
            max_ghost_score: self
                .max_ghost_score
                .unwrap_or(i32::from(MAX_GHOST_SCORE)),
            remote_type: self.remote_type.unwrap_or_default(),
        }
    }
}

pub(crate) async fn search_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, AppError>
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    let filter = params.filter();
    let page = service.search(&filter, params.page.unwrap_or(1))?;
    Ok(Json(page))
}

pub(crate) async fn job_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    match service.job_detail(&JobId(job_id.clone())) {
        Some(detail) => (StatusCode::OK, Json(detail)).into_response(),
        None => {
            let payload = json!({
                "error": "job not found",
                "job_id": job_id,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn company_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    match service.company_profile(&slug) {
        Some(profile) => (StatusCode::OK, Json(profile)).into_response(),
        None => {
            let payload = json!({
                "error": "company not found",
                "slug": slug,
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn saved_list_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
) -> Response
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    (StatusCode::OK, Json(service.saved_listings())).into_response()
}

pub(crate) async fn saved_status_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    (StatusCode::OK, Json(service.saved_status(JobId(job_id)))).into_response()
}

pub(crate) async fn saved_toggle_handler<S, B>(
    State(service): State<Arc<DirectoryService<S, B>>>,
    Path(job_id): Path<String>,
) -> Response
where
    S: ListingSource + 'static,
    B: SavedBackend + 'static,
{
    (StatusCode::OK, Json(service.toggle_saved(JobId(job_id)))).into_response()
}
