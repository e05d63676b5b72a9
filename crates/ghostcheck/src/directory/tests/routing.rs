use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use crate::directory::saved::InMemoryBackend;
use crate::directory::InMemoryCatalog;

#[tokio::test]
async fn search_route_applies_query_filters() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/jobs?keywords=engineer&tech=React&remote_type=REMOTE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(ids(&payload, "items"), vec!["job-101", "job-402"]);
    assert_eq!(payload["total_items"], 2);
    assert_eq!(payload["items"][0]["company_name"], "Northwind Labs");
    assert_eq!(payload["items"][0]["remote_type"], "REMOTE");
    assert_eq!(payload["filter"]["tech_stack"][0], "React");
}

#[tokio::test]
async fn search_route_clamps_out_of_range_pages() {
    let response = sample_router()
        .oneshot(Request::get("/api/v1/jobs?page=99").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["page"], 3);
    assert_eq!(payload["total_pages"], 3);
    assert_eq!(ids(&payload, "items"), vec!["job-601", "job-602"]);
    assert_eq!(payload["has_next"], false);
    assert_eq!(payload["has_previous"], true);
}

#[tokio::test]
async fn search_route_accepts_lowercase_remote_type() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/jobs?remote_type=hybrid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(
        ids(&payload, "items"),
        vec!["job-102", "job-202", "job-401", "job-602"]
    );
}

#[tokio::test]
async fn job_handler_returns_not_found_for_unknown_id() {
    let (service, _) = sample_service(5);
    let response = crate::directory::router::job_handler::<InMemoryCatalog, InMemoryBackend>(
        State(Arc::new(service)),
        Path("job-999".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["job_id"], "job-999");
}

#[tokio::test]
async fn job_route_returns_detail_with_description() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/jobs/job-301")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], "job-301");
    assert_eq!(payload["company_slug"], "quarry-co");
    assert!(payload.get("description").is_none());
    let description = payload["full_description"]
        .as_str()
        .expect("description is a string");
    assert!(description.starts_with("Quarry & Co. is hiring a Software Engineer"));
}

#[tokio::test]
async fn company_route_returns_profile_with_metrics() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/companies/lumen-retail")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["company"]["name"], "Lumen Retail");
    assert_eq!(payload["metrics"]["open_roles"], 2);
    assert_eq!(payload["metrics"]["avg_days_posted"], 5);
    assert_eq!(payload["metrics"]["avg_ghost_score"], "5.5");
    assert_eq!(payload["hiring_activity"][0]["job_id"], "job-402");
}

#[tokio::test]
async fn company_route_returns_not_found_for_unknown_slug() {
    let response = sample_router()
        .oneshot(
            Request::get("/api/v1/companies/nobody")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn toggle_route_flips_saved_state() {
    let router = sample_router();

    let first = router
        .clone()
        .oneshot(
            Request::post("/api/v1/saved/job-301/toggle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(first).await;
    assert_eq!(payload["saved"], true);
    assert_eq!(payload["count"], 1);

    let listed = router
        .clone()
        .oneshot(Request::get("/api/v1/saved").body(Body::empty()).unwrap())
        .await
        .expect("route executes");
    let payload = read_json_body(listed).await;
    assert_eq!(ids(&payload, "jobs"), vec!["job-301"]);
    assert_eq!(payload["jobs"][0]["saved"], true);

    let second = router
        .oneshot(
            Request::post("/api/v1/saved/job-301/toggle")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(second).await;
    assert_eq!(payload["saved"], false);
    assert_eq!(payload["count"], 0);
}
