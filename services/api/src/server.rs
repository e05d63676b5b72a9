use crate::cli::ServeArgs;
use crate::infra::{build_directory, AppState, CatalogOverrides};
use crate::routes::with_directory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use ghostcheck::config::AppConfig;
use ghostcheck::directory::ListingSource;
use ghostcheck::error::AppError;
use ghostcheck::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    CatalogOverrides {
        companies_csv: args.companies_csv.take(),
        jobs_csv: args.jobs_csv.take(),
        page_size: args.page_size.take(),
    }
    .apply(&mut config)?;

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let directory = Arc::new(build_directory(&config, as_of)?);
    info!(
        listings = directory.catalog().listings().len(),
        companies = directory.catalog().companies().len(),
        saved = directory.saved().count(),
        page_size = directory.page_size(),
        saved_dir = %config.saved.dir.display(),
        "directory loaded"
    );

    let app = with_directory_routes(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ghostcheck directory ready");

    axum::serve(listener, app).await?;
    Ok(())
}
