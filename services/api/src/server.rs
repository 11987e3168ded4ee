use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_listing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use premier_listings::config::AppConfig;
use premier_listings::error::AppError;
use premier_listings::listings::ListingCatalog;
use premier_listings::telemetry;
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
    if let Some(path) = args.catalog.take() {
        config.catalog.listings_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(config.catalog.open()?);
    info!(listings = catalog.listings().len(), "listing catalog ready");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_listing_routes(catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "premier listings service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
