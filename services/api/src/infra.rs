use metrics_exporter_prometheus::PrometheusHandle;
use premier_listings::config::{AppConfig, CatalogConfig};
use premier_listings::error::AppError;
use premier_listings::listings::InMemoryListingCatalog;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Opens the catalog named on the command line, falling back to the
/// environment configuration and finally to the sample listings.
pub(crate) fn open_catalog(path: Option<PathBuf>) -> Result<InMemoryListingCatalog, AppError> {
    let config = match path {
        Some(path) => CatalogConfig {
            listings_path: Some(path),
        },
        None => AppConfig::load()?.catalog,
    };

    Ok(config.open()?)
}
