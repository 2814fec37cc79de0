//! Catalog and navigator wiring for the desk frontend (config-driven).

mod app;

pub use app::{DeskApp, EguiSurface};

use portal_core::{Catalog, CatalogResult, PortalConfig, SessionHistory};
use std::sync::Arc;

/// Desk stack: environment config plus the validated catalog it names.
pub struct PortalStack {
    pub config: PortalConfig,
    pub catalog: Arc<Catalog>,
}

/// Loads config from the environment and builds its catalog. Catalog
/// problems (bad file, duplicate ids, unknown category) fail here, before
/// any window opens.
pub fn build_portal() -> CatalogResult<PortalStack> {
    let config = PortalConfig::from_env();
    let catalog = Arc::new(config.load_catalog()?);
    tracing::info!(services = catalog.len(), "portal catalog loaded");
    Ok(PortalStack { config, catalog })
}

/// Session history seeded with the configured startup route, if any.
pub fn session_history(config: &PortalConfig) -> SessionHistory {
    match &config.initial_route {
        Some(route) => SessionHistory::with_initial(route.clone()),
        None => SessionHistory::new(),
    }
}
