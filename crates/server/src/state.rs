use std::sync::Arc;

use aflam_catalog::CatalogStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
}
