//! Application State

use std::sync::Arc;

use pricing_core::PlanCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Plan catalog, read-only for the process lifetime
    pub catalog: Arc<PlanCatalog>,
}

impl AppState {
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
