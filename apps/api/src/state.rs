use std::sync::Arc;

use minijinja::Environment;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable storage. Default: `PgResumeStore` over the connection pool.
    pub store: Arc<dyn ResumeStore>,
    /// Templates for the server-rendered pages, compiled once at startup.
    pub templates: Arc<Environment<'static>>,
}
