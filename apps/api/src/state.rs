use crate::analysis::pipeline::Researcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Engine plus enrichment collaborators, with the batch limits from `Config`.
    /// Stubbed in router tests.
    pub researcher: Researcher,
}
