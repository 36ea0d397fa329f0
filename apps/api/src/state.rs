use std::sync::Arc;

use crate::config::Config;
use crate::document::DocumentTextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document text extractor. Default: NativeTextExtractor.
    pub extractor: Arc<dyn DocumentTextExtractor>,
}
