use std::sync::Arc;

use crate::config::Config;
use crate::export::PageGeometry;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is immutable after startup, so concurrent requests share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OllamaClient`. Tests swap in stubs.
    pub llm: Arc<dyn TextCompletion>,
    pub config: Config,
    /// Page geometry for the PDF export — A4 with the fixed margins and line
    /// metrics the paginator flows text into.
    pub geometry: PageGeometry,
}
