//! Application state for the HTTP server.

use std::sync::Arc;

use crate::dataset::Dataset;

/// Shared application state passed to all handlers.
///
/// The dataset is immutable for the process lifetime, so handlers read it
/// concurrently without any locking.
#[derive(Clone)]
pub struct AppState {
    /// The launch dataset loaded at startup
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new application state around the loaded dataset.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }
}
