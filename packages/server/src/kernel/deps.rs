//! Server dependencies for domain activities (using traits for testability)
//!
//! Views never reach for a global client: every activity takes `&ServerDeps`
//! and goes through the trait objects held here.

use std::sync::Arc;

use crate::kernel::BaseDocumentStore;

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to activities (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Read-only window record store
    pub store: Arc<dyn BaseDocumentStore>,
}

impl ServerDeps {
    pub fn new(store: Arc<dyn BaseDocumentStore>) -> Self {
        Self { store }
    }
}
