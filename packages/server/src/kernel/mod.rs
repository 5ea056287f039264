//! Kernel module - server infrastructure and dependencies.

pub mod cosmos_store;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use cosmos_store::{build_document_store, CosmosDocumentStore, UnconfiguredStore};
pub use deps::ServerDeps;
pub use test_dependencies::{FailingDocumentStore, InMemoryDocumentStore, StoreCall};
pub use traits::*;
