// Quote Generator - Core Library
// Exposes the catalog, record model and errors for use in the CLI and tests

pub mod catalog;
pub mod error;
pub mod quote;

// Re-export commonly used types
pub use catalog::{Catalog, CategorySelector};
pub use error::{CategoryNotFoundError, EmptyCatalogError, FieldFault, LoadError};
pub use quote::{capitalize, Quote};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
