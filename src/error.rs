// Error taxonomy for the quote catalog
// Load failures are fatal at startup; query failures are recoverable

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// LOAD ERRORS
// ============================================================================

/// Which way a required record field is broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFault {
    Missing,
    NotAString,
    Empty,
}

impl fmt::Display for FieldFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFault::Missing => f.write_str("is missing"),
            FieldFault::NotAString => f.write_str("is not a string"),
            FieldFault::Empty => f.write_str("is empty"),
        }
    }
}

/// Errors that abort a catalog load.
///
/// Loading is all-or-nothing: any of these means zero records made it
/// into a usable catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Quotes file missing or unreadable
    #[error("cannot read quotes file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Quotes file is not valid JSON
    #[error("quotes file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Quotes file parses as JSON but has the wrong shape
    #[error("malformed quotes file: {0}")]
    Structure(String),

    /// A single entry has a missing, non-string or empty required field
    #[error("invalid quote at entry {index}: field `{field}` {fault}")]
    Record {
        index: usize,
        field: &'static str,
        fault: FieldFault,
    },
}

// ============================================================================
// QUERY ERRORS
// ============================================================================

/// The catalog loaded successfully but holds zero quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no quotes are loaded")]
pub struct EmptyCatalogError;

/// A category selector resolved to no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no category matches `{selector}`")]
pub struct CategoryNotFoundError {
    /// The user-supplied selector, kept verbatim for display
    pub selector: String,
}

// ============================================================================
// TESTS
// ============================================================================
