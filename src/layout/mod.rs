//! # Layout Module
//!
//! Turns the free-form sheet into addressable regions: anchor rows
//! ([`markers`]), one row range per weekday ([`range`]) and the trimmed text
//! of a column inside a range ([`extract`]).
pub mod extract;
pub mod markers;
pub mod range;

use thiserror::Error;

/// Structural problems with a sheet. Fatal for that sheet only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("Remarks column '{0}' not found in header row")]
    MissingRemarksColumn(String),

    #[error("Expected 4 segment rows in remarks column, found {found}")]
    InsufficientSegments { found: usize },

    #[error("Anchor row '{0}' not found")]
    MissingAnchor(String),

    #[error("Anchor rows out of order: {0:?}")]
    OutOfOrder(Vec<usize>),
}
