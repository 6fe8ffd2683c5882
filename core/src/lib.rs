//! Shared types for the symbol navigation workspace.
//!
//! The search engine consumes `(ElementId, name, NodeTypeSet)` triples produced by the
//! indexing pipeline; this crate owns those value types plus the persisted app config.

pub mod error;
pub mod types;

pub use error::{Error, Result, ValidationError};
