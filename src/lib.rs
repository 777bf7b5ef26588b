//! # Range Search
//!
//! Range-search filtering over cloud resource descriptors.
//!
//! This crate contains pure filtering logic with no I/O dependencies:
//! - A record abstraction for numeric attribute lookup
//! - Range expression parsing (`"4096"`, `"<=4096"`, `"MIN"`, `"MAX"`)
//! - Sequential narrowing over an ordered constraint list
//!
//! The caller materializes the record collection (e.g. a flavor listing
//! fetched from a compute API) and supplies constraints as ordered
//! (attribute, expression) pairs; the engine returns the surviving subset
//! in the original order.
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Record-Agnostic**: Works on any type exposing numeric attributes
//! - **Dependency-Free**: No I/O, networking, or persistence dependencies

pub mod errors;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use errors::{RangeSearchError, Result};
pub use models::{NumericRecord, ResourceInfo};
pub use search::{range_filter, range_search, RangeExpr};
