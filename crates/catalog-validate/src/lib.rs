//! Structural validation of product exports.
//!
//! Only column presence is checked; row values are never inspected.

pub mod schema;

pub use schema::{SchemaCheck, check_required_columns, validate_schema};
