//! # Core models for repeat annotation analysis.
//!
//! This crate holds the typed representation of the two inputs every other `rpts` crate
//! works with:
//!
//! - [`models::HitSet`]: the rows of a Dfam style `.hits` file, one [`models::Hit`] per
//!   repeat annotation, in file order.
//! - [`models::FamilyMap`]: the repeat family metadata keyed by family accession.
//!
//! It also owns the [`schema::HitsSchema`] configuration that describes the column layout
//! of a hits file, and a couple of small utilities for opening plain or gzipped inputs.
//!
pub mod errors;
pub mod models;
pub mod schema;
pub mod utils;

// re-exports
pub use errors::SchemaError;
pub use schema::{Delimiter, HitsSchema};
