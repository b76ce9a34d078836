//! # Loaders for repeat annotation data.
//!
//! Two entry points, one per input:
//!
//! - [`load_hits`] reads a delimited hits file into a [`HitSet`](rpts_core::models::HitSet),
//!   following a [`HitsSchema`](rpts_core::HitsSchema).
//! - [`load_families`] reads the JSON family metadata file into a
//!   [`FamilyMap`](rpts_core::models::FamilyMap).
//!
//! Both either return a complete table or an error; nothing half populated is ever handed
//! back to the caller.
//!
pub mod error;
pub mod families;
pub mod hits;

// re-expose core functions
pub use error::*;
pub use families::*;
pub use hits::*;
