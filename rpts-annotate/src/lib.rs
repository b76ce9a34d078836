//! Join repeat family labels onto repeat annotation hits.
//!
//! The join takes a [`HitSet`](rpts_core::models::HitSet) and a
//! [`FamilyMap`](rpts_core::models::FamilyMap) and returns [`AnnotatedHits`]: the same rows,
//! in the same order, each with its alignment length and the `repeat_type_name` /
//! `repeat_subtype_name` of its family, or [`Enrichment::Missing`] when the accession has
//! no usable family record. Unmatched rows are never dropped, so coverage can be audited
//! afterwards.
//!
//! # Example
//!
//! ```no_run
//! use rpts_annotate::{EnrichWithFamilies, FamilyTable};
//! use rpts_core::HitsSchema;
//! use rpts_io::{load_families, load_hits};
//!
//! let hits = load_hits("hg38.hits", &HitsSchema::default()).unwrap();
//! let families = load_families("repeat_families.json").unwrap();
//!
//! let annotated = hits.enrich(&families);
//! let ltr_hits = annotated.filter_by_repeat_type("LTR");
//! let ltr_families = FamilyTable::from(&families).filter_by_repeat_type("LTR");
//! ```

pub mod annotated;
pub mod enrichment;
pub mod families;
pub mod join;

// re-exports
pub use annotated::{AnnotatedHit, AnnotatedHits};
pub use enrichment::{Enrichment, MISSING_MARKER, MissingReason, TypeKey};
pub use families::{FamilyRow, FamilyTable, family_table, filter_families_by_repeat_type};
pub use join::{EnrichWithFamilies, enrich};
