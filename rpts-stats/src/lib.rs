//! Descriptive statistics for repeat annotations.
//!
//! This crate provides the summaries used to explore a hits table and its family
//! metadata:
//!
//! - Value counts and distinct counts for categorical columns (sequence, accession,
//!   family name, strand; repeat type, subtype and classification)
//! - Alignment length summaries (min, max, mean, median, standard deviation) and
//!   equal-width histograms
//! - Repeat type / subtype breakdowns of the enriched table
//!
//! # Example
//!
//! ```no_run
//! use rpts_annotate::EnrichWithFamilies;
//! use rpts_core::HitsSchema;
//! use rpts_io::{load_families, load_hits};
//! use rpts_stats::{AlignmentLengthStatistics, HitColumn, HitTableStatistics};
//!
//! let hits = load_hits("hg38.hits", &HitsSchema::default()).unwrap();
//! let annotated = hits.enrich(&load_families("repeat_families.json").unwrap());
//!
//! let per_strand = annotated.value_counts(HitColumn::Strand);
//! let lengths = annotated.ali_length_summary();
//! let histogram = annotated.ali_length_histogram(256).unwrap();
//! ```

pub mod errors;
pub mod models;
pub mod statistics;
pub mod utils;

// re-exports
pub use errors::StatsError;
pub use models::{
    FamilyColumn, Histogram, HistogramBin, HitColumn, LengthCount, LengthSummary, PairCount,
    ValueCount,
};
pub use statistics::{
    AlignmentLengthStatistics, AnnotatedHitStatistics, FamilyTableStatistics,
    HitTableStatistics,
};
