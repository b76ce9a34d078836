//! Statistics traits for hits, annotated hits and family tables.

use fxhash::FxHashMap;

use rpts_annotate::{AnnotatedHit, AnnotatedHits, FamilyTable};
use rpts_core::models::HitSet;

use crate::errors::StatsError;
use crate::models::{
    FamilyColumn, Histogram, HitColumn, LengthCount, LengthSummary, PairCount, ValueCount,
};
use crate::utils::{histogram, length_counts, n_unique, summarize_lengths, value_counts};

/// Counts over the categorical columns of a hits table.
pub trait HitTableStatistics {
    /// Occurrences of each value of `column`, most frequent first.
    fn value_counts(&self, column: HitColumn) -> Vec<ValueCount>;

    /// Number of distinct values of `column`.
    fn n_unique(&self, column: HitColumn) -> usize;
}

impl HitTableStatistics for HitSet {
    fn value_counts(&self, column: HitColumn) -> Vec<ValueCount> {
        value_counts(self.iter().map(|hit| Some(column.value(hit))))
    }

    fn n_unique(&self, column: HitColumn) -> usize {
        n_unique(self.iter().map(|hit| Some(column.value(hit))))
    }
}

impl HitTableStatistics for AnnotatedHits {
    fn value_counts(&self, column: HitColumn) -> Vec<ValueCount> {
        value_counts(self.iter().map(|row| Some(column.value(&row.hit))))
    }

    fn n_unique(&self, column: HitColumn) -> usize {
        n_unique(self.iter().map(|row| Some(column.value(&row.hit))))
    }
}

/// Statistics of the alignment length column.
pub trait AlignmentLengthStatistics {
    /// Alignment length of every row, in row order.
    fn ali_length_values(&self) -> Vec<u64>;

    /// Count, bounds, mean, median and standard deviation. `None` for an empty table.
    fn ali_length_summary(&self) -> Option<LengthSummary> {
        summarize_lengths(&self.ali_length_values())
    }

    /// Equal-width histogram of the alignment lengths.
    fn ali_length_histogram(&self, n_bins: usize) -> Result<Histogram, StatsError> {
        histogram(&self.ali_length_values(), n_bins)
    }

    /// Occurrences of each alignment length, most frequent first.
    fn ali_length_counts(&self) -> Vec<LengthCount> {
        length_counts(&self.ali_length_values())
    }
}

impl AlignmentLengthStatistics for HitSet {
    fn ali_length_values(&self) -> Vec<u64> {
        self.ali_lengths()
    }
}

impl AlignmentLengthStatistics for AnnotatedHits {
    fn ali_length_values(&self) -> Vec<u64> {
        self.ali_lengths()
    }
}

/// Statistics that need the joined family labels.
pub trait AnnotatedHitStatistics {
    ///
    /// The `n` longest alignments, shortest of them first. Among equal lengths the
    /// later row ranks higher.
    ///
    fn longest(&self, n: usize) -> Vec<&AnnotatedHit>;

    /// Hits per repeat type, unlabelled hits excluded.
    fn repeat_type_counts(&self) -> Vec<ValueCount>;

    /// Hits per repeat subtype, unlabelled hits excluded.
    fn repeat_subtype_counts(&self) -> Vec<ValueCount>;
}

impl AnnotatedHitStatistics for AnnotatedHits {
    fn longest(&self, n: usize) -> Vec<&AnnotatedHit> {
        let mut rows: Vec<&AnnotatedHit> = self.iter().collect();
        rows.sort_by_key(|row| row.ali_length);
        let skip = rows.len().saturating_sub(n);
        rows.split_off(skip)
    }

    fn repeat_type_counts(&self) -> Vec<ValueCount> {
        value_counts(self.iter().map(AnnotatedHit::repeat_type_name))
    }

    fn repeat_subtype_counts(&self) -> Vec<ValueCount> {
        value_counts(self.iter().map(AnnotatedHit::repeat_subtype_name))
    }
}

/// Counts over the family table.
pub trait FamilyTableStatistics {
    /// Occurrences of each value of `column`, most frequent first; undefined labels excluded.
    fn value_counts(&self, column: FamilyColumn) -> Vec<ValueCount>;

    /// Number of distinct defined values of `column`.
    fn n_unique(&self, column: FamilyColumn) -> usize;

    /// Families per (type, subtype) combination. Families missing either label are skipped.
    fn type_subtype_counts(&self) -> Vec<PairCount>;

    /// Distinct classifications, sorted.
    fn classifications(&self) -> Vec<String>;
}

impl FamilyTableStatistics for FamilyTable {
    fn value_counts(&self, column: FamilyColumn) -> Vec<ValueCount> {
        value_counts(self.iter().map(|row| column.value(row)))
    }

    fn n_unique(&self, column: FamilyColumn) -> usize {
        n_unique(self.iter().map(|row| column.value(row)))
    }

    fn type_subtype_counts(&self) -> Vec<PairCount> {
        let mut counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
        for row in self {
            if let (Some(type_name), Some(subtype_name)) = (
                row.repeat_type_name.as_deref(),
                row.repeat_subtype_name.as_deref(),
            ) {
                *counts.entry((type_name, subtype_name)).or_default() += 1;
            }
        }

        let mut counts: Vec<PairCount> = counts
            .into_iter()
            .map(|((type_name, subtype_name), count)| PairCount {
                repeat_type_name: type_name.to_string(),
                repeat_subtype_name: subtype_name.to_string(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.repeat_type_name.cmp(&b.repeat_type_name))
                .then_with(|| a.repeat_subtype_name.cmp(&b.repeat_subtype_name))
        });
        counts
    }

    fn classifications(&self) -> Vec<String> {
        let mut classifications: Vec<String> = self
            .iter()
            .filter_map(|row| row.classification.clone())
            .collect();
        classifications.sort_unstable();
        classifications.dedup();
        classifications
    }
}
