use serde::Serialize;

use rpts_annotate::FamilyRow;
use rpts_core::models::Hit;

/// Number of rows holding one value of a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Number of families with one (type, subtype) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCount {
    pub repeat_type_name: String,
    pub repeat_subtype_name: String,
    pub count: usize,
}

/// Number of hits with one alignment length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthCount {
    pub ali_length: u64,
    pub count: usize,
}

///
/// Summary of a set of alignment lengths.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSummary {
    /// Number of lengths summarized
    pub count: usize,
    /// Shortest alignment
    pub minimum: u64,
    /// Longest alignment
    pub maximum: u64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (n - 1 denominator); `None` for a single value
    pub std: Option<f64>,
}

/// One equal-width histogram bin, `[lower, upper)`; the last bin also holds `upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Categorical columns of a hits table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitColumn {
    SeqName,
    FamilyAcc,
    FamilyName,
    Strand,
}

impl HitColumn {
    pub const ALL: [HitColumn; 4] = [
        HitColumn::SeqName,
        HitColumn::FamilyAcc,
        HitColumn::FamilyName,
        HitColumn::Strand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HitColumn::SeqName => "seq_name",
            HitColumn::FamilyAcc => "family_acc",
            HitColumn::FamilyName => "family_name",
            HitColumn::Strand => "strand",
        }
    }

    pub fn value<'a>(&self, hit: &'a Hit) -> &'a str {
        match self {
            HitColumn::SeqName => &hit.seq_name,
            HitColumn::FamilyAcc => &hit.family_acc,
            HitColumn::FamilyName => &hit.family_name,
            HitColumn::Strand => hit.strand.as_str(),
        }
    }
}

/// Categorical columns of a family table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyColumn {
    RepeatTypeName,
    RepeatSubtypeName,
    Classification,
}

impl FamilyColumn {
    pub const ALL: [FamilyColumn; 3] = [
        FamilyColumn::RepeatTypeName,
        FamilyColumn::RepeatSubtypeName,
        FamilyColumn::Classification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FamilyColumn::RepeatTypeName => "repeat_type_name",
            FamilyColumn::RepeatSubtypeName => "repeat_subtype_name",
            FamilyColumn::Classification => "classification",
        }
    }

    pub fn value<'a>(&self, row: &'a FamilyRow) -> Option<&'a str> {
        match self {
            FamilyColumn::RepeatTypeName => row.repeat_type_name.as_deref(),
            FamilyColumn::RepeatSubtypeName => row.repeat_subtype_name.as_deref(),
            FamilyColumn::Classification => row.classification.as_deref(),
        }
    }
}
