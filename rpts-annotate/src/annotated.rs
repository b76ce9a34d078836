use std::fmt::{self, Display};

use fxhash::FxHashSet;
use serde::Serialize;

use rpts_core::models::Hit;

use crate::enrichment::{Enrichment, MISSING_MARKER, MissingReason, TypeKey};

///
/// A hit with its derived columns.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedHit {
    #[serde(flatten)]
    pub hit: Hit,
    /// `|ali-en - ali-st| + 1`, always at least 1
    pub ali_length: u64,
    pub enrichment: Enrichment,
}

impl AnnotatedHit {
    pub fn new(hit: Hit, enrichment: Enrichment) -> Self {
        let ali_length = hit.ali_length();
        AnnotatedHit {
            hit,
            ali_length,
            enrichment,
        }
    }

    pub fn repeat_type_name(&self) -> Option<&str> {
        self.enrichment.repeat_type_name()
    }

    pub fn repeat_subtype_name(&self) -> Option<&str> {
        self.enrichment.repeat_subtype_name()
    }

    pub fn type_key(&self) -> TypeKey {
        self.enrichment.type_key()
    }

    ///
    /// Get the row as a tab separated string: the hit's typed fields, its extra
    /// columns, then `ali_length`, `repeat_type_name` and `repeat_subtype_name`.
    ///
    pub fn as_string(&self) -> String {
        let mut line = self.hit.as_string();
        for value in &self.hit.extra {
            line.push('\t');
            line.push_str(value);
        }
        line.push_str(&format!(
            "\t{}\t{}\t{}",
            self.ali_length,
            self.repeat_type_name().unwrap_or(MISSING_MARKER),
            self.repeat_subtype_name().unwrap_or(MISSING_MARKER),
        ));
        line
    }
}

impl Display for AnnotatedHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// The enriched hits table. Row order is the order of the hits file.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedHits {
    pub rows: Vec<AnnotatedHit>,
    /// Names of the columns held in each hit's `extra` values.
    pub extra_columns: Vec<String>,
}

impl<'a> IntoIterator for &'a AnnotatedHits {
    type Item = &'a AnnotatedHit;
    type IntoIter = std::slice::Iter<'a, AnnotatedHit>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl AnnotatedHits {
    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedHit> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn with_rows(&self, rows: Vec<AnnotatedHit>) -> AnnotatedHits {
        AnnotatedHits {
            rows,
            extra_columns: self.extra_columns.clone(),
        }
    }

    ///
    /// Iterate through rows of one repeat type
    ///
    /// # Arguments
    /// - repeat_type_name: the label to keep, e.g. `LTR`
    ///
    pub fn iter_repeat_type<'a>(
        &'a self,
        repeat_type_name: &'a str,
    ) -> impl Iterator<Item = &'a AnnotatedHit> {
        self.rows
            .iter()
            .filter(move |row| row.repeat_type_name() == Some(repeat_type_name))
    }

    ///
    /// Keep the rows whose `repeat_type_name` equals the label, in their original order.
    /// No match gives an empty table.
    ///
    /// Hits of a family that defines its type but not its subtype carry no labels, so
    /// they are not selected here; `filter_by_type_key(&TypeKey::Missing)` returns them.
    ///
    pub fn filter_by_repeat_type(&self, repeat_type_name: &str) -> AnnotatedHits {
        self.with_rows(self.iter_repeat_type(repeat_type_name).cloned().collect())
    }

    ///
    /// Keep the rows with this type key. `TypeKey::Missing` selects the rows that
    /// could not be enriched.
    ///
    pub fn filter_by_type_key(&self, key: &TypeKey) -> AnnotatedHits {
        self.with_rows(
            self.rows
                .iter()
                .filter(|row| key.matches(&row.enrichment))
                .cloned()
                .collect(),
        )
    }

    ///
    /// Distinct type keys, in order of first appearance.
    ///
    pub fn distinct_type_keys(&self) -> Vec<TypeKey> {
        let mut seen: FxHashSet<TypeKey> = FxHashSet::default();
        let mut keys = Vec::new();
        for row in &self.rows {
            let key = row.type_key();
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
        keys
    }

    pub fn missing_count(&self) -> usize {
        self.rows.iter().filter(|r| r.enrichment.is_missing()).count()
    }

    pub fn missing_count_for(&self, reason: MissingReason) -> usize {
        self.rows
            .iter()
            .filter(|r| r.enrichment == Enrichment::Missing(reason))
            .count()
    }

    ///
    /// Fraction of rows without enrichment. An empty table gives 0.
    ///
    pub fn missing_fraction(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.missing_count() as f64 / self.rows.len() as f64
    }

    pub fn ali_lengths(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.ali_length).collect()
    }

    ///
    /// Column names matching [`AnnotatedHit::as_string`], tab separated.
    ///
    pub fn tsv_header(&self) -> String {
        let mut columns: Vec<&str> = rpts_core::schema::TYPED_COLUMNS.to_vec();
        columns.extend(self.extra_columns.iter().map(String::as_str));
        columns.extend(["ali_length", "repeat_type_name", "repeat_subtype_name"]);
        columns.join("\t")
    }
}

impl Display for AnnotatedHits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnnotatedHits with {} hits, {} without family labels.",
            self.len(),
            self.missing_count()
        )
    }
}
