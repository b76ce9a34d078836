use std::fmt::{self, Display};
use std::path::PathBuf;

use crate::models::Hit;

///
/// HitSet struct, the in-memory table of a hits file.
///
/// Rows keep the order of the file; a row is identified by its position.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HitSet {
    pub hits: Vec<Hit>,
    /// Names of the columns held in [`Hit::extra`], in order.
    pub extra_columns: Vec<String>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

impl From<Vec<Hit>> for HitSet {
    fn from(hits: Vec<Hit>) -> Self {
        HitSet {
            hits,
            extra_columns: Vec::new(),
            header: None,
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a HitSet {
    type Item = &'a Hit;
    type IntoIter = std::slice::Iter<'a, Hit>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

impl HitSet {
    pub fn iter(&self) -> std::slice::Iter<'_, Hit> {
        self.hits.iter()
    }

    ///
    /// Get number of hits in HitSet
    ///
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    ///
    /// Alignment length of every hit, in row order
    ///
    pub fn ali_lengths(&self) -> Vec<u64> {
        self.hits.iter().map(Hit::ali_length).collect()
    }
}

impl Display for HitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HitSet with {} hits.", self.len())
    }
}
