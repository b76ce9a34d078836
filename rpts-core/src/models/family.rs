use std::fmt::{self, Display};

use fxhash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

///
/// Metadata of one repeat family, as found in the family metadata file.
///
/// Labels are optional: a record may leave them out or set them to `null`. A label
/// that is not a JSON string is treated as undefined.
/// Keys other than the ones named here are kept untouched in `other`.
///
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Family {
    #[serde(default, deserialize_with = "label_or_none")]
    pub repeat_type_name: Option<String>,
    #[serde(default, deserialize_with = "label_or_none")]
    pub repeat_subtype_name: Option<String>,
    #[serde(default, deserialize_with = "label_or_none")]
    pub classification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clades: Option<Value>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

fn label_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(label) => Ok(Some(label)),
        _ => Ok(None),
    }
}

impl Family {
    pub fn new(repeat_type_name: &str, repeat_subtype_name: &str, classification: &str) -> Self {
        Family {
            repeat_type_name: Some(repeat_type_name.to_string()),
            repeat_subtype_name: Some(repeat_subtype_name.to_string()),
            classification: Some(classification.to_string()),
            ..Default::default()
        }
    }
}

///
/// Repeat families keyed by accession.
///
/// Iteration follows insertion order; lookups by accession are constant time.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyMap {
    entries: Vec<(String, Family)>,
    index: FxHashMap<String, usize>,
}

impl FamilyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FamilyMap {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    ///
    /// Insert a family. A repeated accession replaces the earlier record in place.
    ///
    pub fn insert(&mut self, accession: String, family: Family) {
        match self.index.get(&accession) {
            Some(&i) => self.entries[i].1 = family,
            None => {
                self.index.insert(accession.clone(), self.entries.len());
                self.entries.push((accession, family));
            }
        }
    }

    pub fn get(&self, accession: &str) -> Option<&Family> {
        self.index.get(accession).map(|&i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Family)> {
        self.entries.iter().map(|(acc, family)| (acc.as_str(), family))
    }

    pub fn accessions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(acc, _)| acc.as_str())
    }
}

impl FromIterator<(String, Family)> for FamilyMap {
    fn from_iter<T: IntoIterator<Item = (String, Family)>>(iter: T) -> Self {
        let mut map = FamilyMap::new();
        for (accession, family) in iter {
            map.insert(accession, family);
        }
        map
    }
}

impl Display for FamilyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FamilyMap with {} families.", self.len())
    }
}
