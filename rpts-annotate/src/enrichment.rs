use std::fmt::{self, Display};

use serde::Serialize;

use rpts_core::models::{Family, FamilyMap};

/// Printed in place of a label that could not be looked up.
pub const MISSING_MARKER: &str = "NA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// The accession is not a key of the family map.
    UnknownAccession,
    /// The family exists but leaves its type or subtype undefined.
    IncompleteFamily,
}

///
/// Family labels joined onto a hit.
///
/// Both labels are present together or missing together.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Enrichment {
    Matched {
        repeat_type_name: String,
        repeat_subtype_name: String,
    },
    Missing(MissingReason),
}

impl Enrichment {
    ///
    /// Look an accession up in the family map.
    ///
    pub fn lookup(accession: &str, families: &FamilyMap) -> Self {
        match families.get(accession) {
            Some(family) => Enrichment::from_family(family),
            None => Enrichment::Missing(MissingReason::UnknownAccession),
        }
    }

    pub fn from_family(family: &Family) -> Self {
        match (&family.repeat_type_name, &family.repeat_subtype_name) {
            (Some(type_name), Some(subtype_name)) => Enrichment::Matched {
                repeat_type_name: type_name.clone(),
                repeat_subtype_name: subtype_name.clone(),
            },
            _ => Enrichment::Missing(MissingReason::IncompleteFamily),
        }
    }

    pub fn repeat_type_name(&self) -> Option<&str> {
        match self {
            Enrichment::Matched {
                repeat_type_name, ..
            } => Some(repeat_type_name.as_str()),
            Enrichment::Missing(_) => None,
        }
    }

    pub fn repeat_subtype_name(&self) -> Option<&str> {
        match self {
            Enrichment::Matched {
                repeat_subtype_name,
                ..
            } => Some(repeat_subtype_name.as_str()),
            Enrichment::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Enrichment::Missing(_))
    }

    pub fn type_key(&self) -> TypeKey {
        match self.repeat_type_name() {
            Some(name) => TypeKey::Named(name.to_string()),
            None => TypeKey::Missing,
        }
    }
}

///
/// Key used to partition hits by repeat type, the missing marker included.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKey {
    Named(String),
    Missing,
}

impl TypeKey {
    pub fn matches(&self, enrichment: &Enrichment) -> bool {
        match self {
            TypeKey::Named(name) => enrichment.repeat_type_name() == Some(name.as_str()),
            TypeKey::Missing => enrichment.is_missing(),
        }
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::Named(name) => write!(f, "{}", name),
            TypeKey::Missing => write!(f, "{}", MISSING_MARKER),
        }
    }
}
