//! Column layout of a hits file.
//!
//! The layout is configuration, never inferred from the data. By default it is the
//! layout written by Dfam's `dfamscan`/`nhmmer` tooling; a different layout can be read
//! from a `toml` or `yaml` file:
//!
//! ```toml
//! delimiter = "whitespace"
//! columns = ["seq_name", "family_acc", "family_name", "strand", "ali-st", "ali-en"]
//! ```
use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

pub const SEQ_NAME: &str = "seq_name";
pub const FAMILY_ACC: &str = "family_acc";
pub const FAMILY_NAME: &str = "family_name";
pub const STRAND: &str = "strand";
pub const ALI_ST: &str = "ali-st";
pub const ALI_EN: &str = "ali-en";

/// Columns every schema has to declare, the ones parsed into typed [`Hit`](crate::models::Hit) fields.
pub const TYPED_COLUMNS: [&str; 6] = [SEQ_NAME, FAMILY_ACC, FAMILY_NAME, STRAND, ALI_ST, ALI_EN];

/// The Dfam `.hits` layout.
pub const DFAM_HITS_COLUMNS: [&str; 15] = [
    "seq_name",
    "family_acc",
    "family_name",
    "bits",
    "e-value",
    "bias",
    "hmm-st",
    "hmm-en",
    "strand",
    "ali-st",
    "ali-en",
    "env-st",
    "env-en",
    "sq-len",
    "kimura_div",
];

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// A single tab between fields. Empty fields are kept.
    #[default]
    Tab,
    /// Any run of spaces or tabs.
    Whitespace,
}

impl Delimiter {
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Tab => line.split('\t').collect(),
            Delimiter::Whitespace => line.split_whitespace().collect(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HitsSchema {
    #[serde(default)]
    pub delimiter: Delimiter,
    pub columns: Vec<String>,
}

///
/// Position of every column of a validated [`HitsSchema`].
///
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    pub seq_name: usize,
    pub family_acc: usize,
    pub family_name: usize,
    pub strand: usize,
    pub ali_st: usize,
    pub ali_en: usize,
    /// Indices of the untyped columns, in schema order.
    pub extra: Vec<usize>,
    pub width: usize,
}

#[derive(Debug)]
pub enum SchemaInputFileType {
    Toml,
    Yaml,
}

impl SchemaInputFileType {
    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(SchemaInputFileType::Toml),
            Some("yaml") | Some("yml") => Ok(SchemaInputFileType::Yaml),
            _ => Err(SchemaError::InvalidFileType),
        }
    }
}

impl Default for HitsSchema {
    fn default() -> Self {
        HitsSchema {
            delimiter: Delimiter::Tab,
            columns: DFAM_HITS_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<&Path> for HitsSchema {
    type Error = SchemaError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file_type = SchemaInputFileType::from_path(path)?;
        let raw = read_to_string(path)?;
        let schema: HitsSchema = match file_type {
            SchemaInputFileType::Toml => toml::from_str(&raw)?,
            SchemaInputFileType::Yaml => serde_yaml::from_str(&raw)?,
        };

        // a schema is only usable once its layout resolves
        schema.layout()?;
        Ok(schema)
    }
}

impl HitsSchema {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>, delimiter: Delimiter) -> Self {
        HitsSchema {
            delimiter,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    ///
    /// Validate the schema and resolve the position of each column.
    ///
    /// Every name in [`TYPED_COLUMNS`] must appear exactly once, and no column may be
    /// repeated.
    ///
    pub fn layout(&self) -> Result<ColumnLayout, SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for column in &self.columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn(column.clone()));
            }
        }

        let position = |name: &'static str| {
            self.columns
                .iter()
                .position(|c| c == name)
                .ok_or(SchemaError::MissingColumn(name))
        };

        let extra = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !TYPED_COLUMNS.contains(&c.as_str()))
            .map(|(i, _)| i)
            .collect();

        Ok(ColumnLayout {
            seq_name: position(SEQ_NAME)?,
            family_acc: position(FAMILY_ACC)?,
            family_name: position(FAMILY_NAME)?,
            strand: position(STRAND)?,
            ali_st: position(ALI_ST)?,
            ali_en: position(ALI_EN)?,
            extra,
            width: self.columns.len(),
        })
    }

    ///
    /// Names of the untyped columns, in schema order.
    ///
    pub fn extra_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| !TYPED_COLUMNS.contains(&c.as_str()))
            .cloned()
            .collect()
    }

    ///
    /// Does a header line (without its leading `#`) name exactly these columns, in order?
    ///
    pub fn matches_header(&self, header: &str) -> bool {
        let fields = self.delimiter.split(header.trim_end());
        fields.len() == self.columns.len()
            && fields
                .iter()
                .zip(self.columns.iter())
                .all(|(field, column)| field.trim() == column)
    }
}
