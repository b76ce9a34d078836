use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use rpts_core::SchemaError;

/// Error type for rpts-io operations.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input path does not exist or can't be opened.
    #[error("Can't open file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed row or header in a hits file, or malformed family JSON.
    #[error("Can't parse {}{}: {message}", .path.display(), line_suffix(.line))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// The hits schema itself is invalid.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// IO error while reading an opened file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(line) => format!(" (line {})", line),
        None => String::new(),
    }
}

impl LoadError {
    pub(crate) fn parse(path: &Path, line: Option<usize>, message: impl Into<String>) -> Self {
        LoadError::Parse {
            path: path.to_owned(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn not_found(path: &Path, source: io::Error) -> Self {
        LoadError::FileNotFound {
            path: path.to_owned(),
            source,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self, LoadError::FileNotFound { .. })
    }
}

/// Result type alias for rpts-io operations.
pub type Result<T> = std::result::Result<T, LoadError>;
