//! Error types for kaldi-meta

use std::path::PathBuf;

use crate::schema::ToolName;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} override file at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported override file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Sections [{first}] and [{second}] both configure {tool}")]
    DuplicateSection {
        tool: ToolName,
        first: String,
        second: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
