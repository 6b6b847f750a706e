//! Error types for kaldi-tools

use kaldi_meta::{OptionType, ToolName};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Unknown option {option} for {tool}")]
    UnknownOption { tool: ToolName, option: String },

    #[error("Type mismatch for {option}: expected {expected}, got '{received}'")]
    TypeMismatch {
        option: String,
        expected: OptionType,
        received: String,
    },

    #[error(transparent)]
    Meta(#[from] kaldi_meta::Error),
}
