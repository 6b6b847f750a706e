//! Option schema types for kaldi-opts.
//!
//! This crate defines the vocabulary shared by the registry and the CLI:
//! tool identifiers, option types and values, per-tool option schemas,
//! and the override files callers use to change defaults.

pub mod error;
pub mod overrides;
pub mod schema;

pub use error::{Error, Result};
pub use overrides::{OverrideFile, OverrideSet, merge_overrides};
pub use schema::{OptionSpec, OptionType, OptionValue, ToolCategory, ToolConfig, ToolName};
