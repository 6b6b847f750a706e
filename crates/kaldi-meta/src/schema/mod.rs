//! Schema definitions for tools and their options
//!
//! - [`ToolName`] identifies one external binary
//! - [`OptionSpec`] describes one command-line flag (default + type)
//! - [`ToolConfig`] is the complete, ordered option set of one tool

pub mod option;
pub mod tool;

pub use option::{OptionSpec, OptionType, OptionValue};
pub use tool::{ToolCategory, ToolConfig, ToolName};
