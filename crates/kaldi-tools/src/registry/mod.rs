//! Tool option registry
//!
//! Builtin schemas are defined once in [`builtins`] and served from a
//! process-wide immutable [`ToolConfigRegistry`].

mod builtins;
mod store;

pub use builtins::{BUILTIN_COUNT, builtin_configs};
pub use store::ToolConfigRegistry;
