//! Tool registry storage

use std::collections::BTreeMap;
use std::sync::LazyLock;

use kaldi_meta::{OverrideFile, OverrideSet, ToolCategory, ToolConfig, ToolName};

use crate::arguments::{ToolArguments, build_arguments};
use crate::error::{Error, Result};

static BUILTINS: LazyLock<ToolConfigRegistry> = LazyLock::new(ToolConfigRegistry::with_builtins);

/// Central registry of tool option schemas.
///
/// Provides lookup by name, filtering by category, and argument building.
/// The builtin registry returned by [`ToolConfigRegistry::global`] is built
/// once and never mutated, so it can be shared across threads freely.
#[derive(Debug, Clone)]
pub struct ToolConfigRegistry {
    tools: BTreeMap<ToolName, ToolConfig>,
}

impl ToolConfigRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for config in super::builtins::builtin_configs() {
            registry.register(config);
        }
        registry
    }

    /// The process-wide builtin registry.
    pub fn global() -> &'static Self {
        &BUILTINS
    }

    /// Register a schema, replacing any previous one for the same tool.
    pub fn register(&mut self, config: ToolConfig) {
        self.tools.insert(config.tool(), config);
    }

    /// Get a schema by tool identifier.
    pub fn get(&self, tool: ToolName) -> Option<&ToolConfig> {
        self.tools.get(&tool)
    }

    /// Resolve a tool name (canonical or binary spelling) to its schema.
    pub fn resolve(&self, name: &str) -> Result<&ToolConfig> {
        let unknown = || Error::UnknownTool {
            name: name.to_string(),
        };
        let tool: ToolName = name.parse().map_err(|_| unknown())?;
        let config = self.get(tool).ok_or_else(unknown)?;
        tracing::debug!(%tool, options = config.len(), "Resolved tool schema");
        Ok(config)
    }

    /// Resolve `name` and build its argument list in one step.
    pub fn build(&self, name: &str, overrides: &OverrideSet) -> Result<ToolArguments> {
        build_arguments(self.resolve(name)?, overrides)
    }

    /// Check every section of an override file against the registry.
    ///
    /// Fails on the first section that does not name a tool, that names a
    /// tool another section already configures, or whose entries would not
    /// build. Entries are read back through [`OverrideFile::overrides_for`],
    /// so a file that validates applies exactly what was checked.
    pub fn validate_file(&self, file: &OverrideFile) -> Result<()> {
        for (section, _) in file.sections() {
            let config = self.resolve(section)?;
            build_arguments(config, &file.overrides_for(config.tool())?)?;
        }
        Ok(())
    }

    /// Check if a tool is registered.
    pub fn contains(&self, tool: ToolName) -> bool {
        self.tools.contains_key(&tool)
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all registered tools (sorted by name).
    pub fn list(&self) -> Vec<ToolName> {
        let mut tools: Vec<_> = self.tools.keys().copied().collect();
        tools.sort_by_key(|t| t.as_str());
        tools
    }

    /// List tools by category (sorted by name).
    pub fn by_category(&self, cat: ToolCategory) -> Vec<ToolName> {
        self.list()
            .into_iter()
            .filter(|t| t.category() == cat)
            .collect()
    }

    /// Iterate over all schemas.
    pub fn iter(&self) -> impl Iterator<Item = &ToolConfig> {
        self.tools.values()
    }
}

impl Default for ToolConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}
