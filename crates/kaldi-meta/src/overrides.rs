//! Caller overrides and override files
//!
//! An override set maps flag names to replacement values for one tool
//! invocation. Override files group sets by tool name:
//!
//! ```toml
//! [compute_mfcc]
//! "--frame-length" = 30
//! "--use-energy" = false
//!
//! [decode_lattice]
//! "--beam" = 15
//! ```
//!
//! A section may be named by the canonical tool name or by its binary name
//! (`[compute-mfcc-feats]`). The format is detected from the file extension
//! (`.toml`, `.json`, `.yaml` / `.yml`). Flag names are not validated here;
//! the registry does that against the resolved schema.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{OptionValue, ToolName};

/// Flag name to override value, sorted by flag name.
pub type OverrideSet = BTreeMap<String, OptionValue>;

/// Merge two override layers. Entries in `top` win.
pub fn merge_overrides(base: &OverrideSet, top: &OverrideSet) -> OverrideSet {
    let mut merged = base.clone();
    for (name, value) in top {
        merged.insert(name.clone(), value.clone());
    }
    merged
}

/// Override sets for several tools, as loaded from a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideFile {
    sections: BTreeMap<String, OverrideSet>,
}

impl OverrideFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an override file, choosing the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading override file");

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension.as_str() {
            "toml" => Self::from_toml(&content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Parse TOML text directly.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Set one override for a tool section.
    pub fn set(&mut self, tool: ToolName, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.sections
            .entry(tool.to_string())
            .or_default()
            .insert(name.into(), value.into());
    }

    /// Overrides for one tool; empty when no section names it.
    ///
    /// Fails with [`Error::DuplicateSection`] when two sections name the
    /// same tool under different spellings.
    pub fn overrides_for(&self, tool: ToolName) -> Result<OverrideSet> {
        let mut found: Option<(&str, &OverrideSet)> = None;
        for (section, overrides) in self.sections() {
            if section.parse::<ToolName>().ok() != Some(tool) {
                continue;
            }
            if let Some((first, _)) = found {
                return Err(Error::DuplicateSection {
                    tool,
                    first: first.to_string(),
                    second: section.to_string(),
                });
            }
            found = Some((section, overrides));
        }
        Ok(found.map(|(_, overrides)| overrides.clone()).unwrap_or_default())
    }

    /// Section names as written in the file, sorted.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &OverrideSet)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
