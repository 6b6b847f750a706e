//! Tool identifiers and per-tool option schemas
//!
//! Each [`ToolName`] maps to one external Kaldi binary. A [`ToolConfig`]
//! holds the full option set of a tool, keyed by flag name. Iteration is
//! always lexicographic by flag so that anything derived from it is stable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::OptionSpec;
use crate::error::Error;

/// Tool category for filtering and organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Feature extractors (MFCC, filterbank, PLP, spectrogram)
    Feature,
    /// Lattice decoders
    Decoder,
}

impl FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feature" | "features" => Ok(ToolCategory::Feature),
            "decoder" | "decode" => Ok(ToolCategory::Decoder),
            _ => Err(format!("unknown category '{s}' (valid: feature, decoder)")),
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolCategory::Feature => write!(f, "feature"),
            ToolCategory::Decoder => write!(f, "decoder"),
        }
    }
}

/// Identifier of a supported external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    ComputeMfcc,
    ComputeFbank,
    ComputePlp,
    ComputeSpectrogram,
    DecodeLattice,
}

impl ToolName {
    /// Every supported tool, in declaration order.
    pub const ALL: [ToolName; 5] = [
        ToolName::ComputeMfcc,
        ToolName::ComputeFbank,
        ToolName::ComputePlp,
        ToolName::ComputeSpectrogram,
        ToolName::DecodeLattice,
    ];

    /// Canonical name, e.g. `compute_mfcc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::ComputeMfcc => "compute_mfcc",
            ToolName::ComputeFbank => "compute_fbank",
            ToolName::ComputePlp => "compute_plp",
            ToolName::ComputeSpectrogram => "compute_spectrogram",
            ToolName::DecodeLattice => "decode_lattice",
        }
    }

    /// Name of the Kaldi binary the options are passed to.
    pub fn binary(&self) -> &'static str {
        match self {
            ToolName::ComputeMfcc => "compute-mfcc-feats",
            ToolName::ComputeFbank => "compute-fbank-feats",
            ToolName::ComputePlp => "compute-plp-feats",
            ToolName::ComputeSpectrogram => "compute-spectrogram-feats",
            ToolName::DecodeLattice => "latgen-faster-mapped",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolName::DecodeLattice => ToolCategory::Decoder,
            _ => ToolCategory::Feature,
        }
    }
}

impl FromStr for ToolName {
    type Err = Error;

    /// Accepts the canonical name or the binary name.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|t| t.as_str() == s || t.binary() == s)
            .ok_or_else(|| Error::UnknownTool {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete option schema of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolConfig {
    tool: ToolName,
    options: BTreeMap<String, OptionSpec>,
}

impl ToolConfig {
    /// Build a schema from a list of option specs.
    ///
    /// A later spec with the same flag name replaces an earlier one.
    pub fn new(tool: ToolName, options: impl IntoIterator<Item = OptionSpec>) -> Self {
        let options = options
            .into_iter()
            .map(|spec| (spec.name().to_string(), spec))
            .collect();
        Self { tool, options }
    }

    pub fn tool(&self) -> ToolName {
        self.tool
    }

    /// Look up one option by flag name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterate over options sorted by flag name.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }

    /// Flag names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.options.keys().map(|k| k.as_str()).collect()
    }
}
