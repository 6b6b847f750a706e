//! Option value types and per-option specifications

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of a tool option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    String,
    Integer,
    Float,
}

impl OptionType {
    /// Coerce a caller-supplied value to this type.
    ///
    /// Returns `None` when the value cannot represent this type. The returned
    /// value always reports `self` from [`OptionValue::option_type`].
    pub fn coerce(self, value: &OptionValue) -> Option<OptionValue> {
        match (self, value) {
            (OptionType::Integer, OptionValue::Int(i)) => Some(OptionValue::Int(*i)),
            (OptionType::Integer, OptionValue::Str(s)) => {
                s.trim().parse::<i64>().ok().map(OptionValue::Int)
            }
            (OptionType::Integer, OptionValue::Float(_) | OptionValue::Bool(_)) => None,

            (OptionType::Float, OptionValue::Int(i)) => Some(OptionValue::Float(*i as f64)),
            (OptionType::Float, OptionValue::Float(f)) => {
                f.is_finite().then_some(OptionValue::Float(*f))
            }
            (OptionType::Float, OptionValue::Str(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(OptionValue::Float),
            (OptionType::Float, OptionValue::Bool(_)) => None,

            (OptionType::String, OptionValue::Str(s)) => Some(OptionValue::Str(s.clone())),
            (OptionType::String, other) => Some(OptionValue::Str(other.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::String => write!(f, "string"),
            OptionType::Integer => write!(f, "integer"),
            OptionType::Float => write!(f, "float"),
        }
    }
}

/// A scalar option value.
///
/// `Bool` only appears as caller input (e.g. `"--use-energy" = false` in an
/// override file). It renders as the literal `true` / `false` tokens the
/// external tools expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// The option type this value natively represents, if any.
    pub fn option_type(&self) -> Option<OptionType> {
        match self {
            OptionValue::Str(_) => Some(OptionType::String),
            OptionValue::Int(_) => Some(OptionType::Integer),
            OptionValue::Float(_) => Some(OptionType::Float),
            OptionValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(true) => write!(f, "true"),
            OptionValue::Bool(false) => write!(f, "false"),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        OptionValue::Float(x)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

/// Specification of a single command-line option: its flag, default and type.
///
/// The typed constructors guarantee the default matches the declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    name: String,
    #[serde(rename = "type")]
    option_type: OptionType,
    default: OptionValue,
}

impl OptionSpec {
    /// A string option, e.g. `--window-type` defaulting to `povey`.
    pub fn string(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            option_type: OptionType::String,
            default: OptionValue::Str(default.into()),
        }
    }

    /// An integer option.
    pub fn integer(name: impl Into<String>, default: i64) -> Self {
        Self {
            name: name.into(),
            option_type: OptionType::Integer,
            default: OptionValue::Int(default),
        }
    }

    /// A floating point option.
    pub fn float(name: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            option_type: OptionType::Float,
            default: OptionValue::Float(default),
        }
    }

    /// Flag name in the tool's native spelling (e.g. `--frame-length`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    pub fn default_value(&self) -> &OptionValue {
        &self.default
    }

    /// Check that the default value has the declared type.
    pub fn is_consistent(&self) -> bool {
        self.default.option_type() == Some(self.option_type)
    }
}
