//! Argument building
//!
//! Merges caller overrides into a tool schema and renders the result in the
//! `--flag=value` syntax Kaldi binaries parse.

use std::borrow::Cow;

use serde::Serialize;

use kaldi_meta::{OverrideSet, ToolConfig, ToolName};

use crate::error::{Error, Result};

/// Fully resolved arguments for one tool invocation.
///
/// Pairs are ordered by flag name and every schema option is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolArguments {
    tool: ToolName,
    pairs: Vec<(String, String)>,
}

/// Merge `overrides` into the defaults of `config`.
///
/// Every override must name an option of the schema and hold a value
/// coercible to that option's type. Options without an override keep their
/// default. Identical inputs always produce identical output.
pub fn build_arguments(config: &ToolConfig, overrides: &OverrideSet) -> Result<ToolArguments> {
    tracing::debug!(
        tool = %config.tool(),
        overrides = overrides.len(),
        "Building tool arguments"
    );

    if let Some(option) = overrides.keys().find(|name| !config.contains(name)) {
        return Err(Error::UnknownOption {
            tool: config.tool(),
            option: option.clone(),
        });
    }

    let mut pairs = Vec::with_capacity(config.len());
    for spec in config.iter() {
        let value = match overrides.get(spec.name()) {
            Some(value) => spec
                .option_type()
                .coerce(value)
                .ok_or_else(|| Error::TypeMismatch {
                    option: spec.name().to_string(),
                    expected: spec.option_type(),
                    received: value.to_string(),
                })?,
            None => spec.default_value().clone(),
        };
        pairs.push((spec.name().to_string(), value.to_string()));
    }

    Ok(ToolArguments {
        tool: config.tool(),
        pairs,
    })
}

impl ToolArguments {
    pub fn tool(&self) -> ToolName {
        self.tool
    }

    /// Binary these arguments are meant for.
    pub fn binary(&self) -> &'static str {
        self.tool.binary()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    /// Value of one flag.
    pub fn get(&self, flag: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == flag)
            .map(|(_, value)| value.as_str())
    }

    /// Pairs whose value differs from the schema default.
    pub fn changed<'a>(&'a self, config: &ToolConfig) -> Vec<(&'a str, &'a str)> {
        self.pairs
            .iter()
            .filter(|(name, value)| {
                config
                    .get(name)
                    .is_none_or(|spec| spec.default_value().to_string() != *value)
            })
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    /// `--flag=value` tokens, one per option.
    pub fn to_flags(&self) -> Vec<String> {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect()
    }

    /// Binary followed by its flags, quoted for a POSIX shell.
    pub fn command_line(&self) -> String {
        let mut tokens = vec![self.binary().to_string()];
        tokens.extend(self.to_flags().iter().map(|t| shell_quote(t).into_owned()));
        tokens.join(" ")
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | ':' | ',' | '+' | '@' | '%')
}

/// Single-quote `token` unless it consists only of shell-safe characters.
fn shell_quote(token: &str) -> Cow<'_, str> {
    if !token.is_empty() && token.chars().all(is_shell_safe) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(format!("'{}'", token.replace('\'', r"'\''")))
    }
}
