use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::codegen::MAX_INDENT_WIDTH;
use crate::parser::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH};

/// Compiler settings, usually read from a YAML file. Missing keys keep
/// their defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Render both trees alongside the generated code.
    pub dump_trees: bool,
    /// Deepest call-expression nesting the parser accepts.
    pub max_depth: usize,
    /// Spaces per indentation level in generated C.
    pub indent_width: usize,
    /// Name of the generated wrapper function.
    pub entry_point: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dump_trees: false,
            max_depth: DEFAULT_MAX_DEPTH,
            indent_width: 4,
            entry_point: "main".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(raw).context("Parsing compiler config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("Loading {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_depth > 0, "max_depth must be at least 1");
        ensure!(
            self.max_depth <= MAX_SUPPORTED_DEPTH,
            "max_depth {} exceeds the supported maximum of {MAX_SUPPORTED_DEPTH}",
            self.max_depth
        );
        ensure!(
            self.indent_width <= MAX_INDENT_WIDTH,
            "indent_width {} exceeds the supported maximum of {MAX_INDENT_WIDTH}",
            self.indent_width
        );
        ensure!(
            is_c_identifier(&self.entry_point),
            "entry_point '{}' is not a valid C identifier",
            self.entry_point
        );
        Ok(())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
