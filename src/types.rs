use std::path::PathBuf;

use anyhow::Result;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// File extension shared by every input and the output.
pub const EXTENSION: &str = "clang-tidy";

pub const CHECKS_KEY: &str = "Checks";
pub const CHECK_OPTIONS_KEY: &str = "CheckOptions";

/// One `{key, value}` entry of `CheckOptions`.
///
/// The value is kept as a YAML value so `value: 1` and `value: '1'` are
/// written back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckOption {
    pub key: String,
    pub value: Value,
}

impl CheckOption {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        CheckOption {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Running state of a merge over an ordered set of config files.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// Opaque pass-through fields, last writer wins.
    pub fields: Mapping,
    /// Check identifiers in first-seen order.
    pub checks: IndexSet<String>,
    /// Options sorted by key.
    pub options: Vec<CheckOption>,
    /// Inputs that did not exist and were left out.
    pub skipped: Vec<PathBuf>,
}

impl MergedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joined check list in the shape written to disk: one identifier per
    /// line, every entry (including the last) followed by a comma.
    pub fn checks_text(&self) -> String {
        let joined: Vec<&str> = self.checks.iter().map(String::as_str).collect();
        format!("{},", joined.join(",\n"))
    }

    /// Builds the output document: opaque fields first, then `Checks`, then
    /// `CheckOptions` when any option was seen.
    ///
    /// # Errors
    /// Returns an error if an option value cannot be converted to YAML.
    pub fn to_document(&self) -> Result<Mapping> {
        let mut doc = self.fields.clone();
        doc.insert(CHECKS_KEY.into(), Value::String(self.checks_text()));
        if !self.options.is_empty() {
            doc.insert(CHECK_OPTIONS_KEY.into(), serde_yaml::to_value(&self.options)?);
        }
        Ok(doc)
    }
}
