use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::types::{CHECK_OPTIONS_KEY, CHECKS_KEY, CheckOption, EXTENSION, MergedConfig};

/// Splits a comma-separated check list into trimmed, non-empty identifiers.
pub fn parse_checks(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Overlays `new` on `existing` (later key wins) and returns the result
/// sorted by key.
pub fn merge_check_options(existing: &[CheckOption], new: &[CheckOption]) -> Vec<CheckOption> {
    let mut by_key: BTreeMap<&str, &Value> = existing
        .iter()
        .map(|o| (o.key.as_str(), &o.value))
        .collect();
    for opt in new {
        by_key.insert(opt.key.as_str(), &opt.value);
    }
    by_key
        .into_iter()
        .map(|(k, v)| CheckOption::new(k, v.clone()))
        .collect()
}

/// `<dir>/<base>.clang-tidy`
pub fn config_path(dir: &Path, base: &str) -> PathBuf {
    dir.join(format!("{base}.{EXTENSION}"))
}

/// Parses one config file body. An empty document is an empty mapping.
///
/// # Errors
/// Returns an error if the text is not YAML or its root is not a mapping.
pub fn parse_document(text: &str) -> Result<Mapping> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(m) => Ok(m),
        other => bail!("top-level value is not a mapping: {}", kind(&other)),
    }
}

/// Merges `<dir>/<name>.clang-tidy` for every name, in order. Names whose file
/// does not exist are logged and skipped.
///
/// # Errors
/// Returns an error if an existing file cannot be read or is malformed.
pub fn merge_files<S: AsRef<str>>(dir: &Path, names: &[S]) -> Result<MergedConfig> {
    let mut merged = MergedConfig::new();
    for name in names {
        merged.add_file(&config_path(dir, name.as_ref()))?;
    }
    Ok(merged)
}

impl MergedConfig {
    /// Reads and folds one file into the running merge.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn add_file(&mut self, path: &Path) -> Result<()> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if is_missing(&err) => {
                warn!("{} does not exist, skipping", path.display());
                self.skipped.push(path.to_path_buf());
                return Ok(());
            }
            Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
        };
        let doc = parse_document(&text).with_context(|| format!("parse {}", path.display()))?;
        debug!(fields = doc.len(), "merging {}", path.display());
        self.add_document(doc)
            .with_context(|| format!("merge {}", path.display()))
    }

    /// Folds an already parsed document into the running merge.
    ///
    /// # Errors
    /// Returns an error if `Checks` is not a scalar or a `CheckOptions`
    /// entry lacks `key` or `value`.
    pub fn add_document(&mut self, doc: Mapping) -> Result<()> {
        for (key, value) in doc {
            match key.as_str() {
                Some(CHECKS_KEY) => {
                    let raw = scalar_text(&value)?;
                    self.checks.extend(parse_checks(raw.as_deref()));
                }
                Some(CHECK_OPTIONS_KEY) => {
                    if !value.is_sequence() {
                        warn!("{CHECK_OPTIONS_KEY} is a {}, not a list; ignoring", kind(&value));
                        continue;
                    }
                    let new: Vec<CheckOption> = serde_yaml::from_value(value)
                        .with_context(|| format!("decode {CHECK_OPTIONS_KEY}"))?;
                    self.options = merge_check_options(&self.options, &new);
                }
                _ => {
                    self.fields.insert(key, value);
                }
            }
        }
        Ok(())
    }
}

// Only a missing path (or a missing parent directory) is skippable.
fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

// `false`, `0` and null all mean "no checks".
fn scalar_text(value: &Value) -> Result<Option<String>> {
    Ok(match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => bail!("{CHECKS_KEY} must be a string, found a {}", kind(other)),
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
