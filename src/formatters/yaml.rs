use std::fmt::Write as _;

use anyhow::{Result, bail};
use serde_yaml::{Mapping, Value};

use crate::types::CHECKS_KEY;

/// Output knobs for [`format`].
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Top-level keys whose string value is written as a clipped folded
    /// block scalar (`Key: >`), one source line per output line.
    pub folded_keys: Vec<String>,
    /// Write every value inline, never as an anchor/alias pair.
    pub inline_shared: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            folded_keys: Vec::new(),
            inline_shared: true,
        }
    }
}

impl EmitOptions {
    /// Layout used for merged clang-tidy files.
    pub fn clang_tidy() -> Self {
        Self::default().fold(CHECKS_KEY)
    }

    pub fn fold(mut self, key: impl Into<String>) -> Self {
        self.folded_keys.push(key.into());
        self
    }

    fn is_folded(&self, key: &str) -> bool {
        self.folded_keys.iter().any(|k| k == key)
    }
}

/// Renders a flat document in insertion order.
///
/// # Errors
/// Returns an error if a value cannot be serialized, or if shared-node
/// output is requested (values carry no identity to share).
pub fn format(doc: &Mapping, opts: &EmitOptions) -> Result<String> {
    if !opts.inline_shared {
        bail!("anchor/alias output is not supported");
    }
    let mut out = String::new();
    for (key, value) in doc {
        match (key.as_str(), value) {
            (Some(k), Value::String(s)) if opts.is_folded(k) && foldable(s) => {
                push_folded(&mut out, k, s)?;
            }
            _ => {
                let mut single = Mapping::new();
                single.insert(key.clone(), value.clone());
                out.push_str(&serde_yaml::to_string(&single)?);
            }
        }
    }
    Ok(out)
}

// Blank or indented lines would change meaning inside a folded scalar.
fn foldable(s: &str) -> bool {
    !s.is_empty()
        && s
            .lines()
            .all(|l| !l.trim().is_empty() && !l.starts_with([' ', '\t']))
}

fn push_folded(out: &mut String, key: &str, s: &str) -> Result<()> {
    // Keys are user-supplied; let the serializer pick quoting.
    let key = serde_yaml::to_string(&Value::String(key.to_string()))?;
    let _ = writeln!(out, "{}: >", key.trim_end());
    for line in s.lines() {
        let _ = writeln!(out, "  {line}");
    }
    Ok(())
}
