//! Merge per-component clang-tidy configuration files into one.
//!
//! Checks are concatenated and deduplicated in first-seen order,
//! `CheckOptions` are resolved by key with later files winning, and every
//! other top-level field is taken from the last file that sets it.
//!
//! ```no_run
//! use std::path::Path;
//! use tidymerge::formatters::yaml::{EmitOptions, format};
//!
//! let merged = tidymerge::merge::merge_files(Path::new("cfg"), &["core", "drivers"])?;
//! let text = format(&merged.to_document()?, &EmitOptions::clang_tidy())?;
//! print!("{text}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod formatters;
pub mod merge;
pub mod types;
