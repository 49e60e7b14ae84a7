use std::fs;

use anyhow::{Context, Result, bail};
use tracing::debug;

use tidymerge::formatters::yaml::{self, EmitOptions};
use tidymerge::merge::{config_path, merge_files};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let Some((output, inputs)) = args.names.split_last() else {
        bail!("expected at least one input and an output name");
    };

    let merged = merge_files(&args.directory, inputs)?;
    debug!(
        checks = merged.checks.len(),
        options = merged.options.len(),
        skipped = merged.skipped.len(),
        "merge complete"
    );

    let text = yaml::format(&merged.to_document()?, &EmitOptions::clang_tidy())?;
    let out = config_path(&args.directory, output);
    fs::write(&out, text).with_context(|| format!("write {}", out.display()))?;

    println!("Merged YAML written to {}", out.display());
    Ok(())
}
