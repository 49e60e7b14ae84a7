use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueHint};
use tracing::Level;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tidymerge",
    version,
    about = "Merge per-component clang-tidy configs into one file",
    override_usage = "tidymerge <DIRECTORY> <BASE>... <OUTPUT>",
    long_about = None
)]
pub struct Args {
    /// Directory holding the `.clang-tidy` inputs; the output is written here too
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: PathBuf,

    /// Input base names (no extension) in precedence order, followed by the output base name.
    /// Every token after DIRECTORY is a name, even one starting with `-`.
    #[arg(
        value_name = "BASE",
        num_args = 2..,
        required = true,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub names: Vec<String>,
}

/// Runs the CLI application.
///
/// Exits the process with status 1 on a usage error.
///
/// # Errors
/// Returns an error if reading, merging or writing fails.
pub fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging();
    run_impl::run_with_args(&args)
}

// Diagnostics only: missing inputs and ignored fields.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
