mod cli;

fn main() {
    // Usage errors exit inside the runner; everything else lands here.
    if let Err(err) = cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
