use clap::Parser;
use colored::Colorize;
use shortpath_core::cli::{dispatch, Cli};
use shortpath_core::exit::ShortpathExit;
use tracing_subscriber::EnvFilter;

fn main() -> ShortpathExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch::execute(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ShortpathExit::for_error(&e)
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
