// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, start logging, run one command.
// - Logs go to stderr so they never mix with the jokes on stdout.

use chuck_cli::{cli::Cli, commands};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = commands::run(&cli, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(code)
}

/// Default level is `warn`, `--verbose` raises it to `debug`, and
/// RUST_LOG overrides both.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
