//! boltview binary
//!
//! Lists buckets or bucket entries of a bbolt file.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use boltview::cli::Args;
use boltview::viewer;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse_go_style(std::env::args_os());

    // Logs go to stderr; stdout carries the listing only
    let default_filter = if args.verbose { "warn,boltview=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("boltview v{}", boltview::VERSION);

    let config = args.to_config();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match viewer::run(&config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            drop(out);
            tracing::debug!(error = ?e, "run failed");
            eprintln!("boltview: {}", e);
            ExitCode::FAILURE
        }
    }
}
