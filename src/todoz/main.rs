//! # Todoz CLI
//!
//! The binary is intentionally thin: the interactive session lives in
//! `src/todoz/cli/`, while this file only installs logging, invokes
//! `cli::run()` and turns a fatal error into a non-zero exit.
//!
//! Everything from `api.rs` inward never prints and never exits. The session
//! prints recoverable errors and keeps going; fatal ones bubble up here.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let _cli = cli::args::Cli::parse();
    init_tracing();

    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, quiet unless `RUST_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
