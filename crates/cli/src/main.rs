//! pbrepair CLI — repair product/order references in a PocketBase store.
//!
//! `pbrepair [--db PATH] [--json] [--backup | --backup-to PATH] <selective|nuclear|inspect>`
//!
//! Progress goes to stdout; diagnostics (`RUST_LOG`, default `warn`) go to
//! stderr. A failed run prints its error and still exits 0.

mod commands;

use std::process;

use pbrepair::Console;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{build_cli, matches_to_config, matches_to_variant};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let matches = build_cli().get_matches();
    let config = matches_to_config(&matches);
    let variant = match matches_to_variant(&matches) {
        Ok(variant) => variant,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(2);
        }
    };

    let mut console = Console::stdout(config.output_mode());
    // The runner has already printed the error and closed the store.
    if let Err(e) = pbrepair::run(&config, variant, &mut console) {
        debug!(error = %e, "run ended with error");
    }
}
