//! clap command tree and ArgMatches → run configuration.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pbrepair::{OutputMode, RepairConfig, Variant, DEFAULT_DB_PATH};

/// Build the `pbrepair` command.
pub fn build_cli() -> Command {
    Command::new("pbrepair")
        .about("Repair product/order references in a PocketBase store")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .env("PBREPAIR_DB")
                .default_value(DEFAULT_DB_PATH)
                .help("SQLite store to repair"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print a JSON report instead of progress text"),
        )
        .arg(
            Arg::new("backup")
                .long("backup")
                .action(ArgAction::SetTrue)
                .conflicts_with("backup-to")
                .help("Back up the store next to itself before the first step"),
        )
        .arg(
            Arg::new("backup-to")
                .long("backup-to")
                .value_name("PATH")
                .help("Back up the store to PATH before the first step"),
        )
        .subcommand(
            Command::new(Variant::Selective.as_str())
                .about("Null order item product references, then delete all products"),
        )
        .subcommand(
            Command::new(Variant::Nuclear.as_str())
                .about("Delete all order items, orders and products"),
        )
        .subcommand(
            Command::new(Variant::Inspect.as_str())
                .about("Count rows and dangling product references without changing anything"),
        )
}

/// Translate parsed flags into a [`RepairConfig`].
pub fn matches_to_config(matches: &ArgMatches) -> RepairConfig {
    let path = matches
        .get_one::<String>("db")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_DB_PATH);

    let output = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = RepairConfig::new().path(path).output(output);
    if let Some(dest) = matches.get_one::<String>("backup-to") {
        config.backup_to(dest)
    } else if matches.get_flag("backup") {
        config.auto_backup()
    } else {
        config
    }
}

/// The variant named by the subcommand.
pub fn matches_to_variant(matches: &ArgMatches) -> Result<Variant, String> {
    let (name, _) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;
    name.parse()
}
