//! The sequential cleanup runner.
//!
//! [`run`] opens the store, optionally backs it up, walks the chosen
//! variant's steps in order and closes the store. Any failure along the way,
//! opening included, lands in one catch-all: the error is printed, the store
//! (if it was opened) is closed, and the error is handed back to the caller.
//! Steps already committed stay committed.

mod inspect;
mod nuclear;
mod selective;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::config::RepairConfig;
use crate::console::Console;
use crate::database::Store;
use crate::error::Result;
use crate::types::{RepairReport, ReportDetails};

/// Which cleanup procedure to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Null product references, then delete all products
    Selective,
    /// Delete order items, orders and products outright
    Nuclear,
    /// Count rows and dangling references; change nothing
    Inspect,
}

impl Variant {
    /// Command name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Selective => "selective",
            Variant::Nuclear => "nuclear",
            Variant::Inspect => "inspect",
        }
    }

    /// True if the variant deletes or rewrites rows.
    pub fn is_destructive(&self) -> bool {
        !matches!(self, Variant::Inspect)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "selective" => Ok(Variant::Selective),
            "nuclear" => Ok(Variant::Nuclear),
            "inspect" => Ok(Variant::Inspect),
            other => Err(format!("unknown variant '{}'", other)),
        }
    }
}

/// Run `variant` against the store named by `config`.
///
/// On failure the error has already been written to `console` and the store
/// closed; the returned `Err` is for callers that want to inspect it.
pub fn run<W: Write>(
    config: &RepairConfig,
    variant: Variant,
    console: &mut Console<W>,
) -> Result<RepairReport> {
    info!(variant = %variant, path = %config.db_path().display(), "starting repair");
    let outcome = open_and_apply(config, variant, console);
    match &outcome {
        Ok(_) => info!(variant = %variant, "repair finished"),
        Err(e) => {
            debug!(variant = %variant, error = %e, "repair aborted");
            if let Err(print_err) = console.error(e) {
                warn!(error = %print_err, "failed to report error");
            }
        }
    }
    outcome
}

fn open_and_apply<W: Write>(
    config: &RepairConfig,
    variant: Variant,
    console: &mut Console<W>,
) -> Result<RepairReport> {
    console.line(format!("Opening database: {}", config.db_path().display()))?;
    let mut store = Store::open(config.db_path())?;

    match apply(&mut store, config, variant, console) {
        Ok(report) => {
            store.close()?;
            if variant == Variant::Selective {
                console.section("✅ DATABASE FIX COMPLETE!")?;
            }
            console.report(&report)?;
            Ok(report)
        }
        Err(e) => {
            if let Err(close_err) = store.close() {
                warn!(error = %close_err, "failed to close store after error");
            }
            Err(e)
        }
    }
}

fn apply<W: Write>(
    store: &mut Store,
    config: &RepairConfig,
    variant: Variant,
    console: &mut Console<W>,
) -> Result<RepairReport> {
    let backup = match config.backup_path() {
        Some(dest) if !variant.is_destructive() => {
            info!(dest = %dest.display(), "read-only variant, skipping backup");
            None
        }
        Some(dest) => {
            console.line(format!("Backing up to: {}", dest.display()))?;
            store.backup_to(&dest)?;
            info!(dest = %dest.display(), "backup written");
            console.line("   ✅ Backup written")?;
            Some(dest)
        }
        None => None,
    };

    let details = match variant {
        Variant::Selective => ReportDetails::Selective(selective::run(store, console)?),
        Variant::Nuclear => ReportDetails::Nuclear(nuclear::run(store, console)?),
        Variant::Inspect => ReportDetails::Inspect(inspect::run(store, console)?),
    };

    Ok(RepairReport {
        database: store.path().to_path_buf(),
        backup,
        details,
    })
}
