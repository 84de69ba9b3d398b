//! # pbrepair
//!
//! Referential-integrity repair for the `products` / `orders` / `order_items`
//! tables of a PocketBase SQLite store.
//!
//! Two destructive variants and one read-only check:
//!
//! - [`Variant::Selective`] - null every product reference held by
//!   `order_items`, then delete all products
//! - [`Variant::Nuclear`] - delete all order items, orders and products
//! - [`Variant::Inspect`] - count rows and dangling references
//!
//! Each mutation is its own committed transaction; there is no rollback of
//! the run as a whole.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pbrepair::prelude::*;
//!
//! let config = RepairConfig::new().path("pb_data/data.db").auto_backup();
//! let mut console = Console::stdout(config.output_mode());
//! let report = pbrepair::run(&config, Variant::Selective, &mut console)?;
//! ```

#![warn(missing_docs)]

mod config;
mod console;
mod database;
mod error;
mod repair;
mod types;

pub mod prelude;

pub use config::{BackupPolicy, OutputMode, RepairConfig};
pub use console::Console;
pub use database::{Store, DEFAULT_DB_PATH};
pub use error::{Error, Result};
pub use repair::{run, Variant};
pub use types::*;
