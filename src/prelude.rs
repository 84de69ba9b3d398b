//! Convenient imports for pbrepair.
//!
//! ```ignore
//! use pbrepair::prelude::*;
//!
//! let mut console = Console::stdout(OutputMode::Human);
//! pbrepair::run(&RepairConfig::new(), Variant::Inspect, &mut console)?;
//! ```

// Runner
pub use crate::repair::{run, Variant};

// Configuration and output
pub use crate::config::{OutputMode, RepairConfig};
pub use crate::console::Console;

// Store
pub use crate::database::Store;

// Error handling
pub use crate::error::{Error, Result};

// Reports
pub use crate::types::{RepairReport, ReportDetails, Table, TableCounts};
