//! Configuration loading for the payroll ledger.
//!
//! Settings live in an optional YAML file (by default `payroll.yaml` in the
//! working directory) and control which roster file is used and how strictly
//! it is parsed.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Roster file: {}", loader.config().roster_path.display());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{DEFAULT_ROSTER_PATH, PayrollConfig};
