//! Configuration types for the payroll ledger.
//!
//! This module contains the strongly-typed settings deserialized from the
//! YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

/// Roster file used when neither the configuration nor the command line
/// names one.
pub const DEFAULT_ROSTER_PATH: &str = "staff.txt";

/// Payroll settings.
///
/// Every key is optional; a missing key takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Roster file to load and save.
    pub roster_path: PathBuf,
    /// Reject category strings other than `full-time` and `part-time`
    /// instead of treating them as part-time.
    pub strict_categories: bool,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_PATH),
            strict_categories: false,
        }
    }
}
