//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::roster::LoadOptions;

use super::types::PayrollConfig;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "payroll.yaml";

/// Loads and provides access to payroll settings.
///
/// # File Format
///
/// ```yaml
/// roster_path: staff.txt
/// strict_categories: false
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./payroll.yaml")?;
/// println!("Roster: {}", loader.config().roster_path.display());
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, "Loaded payroll configuration");
        Ok(Self { config })
    }

    /// Loads the explicitly named file, or [`DEFAULT_CONFIG_FILE`] if it
    /// exists in `dir`, or falls back to defaults.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn discover<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> PayrollResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            debug!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    fn parse(content: &str, path: &str) -> PayrollResult<PayrollConfig> {
        // An empty document deserializes as null, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(PayrollConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the settings.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// Returns the roster parsing options implied by the settings.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict_categories: self.config.strict_categories,
        }
    }
}
