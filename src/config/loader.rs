//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rental
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::PolicyTable;
use crate::checkout::Inventory;
use crate::error::{RentalError, RentalResult};
use crate::models::Holiday;

use super::types::{HolidaysConfig, PoliciesConfig, RentalConfig, ToolsConfig};

/// Loads and provides access to rental configuration.
///
/// # Directory Structure
///
/// ```text
/// config/tool_rental/
/// ├── policies.yaml   # Charge policy per tool category
/// ├── tools.yaml      # Rentable tool inventory
/// └── holidays.yaml   # Optional designated holiday dates
/// ```
///
/// The policies and tools are validated while loading, so a loaded
/// configuration always builds a valid checkout orchestrator.
///
/// # Example
///
/// ```no_run
/// use tool_rental::checkout::Checkout;
/// use tool_rental::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tool_rental")?;
/// let checkout = Checkout::from_config(&loader);
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RentalConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `policies.yaml` or `tools.yaml` is missing (`ConfigNotFound`)
    /// - any file contains invalid YAML (`ConfigParseError`)
    /// - a policy has a negative daily charge (`InvalidChargePolicy`)
    /// - two tools share a code (`DuplicateToolCode`)
    ///
    /// A missing `holidays.yaml` yields an empty holiday calendar.
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<Self> {
        let path = path.as_ref();

        let policies = Self::load_yaml::<PoliciesConfig>(&path.join("policies.yaml"))?.policies;
        let tools = Self::load_yaml::<ToolsConfig>(&path.join("tools.yaml"))?.tools;

        let holidays_path = path.join("holidays.yaml");
        let holidays = if holidays_path.exists() {
            Self::load_yaml::<HolidaysConfig>(&holidays_path)?.holidays
        } else {
            Vec::new()
        };

        let policies = PolicyTable::new(policies)?;
        let inventory = Inventory::new(tools)?;

        info!(
            path = %path.display(),
            policies = policies.len(),
            tools = inventory.len(),
            holidays = holidays.len(),
            "Loaded rental configuration"
        );

        Ok(Self {
            config: RentalConfig::new(policies, inventory, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rental configuration.
    pub fn config(&self) -> &RentalConfig {
        &self.config
    }

    /// Returns the validated charge policy table.
    pub fn policies(&self) -> &PolicyTable {
        self.config.policies()
    }

    /// Returns the validated tool inventory.
    pub fn inventory(&self) -> &Inventory {
        self.config.inventory()
    }

    /// Returns the configured holidays, oldest first.
    pub fn holidays(&self) -> &[Holiday] {
        self.config.holidays()
    }
}
