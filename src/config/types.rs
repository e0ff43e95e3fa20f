//! Configuration file structures.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML files of a rental configuration directory.

use serde::Deserialize;

use crate::calculation::{ChargePolicy, PolicyTable};
use crate::checkout::Inventory;
use crate::models::{Holiday, Tool};

/// Structure of `policies.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    /// One charge policy per tool category.
    pub policies: Vec<ChargePolicy>,
}

/// Structure of `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// The rentable tools.
    pub tools: Vec<Tool>,
}

/// Structure of `holidays.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// Designated holiday dates.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete rental configuration, validated at load.
#[derive(Debug, Clone)]
pub struct RentalConfig {
    policies: PolicyTable,
    inventory: Inventory,
    /// Sorted by date.
    holidays: Vec<Holiday>,
}

impl RentalConfig {
    /// Creates a new RentalConfig from its component parts.
    pub fn new(policies: PolicyTable, inventory: Inventory, holidays: Vec<Holiday>) -> Self {
        let mut sorted_holidays = holidays;
        sorted_holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self {
            policies,
            inventory,
            holidays: sorted_holidays,
        }
    }

    /// Returns the charge policy table.
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Returns the tool inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the configured holidays, oldest first.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}
