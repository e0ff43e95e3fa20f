//! Configuration loading for the tool rental engine.
//!
//! This module loads charge policies, the tool inventory and designated
//! holidays from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tool_rental").unwrap();
//! println!("Loaded {} tools", config.inventory().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidaysConfig, PoliciesConfig, RentalConfig, ToolsConfig};
