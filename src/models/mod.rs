//! Core data models for the tool rental engine.
//!
//! This module contains the domain models shared by the calculation,
//! checkout and configuration layers.

mod agreement;
mod holiday;
mod tool;

pub use agreement::{RentalAgreement, RentalRequest};
pub use holiday::Holiday;
pub use tool::{Tool, ToolCategory};
