//! Checkout orchestration for the tool rental engine.
//!
//! This module ties the inventory and the calculation layer together: the
//! [`Checkout`] orchestrator validates a request and returns a complete
//! [`RentalAgreement`](crate::models::RentalAgreement) or a typed error.

mod inventory;
mod orchestrator;

pub use inventory::Inventory;
pub use orchestrator::{Checkout, MAX_DISCOUNT_PERCENT};
