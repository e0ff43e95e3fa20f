//! Tool Rental Charge Engine
//!
//! This crate computes rental agreements for tools: it counts the chargeable
//! days of a rental under the tool category's charge policy, applies a
//! percentage discount, and rounds every amount half-up to the cent.

#![warn(missing_docs)]

pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
