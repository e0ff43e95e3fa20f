//! Calculation logic for the tool rental engine.
//!
//! This module contains the charge policy table, day classification,
//! chargeable-day counting over a rental period, and the monetary computation
//! of pre-discount charge, discount and final charge.

mod charge_days;
mod charges;
mod day_detection;
mod policy;

pub use charge_days::count_charge_days;
pub use charges::{
    CURRENCY_DECIMAL_PLACES, ChargeBreakdown, calculate_charges, discount_amount, final_charge,
    pre_discount_charge, round_to_cents,
};
pub use day_detection::{DayType, HolidayCalendar, HolidayList, NoHolidays, get_day_type};
pub use policy::{ChargePolicy, PolicyTable};
