//! Monetary computation for rental agreements.
//!
//! Every amount leaving this module is rounded half-up (midpoint away from
//! zero) and carries exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places in every currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// The three amounts on a rental agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Charge before discount.
    pub pre_discount_charge: Decimal,
    /// Discount taken off the pre-discount charge.
    pub discount_amount: Decimal,
    /// Amount owed.
    pub final_charge: Decimal,
}

/// Rounds a value half-up to cents and fixes its scale at two places.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("1.592").unwrap()).to_string(), "1.59");
/// assert_eq!(round_to_cents(Decimal::from_str("1.495").unwrap()).to_string(), "1.50");
/// assert_eq!(round_to_cents(Decimal::from_str("3").unwrap()).to_string(), "3.00");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Computes `charge_days * daily_charge`, rounded to cents.
pub fn pre_discount_charge(charge_days: u32, daily_charge: Decimal) -> Decimal {
    round_to_cents(Decimal::from(charge_days) * daily_charge)
}

/// Computes `pre_discount_charge * discount_percent / 100`, rounded to cents.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::discount_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pre = Decimal::from_str("7.96").unwrap();
/// assert_eq!(discount_amount(pre, 20), Decimal::from_str("1.59").unwrap());
/// ```
pub fn discount_amount(pre_discount_charge: Decimal, discount_percent: u32) -> Decimal {
    round_to_cents(pre_discount_charge * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED)
}

/// Computes `pre_discount_charge - discount_amount`.
///
/// Non-negative whenever the discount came from [`discount_amount`] with a
/// percent of at most 100 and a non-negative pre-discount charge.
pub fn final_charge(pre_discount_charge: Decimal, discount_amount: Decimal) -> Decimal {
    round_to_cents(pre_discount_charge - discount_amount)
}

/// Runs the full charge computation for a rental.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::calculate_charges;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let charges = calculate_charges(4, Decimal::from_str("1.99").unwrap(), 20);
/// assert_eq!(charges.pre_discount_charge.to_string(), "7.96");
/// assert_eq!(charges.discount_amount.to_string(), "1.59");
/// assert_eq!(charges.final_charge.to_string(), "6.37");
/// ```
pub fn calculate_charges(
    charge_days: u32,
    daily_charge: Decimal,
    discount_percent: u32,
) -> ChargeBreakdown {
    let pre_discount_charge = pre_discount_charge(charge_days, daily_charge);
    let discount_amount = discount_amount(pre_discount_charge, discount_percent);
    let final_charge = final_charge(pre_discount_charge, discount_amount);

    ChargeBreakdown {
        pre_discount_charge,
        discount_amount,
        final_charge,
    }
}
