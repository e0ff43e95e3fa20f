//! Human-readable rendering of rental agreements.
//!
//! Formatting lives here, outside the calculation core: dates print as
//! `MM/DD/YY`, currency as `$#,##0.00` and the discount as a whole percent.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::round_to_cents;
use crate::models::RentalAgreement;

/// Renders an agreement as one `Label: value` line per field.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::Checkout;
/// use tool_rental::report::render_agreement;
/// use chrono::NaiveDate;
///
/// let agreement = Checkout::default()
///     .checkout("JAKR", 4, 50, NaiveDate::from_ymd_opt(2020, 7, 2).unwrap())
///     .unwrap();
/// let text = render_agreement(&agreement);
///
/// assert!(text.contains("Check out date: 07/02/20\n"));
/// assert!(text.contains("Discount percent: 50%\n"));
/// ```
pub fn render_agreement(agreement: &RentalAgreement) -> String {
    let lines = [
        ("Tool code", agreement.tool_code.clone()),
        ("Tool type", agreement.category.to_string()),
        ("Tool brand", agreement.brand.clone()),
        ("Rental days", agreement.rental_days.to_string()),
        ("Check out date", format_date(agreement.checkout_date)),
        ("Due date", format_date(agreement.due_date)),
        ("Daily rental charge", format_currency(agreement.daily_charge)),
        ("Charge days", agreement.charge_days.to_string()),
        (
            "Pre-discount charge",
            format_currency(agreement.pre_discount_charge),
        ),
        ("Discount percent", format!("{}%", agreement.discount_percent)),
        ("Discount amount", format_currency(agreement.discount_amount)),
        ("Final charge", format_currency(agreement.final_charge)),
    ];

    let mut out = String::new();
    for (label, value) in lines {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}: {}", label, value);
    }
    out
}

/// Formats a date as `MM/DD/YY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

/// Formats an amount as `$#,##0.00`, with a leading `-` for negatives.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234567.891").unwrap()), "$1,234,567.89");
/// assert_eq!(format_currency(Decimal::from_str("0.5").unwrap()), "$0.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_to_cents(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, cents)
}
