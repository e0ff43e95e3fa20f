//! Rental request and agreement models.
//!
//! This module contains the [`RentalRequest`] input and the [`RentalAgreement`]
//! produced by a successful checkout.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ToolCategory;

/// The inputs of a single checkout.
///
/// Values are taken as given; range checks happen during checkout so that
/// out-of-range input is reported as a typed error.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalRequest;
/// use chrono::NaiveDate;
///
/// let request = RentalRequest {
///     tool_code: "LADW".to_string(),
///     rental_days: 3,
///     discount_percent: 10,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The code of the tool being rented.
    pub tool_code: String,
    /// Number of calendar days the tool is rented for.
    pub rental_days: i64,
    /// Whole-number discount percent.
    #[serde(default)]
    pub discount_percent: i64,
    /// The day the tool leaves the store.
    pub checkout_date: NaiveDate,
}

/// The billing agreement for one rental.
///
/// All monetary fields carry exactly two decimal places. The agreement
/// satisfies `final_charge == pre_discount_charge - discount_amount` and
/// `due_date == checkout_date + rental_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The code of the rented tool.
    pub tool_code: String,
    /// The category of the rented tool.
    pub category: ToolCategory,
    /// The brand of the rented tool.
    pub brand: String,
    /// Number of rental days.
    pub rental_days: u32,
    /// The checkout date.
    pub checkout_date: NaiveDate,
    /// The last day of the rental period.
    pub due_date: NaiveDate,
    /// Daily charge for the tool category.
    pub daily_charge: Decimal,
    /// Days in the rental period that incur the daily charge.
    pub charge_days: u32,
    /// `charge_days * daily_charge`, rounded half-up to cents.
    pub pre_discount_charge: Decimal,
    /// Whole-number discount percent.
    pub discount_percent: u32,
    /// Discount on the pre-discount charge, rounded half-up to cents.
    pub discount_amount: Decimal,
    /// Amount owed.
    pub final_charge: Decimal,
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::report::render_agreement(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_agreement() -> RentalAgreement {
        RentalAgreement {
            tool_code: "LADW".to_string(),
            category: ToolCategory::Ladder,
            brand: "Werner".to_string(),
            rental_days: 4,
            checkout_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            daily_charge: dec("1.99"),
            charge_days: 4,
            pre_discount_charge: dec("7.96"),
            discount_percent: 20,
            discount_amount: dec("1.59"),
            final_charge: dec("6.37"),
        }
    }

    #[test]
    fn test_deserialize_request_defaults_discount_to_zero() {
        let json = r#"{
            "tool_code": "JAKD",
            "rental_days": 6,
            "checkout_date": "2015-09-03"
        }"#;

        let request: RentalRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tool_code, "JAKD");
        assert_eq!(request.rental_days, 6);
        assert_eq!(request.discount_percent, 0);
        assert_eq!(
            request.checkout_date,
            NaiveDate::from_ymd_opt(2015, 9, 3).unwrap()
        );
    }

    #[test]
    fn test_agreement_serializes_amounts_as_strings() {
        let json = serde_json::to_string(&sample_agreement()).unwrap();
        assert!(json.contains("\"category\":\"ladder\""));
        assert!(json.contains("\"pre_discount_charge\":\"7.96\""));
        assert!(json.contains("\"final_charge\":\"6.37\""));
        assert!(json.contains("\"due_date\":\"2024-07-05\""));
    }

    #[test]
    fn test_agreement_serialization_round_trip() {
        let agreement = sample_agreement();
        let json = serde_json::to_string(&agreement).unwrap();
        let deserialized: RentalAgreement = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, agreement);
    }

    #[test]
    fn test_display_uses_report_layout() {
        let text = sample_agreement().to_string();
        assert!(text.starts_with("Tool code: LADW\n"));
        assert!(text.contains("Final charge: $6.37"));
    }
}
