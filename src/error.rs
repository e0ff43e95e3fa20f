//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a checkout or a configuration load.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ToolCategory;

/// The main error type for the tool rental engine.
///
/// Checkout validation failures, policy lookups and configuration loading
/// all report through this type. None of these errors are retried internally;
/// they describe caller misuse or broken configuration.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::ToolNotFound {
///     code: "ZZZZ".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tool with code 'ZZZZ' not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// The tool code does not resolve to a tool in the inventory.
    #[error("Tool with code '{code}' not found")]
    ToolNotFound {
        /// The tool code that was requested.
        code: String,
    },

    /// The rental day count was below one.
    #[error("Rental day count must be 1 or greater, got {days}")]
    InvalidRentalDayCount {
        /// The rejected day count.
        days: i64,
    },

    /// The discount percent was outside the range 0 to 100.
    #[error("Discount percent must be between 0 and 100, got {percent}")]
    InvalidDiscountPercent {
        /// The rejected discount percent.
        percent: i64,
    },

    /// No charge policy is registered for the tool category.
    #[error("No charge policy registered for category {category}")]
    UnknownCategory {
        /// The category without a policy.
        category: ToolCategory,
    },

    /// The due date falls outside the representable calendar.
    #[error("Due date for checkout on {checkout_date} plus {days} days is out of range")]
    DateOutOfRange {
        /// The checkout date.
        checkout_date: NaiveDate,
        /// The rental day count that overflowed.
        days: i64,
    },

    /// A charge policy carried invalid data.
    #[error("Invalid charge policy for category {category}: {message}")]
    InvalidChargePolicy {
        /// The category of the rejected policy.
        category: ToolCategory,
        /// A description of what made the policy invalid.
        message: String,
    },

    /// Two tools were registered under the same code.
    #[error("Duplicate tool code: {code}")]
    DuplicateToolCode {
        /// The duplicated code.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_displays_code() {
        let error = RentalError::ToolNotFound {
            code: "ABCD".to_string(),
        };
        assert_eq!(error.to_string(), "Tool with code 'ABCD' not found");
    }

    #[test]
    fn test_invalid_rental_day_count_displays_days() {
        let error = RentalError::InvalidRentalDayCount { days: 0 };
        assert_eq!(
            error.to_string(),
            "Rental day count must be 1 or greater, got 0"
        );
    }

    #[test]
    fn test_invalid_discount_percent_displays_percent() {
        let error = RentalError::InvalidDiscountPercent { percent: 101 };
        assert_eq!(
            error.to_string(),
            "Discount percent must be between 0 and 100, got 101"
        );
    }

    #[test]
    fn test_unknown_category_displays_category() {
        let error = RentalError::UnknownCategory {
            category: ToolCategory::Chainsaw,
        };
        assert_eq!(
            error.to_string(),
            "No charge policy registered for category Chainsaw"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_date_and_days() {
        let error = RentalError::DateOutOfRange {
            checkout_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            days: 5,
        };
        assert_eq!(
            error.to_string(),
            "Due date for checkout on 2024-07-01 plus 5 days is out of range"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RentalError::ConfigParseError {
            path: "/config/tools.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/tools.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<RentalError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> RentalResult<()> {
            Err(RentalError::ToolNotFound {
                code: "NONE".to_string(),
            })
        }

        fn propagates_error() -> RentalResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
