//! Charge policies and the category lookup table.
//!
//! A [`ChargePolicy`] states what a tool category costs per day and which
//! kinds of day incur that charge. The [`PolicyTable`] maps each category to
//! its policy.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayType;
use crate::error::{RentalError, RentalResult};
use crate::models::ToolCategory;

/// The charge rules for one tool category.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{ChargePolicy, DayType};
/// use tool_rental::models::ToolCategory;
/// use rust_decimal::Decimal;
///
/// let policy = ChargePolicy {
///     category: ToolCategory::Jackhammer,
///     daily_charge: Decimal::new(299, 2),
///     weekday_chargeable: true,
///     weekend_chargeable: false,
///     holiday_chargeable: false,
/// };
/// assert!(policy.is_chargeable(DayType::Weekday));
/// assert!(!policy.is_chargeable(DayType::Weekend));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// The category this policy applies to.
    pub category: ToolCategory,
    /// The amount charged per chargeable day.
    pub daily_charge: Decimal,
    /// Whether Monday to Friday incur a charge.
    pub weekday_chargeable: bool,
    /// Whether Saturday and Sunday incur a charge.
    pub weekend_chargeable: bool,
    /// Whether designated holidays incur a charge.
    pub holiday_chargeable: bool,
}

impl ChargePolicy {
    /// Returns true if a day of the given type incurs the daily charge.
    pub fn is_chargeable(&self, day_type: DayType) -> bool {
        match day_type {
            DayType::Weekday => self.weekday_chargeable,
            DayType::Weekend => self.weekend_chargeable,
            DayType::Holiday => self.holiday_chargeable,
        }
    }
}

/// Immutable mapping from tool category to charge policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    policies: HashMap<ToolCategory, ChargePolicy>,
}

impl PolicyTable {
    /// Builds a table from a list of policies.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidChargePolicy`] if a daily charge is
    /// negative or a category appears twice.
    pub fn new(policies: impl IntoIterator<Item = ChargePolicy>) -> RentalResult<Self> {
        let mut table = HashMap::new();

        for policy in policies {
            if policy.daily_charge < Decimal::ZERO {
                return Err(RentalError::InvalidChargePolicy {
                    category: policy.category,
                    message: format!("daily charge {} is negative", policy.daily_charge),
                });
            }

            let category = policy.category;
            if table.insert(category, policy).is_some() {
                return Err(RentalError::InvalidChargePolicy {
                    category,
                    message: "category defined more than once".to_string(),
                });
            }
        }

        Ok(Self { policies: table })
    }

    /// The standard policies of the rental store.
    ///
    /// | Category   | Daily charge | Weekday | Weekend | Holiday |
    /// |------------|--------------|---------|---------|---------|
    /// | Ladder     | 1.99         | yes     | yes     | no      |
    /// | Chainsaw   | 1.49         | yes     | no      | yes     |
    /// | Jackhammer | 2.99         | yes     | no      | no      |
    pub fn standard() -> Self {
        let policies = [
            (ToolCategory::Ladder, 199, true, true, false),
            (ToolCategory::Chainsaw, 149, true, false, true),
            (ToolCategory::Jackhammer, 299, true, false, false),
        ]
        .into_iter()
        .map(|(category, cents, weekday, weekend, holiday)| {
            let policy = ChargePolicy {
                category,
                daily_charge: Decimal::new(cents, 2),
                weekday_chargeable: weekday,
                weekend_chargeable: weekend,
                holiday_chargeable: holiday,
            };
            (category, policy)
        })
        .collect();

        Self { policies }
    }

    /// Looks up the policy for a category.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownCategory`] if no policy is registered.
    pub fn lookup(&self, category: ToolCategory) -> RentalResult<&ChargePolicy> {
        self.policies
            .get(&category)
            .ok_or(RentalError::UnknownCategory { category })
    }

    /// Number of registered policies.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Returns true if no policy is registered.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::standard()
    }
}
