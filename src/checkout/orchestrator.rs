//! The checkout orchestrator.
//!
//! Validates a rental request, resolves the tool and its charge policy,
//! computes the due date, counts charge days, calculates the charges and
//! assembles the [`RentalAgreement`].

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use super::Inventory;
use crate::calculation::{
    HolidayCalendar, HolidayList, NoHolidays, PolicyTable, calculate_charges, count_charge_days,
};
use crate::config::ConfigLoader;
use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, RentalRequest};

/// Highest discount percent accepted at checkout.
pub const MAX_DISCOUNT_PERCENT: u32 = 100;

/// Produces rental agreements from checkout requests.
///
/// Holds only immutable data, so one instance can serve concurrent
/// checkouts (wrap it in an `Arc` or clone it; clones share the calendar).
///
/// # Example
///
/// ```
/// use tool_rental::checkout::Checkout;
/// use chrono::NaiveDate;
///
/// let checkout = Checkout::default();
/// let agreement = checkout
///     .checkout("LADW", 4, 20, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
///     .unwrap();
///
/// assert_eq!(agreement.due_date, NaiveDate::from_ymd_opt(2024, 7, 5).unwrap());
/// assert_eq!(agreement.charge_days, 4);
/// assert_eq!(agreement.final_charge.to_string(), "6.37");
/// ```
#[derive(Clone)]
pub struct Checkout {
    inventory: Inventory,
    policies: PolicyTable,
    holidays: Arc<dyn HolidayCalendar>,
}

impl Checkout {
    /// Creates an orchestrator with no designated holidays.
    pub fn new(inventory: Inventory, policies: PolicyTable) -> Self {
        Self {
            inventory,
            policies,
            holidays: Arc::new(NoHolidays),
        }
    }

    /// Replaces the holiday calendar used to classify rental days.
    pub fn with_holidays(mut self, holidays: impl HolidayCalendar + 'static) -> Self {
        self.holidays = Arc::new(holidays);
        self
    }

    /// Builds an orchestrator from loaded configuration.
    ///
    /// The inventory and policy table were validated by
    /// [`ConfigLoader::load`], so this cannot fail.
    pub fn from_config(loader: &ConfigLoader) -> Self {
        let holidays = HolidayList::from(loader.holidays());

        Self::new(loader.inventory().clone(), loader.policies().clone()).with_holidays(holidays)
    }

    /// Returns the tool inventory.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the charge policy table.
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Checks out a tool and computes its rental agreement.
    ///
    /// Inputs are validated before any calculation, in this order:
    /// 1. the tool code must resolve (`ToolNotFound`)
    /// 2. `rental_days` must be at least 1 (`InvalidRentalDayCount`)
    /// 3. `discount_percent` must be within 0..=100 (`InvalidDiscountPercent`)
    ///
    /// # Errors
    ///
    /// Returns the first failed validation, [`RentalError::UnknownCategory`]
    /// if the tool's category has no policy, or [`RentalError::DateOutOfRange`]
    /// if the due date cannot be represented.
    pub fn checkout(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> RentalResult<RentalAgreement> {
        let tool = self.inventory.resolve_tool(tool_code).ok_or_else(|| {
            warn!(tool_code, "Tool not found");
            RentalError::ToolNotFound {
                code: tool_code.to_string(),
            }
        })?;

        if rental_days < 1 {
            warn!(tool_code, rental_days, "Invalid rental day count");
            return Err(RentalError::InvalidRentalDayCount { days: rental_days });
        }

        let discount_percent = u32::try_from(discount_percent)
            .ok()
            .filter(|percent| *percent <= MAX_DISCOUNT_PERCENT)
            .ok_or_else(|| {
                warn!(tool_code, discount_percent, "Invalid discount percent");
                RentalError::InvalidDiscountPercent {
                    percent: discount_percent,
                }
            })?;

        let policy = self.policies.lookup(tool.category)?;
        let (rental_days, due_date) = resolve_due_date(checkout_date, rental_days)?;

        let charge_days = count_charge_days(checkout_date, due_date, policy, self.holidays.as_ref());
        let charges = calculate_charges(charge_days, policy.daily_charge, discount_percent);

        info!(
            tool_code,
            category = %tool.category,
            rental_days,
            %checkout_date,
            %due_date,
            charge_days,
            final_charge = %charges.final_charge,
            "Checkout completed"
        );

        Ok(RentalAgreement {
            tool_code: tool.code.clone(),
            category: tool.category,
            brand: tool.brand.clone(),
            rental_days,
            checkout_date,
            due_date,
            daily_charge: policy.daily_charge,
            charge_days,
            pre_discount_charge: charges.pre_discount_charge,
            discount_percent,
            discount_amount: charges.discount_amount,
            final_charge: charges.final_charge,
        })
    }

    /// Checks out a tool described by a [`RentalRequest`].
    pub fn checkout_request(&self, request: &RentalRequest) -> RentalResult<RentalAgreement> {
        self.checkout(
            &request.tool_code,
            request.rental_days,
            request.discount_percent,
            request.checkout_date,
        )
    }
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(Inventory::standard(), PolicyTable::standard())
    }
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout")
            .field("inventory", &self.inventory)
            .field("policies", &self.policies)
            .finish_non_exhaustive()
    }
}

/// Computes the due date `rental_days` calendar days after checkout.
fn resolve_due_date(checkout_date: NaiveDate, rental_days: i64) -> RentalResult<(u32, NaiveDate)> {
    let out_of_range = || RentalError::DateOutOfRange {
        checkout_date,
        days: rental_days,
    };

    let days = u32::try_from(rental_days).map_err(|_| out_of_range())?;
    let due_date = checkout_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(out_of_range)?;

    Ok((days, due_date))
}
