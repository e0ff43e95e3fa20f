//! Chargeable-day counting over a rental period.
//!
//! The rental period starts the day after checkout and ends on the due date,
//! inclusive. The checkout date itself is never charged.

use std::iter::successors;

use chrono::NaiveDate;
use tracing::debug;

use super::{ChargePolicy, HolidayCalendar, get_day_type};

/// Counts the days in `(checkout_date, due_date]` that incur a charge.
///
/// Each day is classified with [`get_day_type`] and counted if the policy
/// marks its day type as chargeable. The number of days examined equals
/// `due_date - checkout_date`, so the result never exceeds the rental day
/// count. A due date on or before the checkout date yields zero.
///
/// # Arguments
///
/// * `checkout_date` - The checkout date (excluded from the period)
/// * `due_date` - The last day of the rental (included)
/// * `policy` - The charge policy of the rented tool's category
/// * `holidays` - The calendar of designated holidays
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{count_charge_days, NoHolidays, PolicyTable};
/// use tool_rental::models::ToolCategory;
/// use chrono::NaiveDate;
///
/// let table = PolicyTable::standard();
/// let jackhammer = table.lookup(ToolCategory::Jackhammer).unwrap();
///
/// // Friday checkout, three days: Saturday, Sunday, Monday
/// let checkout = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
/// let due = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
/// assert_eq!(count_charge_days(checkout, due, jackhammer, &NoHolidays), 1);
/// ```
pub fn count_charge_days(
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    policy: &ChargePolicy,
    holidays: &dyn HolidayCalendar,
) -> u32 {
    // `iter_days` stops short of `NaiveDate::MAX`, so step with `succ_opt`.
    // The whole calendar spans fewer than `u32::MAX` days.
    let charge_days = successors(checkout_date.succ_opt(), |date| date.succ_opt())
        .take_while(|date| *date <= due_date)
        .filter(|date| policy.is_chargeable(get_day_type(*date, holidays)))
        .fold(0u32, |count, _| count + 1);

    debug!(
        category = %policy.category,
        %checkout_date,
        %due_date,
        charge_days,
        "Counted charge days"
    );

    charge_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{HolidayList, NoHolidays, PolicyTable};
    use crate::models::ToolCategory;
    use chrono::Days;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn policy(weekday: bool, weekend: bool, holiday: bool) -> ChargePolicy {
        ChargePolicy {
            category: ToolCategory::Ladder,
            daily_charge: Decimal::new(199, 2),
            weekday_chargeable: weekday,
            weekend_chargeable: weekend,
            holiday_chargeable: holiday,
        }
    }

    #[test]
    fn test_all_days_chargeable_counts_every_day() {
        // Monday checkout, Tuesday through Saturday
        let count = count_charge_days(
            make_date("2024-07-01"),
            make_date("2024-07-06"),
            &policy(true, true, false),
            &NoHolidays,
        );
        assert_eq!(count, 5);
    }

    #[test]
    fn test_weekday_only_friday_checkout_over_weekend() {
        // Friday checkout: Saturday, Sunday, Monday
        let count = count_charge_days(
            make_date("2024-07-05"),
            make_date("2024-07-08"),
            &policy(true, false, false),
            &NoHolidays,
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_weekend_only_policy() {
        // Wednesday checkout, Thursday through the following Wednesday
        let count = count_charge_days(
            make_date("2024-07-03"),
            make_date("2024-07-10"),
            &policy(false, true, false),
            &NoHolidays,
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_checkout_date_is_never_charged() {
        // Monday checkout, one day: only Tuesday is examined
        let count = count_charge_days(
            make_date("2024-07-01"),
            make_date("2024-07-02"),
            &policy(true, true, true),
            &NoHolidays,
        );
        assert_eq!(count, 1);

        // Friday checkout, one day: Saturday only, not chargeable
        let count = count_charge_days(
            make_date("2024-07-05"),
            make_date("2024-07-06"),
            &policy(true, false, false),
            &NoHolidays,
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_due_date_not_after_checkout_counts_nothing() {
        let same_day = count_charge_days(
            make_date("2024-07-01"),
            make_date("2024-07-01"),
            &policy(true, true, true),
            &NoHolidays,
        );
        assert_eq!(same_day, 0);

        let reversed = count_charge_days(
            make_date("2024-07-10"),
            make_date("2024-07-01"),
            &policy(true, true, true),
            &NoHolidays,
        );
        assert_eq!(reversed, 0);
    }

    #[test]
    fn test_holiday_flag_inert_without_calendar() {
        let with_holiday_charge = count_charge_days(
            make_date("2024-07-01"),
            make_date("2024-07-15"),
            &policy(true, false, true),
            &NoHolidays,
        );
        let without_holiday_charge = count_charge_days(
            make_date("2024-07-01"),
            make_date("2024-07-15"),
            &policy(true, false, false),
            &NoHolidays,
        );
        assert_eq!(with_holiday_charge, without_holiday_charge);
        assert_eq!(with_holiday_charge, 10);
    }

    #[test]
    fn test_holiday_not_charged_when_flag_off() {
        // Labor Day 2015 is Monday 2015-09-07
        let calendar = HolidayList::from_dates([make_date("2015-09-07")]);
        let count = count_charge_days(
            make_date("2015-09-03"),
            make_date("2015-09-09"),
            &policy(true, false, false),
            &calendar,
        );
        // Fri 4, Tue 8, Wed 9
        assert_eq!(count, 3);
    }

    #[test]
    fn test_holiday_charged_when_flag_on_even_on_weekend() {
        // 2020-07-04 is a Saturday
        let calendar = HolidayList::from_dates([make_date("2020-07-04")]);
        let count = count_charge_days(
            make_date("2020-07-03"),
            make_date("2020-07-05"),
            &policy(true, false, true),
            &calendar,
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_standard_chainsaw_over_observed_holiday() {
        let table = PolicyTable::standard();
        let chainsaw = table.lookup(ToolCategory::Chainsaw).unwrap();
        let calendar = HolidayList::from_dates([make_date("2015-07-03")]);

        // Fri 3 (holiday), Sat 4, Sun 5, Mon 6, Tue 7
        let count = count_charge_days(
            make_date("2015-07-02"),
            make_date("2015-07-07"),
            chainsaw,
            &calendar,
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_span_across_year_boundary() {
        // Tue 2024-12-31 checkout, through Tue 2025-01-07
        let count = count_charge_days(
            make_date("2024-12-31"),
            make_date("2025-01-07"),
            &policy(true, false, false),
            &NoHolidays,
        );
        assert_eq!(count, 5);
    }

    #[test]
    fn test_span_across_leap_day() {
        // 2024-02-28 (Wed) to 2024-03-01 (Fri) passes Thu 2024-02-29
        let count = count_charge_days(
            make_date("2024-02-28"),
            make_date("2024-03-01"),
            &policy(true, true, false),
            &NoHolidays,
        );
        assert_eq!(count, 2);
    }

    #[test]
    fn test_due_date_at_calendar_max_is_counted() {
        let checkout = NaiveDate::MAX - Days::new(5);
        let count = count_charge_days(
            checkout,
            NaiveDate::MAX,
            &policy(true, true, false),
            &NoHolidays,
        );
        assert_eq!(count, 5);
    }

    #[test]
    fn test_checkout_at_calendar_max_counts_nothing() {
        let count = count_charge_days(
            NaiveDate::MAX,
            NaiveDate::MAX,
            &policy(true, true, true),
            &NoHolidays,
        );
        assert_eq!(count, 0);
    }
}
