//! Day classification for charge-day counting.
//!
//! This module determines the [`DayType`] (weekday, weekend, holiday) of a
//! calendar date. Holidays come from a [`HolidayCalendar`] supplied by the
//! caller; the engine itself never derives holiday dates.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Holiday;

/// The kind of day a rental date falls on.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
    /// A designated holiday, whatever its day of the week.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Source of designated holiday dates.
///
/// Implementations must be read-only after construction so a single
/// calendar can serve concurrent checkouts.
pub trait HolidayCalendar: Send + Sync {
    /// Returns true if `date` is a designated holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// A calendar with no holidays.
///
/// Every date classifies as a weekday or a weekend day, so the holiday flag
/// of a charge policy never takes effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// A calendar backed by an explicit list of holiday dates.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{HolidayCalendar, HolidayList};
/// use chrono::NaiveDate;
///
/// let observed = NaiveDate::from_ymd_opt(2015, 7, 3).unwrap();
/// let calendar = HolidayList::from_dates([observed]);
/// assert!(calendar.is_holiday(observed));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2015, 7, 4).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayList {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayList {
    /// Builds a calendar from bare dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the calendar has no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl From<&[Holiday]> for HolidayList {
    fn from(holidays: &[Holiday]) -> Self {
        Self::from_dates(holidays.iter().map(|h| h.date))
    }
}

impl HolidayCalendar for HolidayList {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Determines the day type for a date.
///
/// A holiday takes precedence over the day of the week; otherwise Saturday
/// and Sunday are [`DayType::Weekend`] and every other day is
/// [`DayType::Weekday`].
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType, NoHolidays};
/// use chrono::NaiveDate;
///
/// // 2024-07-06 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 7, 6).unwrap();
/// assert_eq!(get_day_type(saturday, &NoHolidays), DayType::Weekend);
///
/// // 2024-07-08 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 7, 8).unwrap();
/// assert_eq!(get_day_type(monday, &NoHolidays), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate, holidays: &dyn HolidayCalendar) -> DayType {
    if holidays.is_holiday(date) {
        return DayType::Holiday;
    }

    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}
