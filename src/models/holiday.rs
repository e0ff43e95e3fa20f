//! Designated holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar date designated as a holiday for charging purposes.
///
/// The engine never derives holiday dates itself. Whoever builds the
/// holiday calendar supplies the observed dates, e.g. a Saturday holiday
/// observed on the preceding Friday is listed under the Friday.
///
/// # Example
///
/// ```
/// use tool_rental::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2020, 7, 3).unwrap(),
///     name: "Independence Day (observed)".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date on which the holiday is observed.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}
