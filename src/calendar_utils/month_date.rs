use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;

/// First day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDate(NaiveDate);

impl MonthDate {
    /// `None` when the year is outside of what chrono can represent
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).map(Self)
    }

    /// All twelve months of `year`
    pub fn all_in_year(year: i32) -> impl Iterator<Item = Self> {
        (1..=12)
            .filter_map(Month::from_u32)
            .filter_map(move |month| Self::new(year, month))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        // Always in 1..=12 for a valid NaiveDate
        Month::from_u32(self.0.month()).unwrap_or(Month::January)
    }

    pub const fn to_start_day_naive(self) -> NaiveDate {
        self.0
    }
}
