//! A bunch of utils for working with calendar stuff

pub mod calendar;
pub mod grid;
mod month_date;

pub use calendar::{CalendarYear, DaysIter};
use chrono::Month;
pub use grid::{GridPosition, MonthLabel, YearGrid};
pub use month_date::MonthDate;

pub const fn all_weekdays_short_en() -> [&'static str; 7] {
    ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
}

pub const fn month_short_name(val: Month) -> &'static str {
    all_months_short_en()[val.number_from_month() as usize - 1]
}

pub const fn all_months_short_en() -> [&'static str; 12] {
    [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ]
}
