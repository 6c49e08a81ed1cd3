//! Placement of the days of a year on a weeks x weekdays grid
//!
//! Columns are weeks starting on Monday, rows are weekdays with Monday on
//! row 0. Week 0 holds Jan 1 and the days before it in that week are left
//! empty, so every date sits under its real weekday.

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

use super::{month_short_name, CalendarYear, MonthDate};

/// Cell coordinates of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    /// Column, 0 is the week holding Jan 1
    pub week: u32,
    /// Row, Monday is 0 and Sunday is 6
    pub weekday: u8,
}

/// Horizontal anchor of a month name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    /// 1 to 12
    pub month: u32,
    pub name: &'static str,
    /// Column holding the first of the month
    pub week: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearGrid {
    calendar: CalendarYear,
    /// Monday-based weekday of Jan 1, i.e. the number of empty cells in week 0
    start_offset: u32,
}

impl YearGrid {
    pub fn new(calendar: CalendarYear) -> Self {
        Self {
            calendar,
            start_offset: calendar.start_weekday().num_days_from_monday(),
        }
    }

    pub const fn calendar(&self) -> &CalendarYear {
        &self.calendar
    }

    /// Cell of `date`, `None` when it is not in this year
    pub fn position(&self, date: NaiveDate) -> Option<GridPosition> {
        if !self.calendar.contains(date) {
            return None;
        }
        Some(GridPosition {
            week: (date.ordinal0() + self.start_offset) / 7,
            weekday: date.weekday().num_days_from_monday() as u8,
        })
    }

    /// Inverse of [`Self::position`]. The padding cells before Jan 1 and after Dec 31 give `None`.
    pub fn date_at(&self, position: GridPosition) -> Option<NaiveDate> {
        if position.weekday > 6 {
            return None;
        }
        let slot = position.week.checked_mul(7)?.checked_add(u32::from(position.weekday))?;
        let ordinal0 = slot.checked_sub(self.start_offset)?;
        if ordinal0 >= self.calendar.days_amount() {
            return None;
        }
        self.calendar.start_date().with_ordinal0(ordinal0)
    }

    /// Every day of the year with its cell, in calendar order
    pub fn cells(&self) -> impl Iterator<Item = (NaiveDate, GridPosition)> + '_ {
        self.calendar.days_iter().filter_map(|date| {
            let position = self.position(date)?;
            Some((date, position))
        })
    }

    /// Number of columns needed to hold the whole year
    ///
    /// At least `(days - 1) / 7 + 1`, and wide enough for the column of Dec 31,
    /// which is 53 when a long year starts late in the week.
    pub fn week_count(&self) -> u32 {
        let days = self.calendar.days_amount();
        let estimate = (days - 1) / 7 + 1;
        let last_week = (days - 1 + self.start_offset) / 7;
        estimate.max(last_week + 1)
    }

    /// Column anchors for the twelve month names
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        MonthDate::all_in_year(self.calendar.year())
            .filter_map(|month| {
                let first = month.to_start_day_naive();
                let position = self.position(first)?;
                let name: Month = month.month();
                Some(MonthLabel {
                    month: name.number_from_month(),
                    name: month_short_name(name),
                    week: position.week,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn grid(year: i32) -> YearGrid {
        YearGrid::new(CalendarYear::new(year).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn jan_first_sits_under_its_weekday() {
        // 2023-01-01 is a Sunday
        let pos = grid(2023).position(date(2023, 1, 1)).unwrap();
        assert_eq!(pos, GridPosition { week: 0, weekday: 6 });
        // and the Monday after starts week 1
        let pos = grid(2023).position(date(2023, 1, 2)).unwrap();
        assert_eq!(pos, GridPosition { week: 1, weekday: 0 });
    }

    #[test]
    fn weeks_start_on_monday() {
        let g = grid(2025);
        for (day, pos) in g.cells() {
            if pos.weekday == 0 && day != date(2025, 1, 1) {
                let prev = g.position(day.pred_opt().unwrap()).unwrap();
                assert_eq!(prev.week + 1, pos.week);
            }
        }
    }

    #[test]
    fn late_start_leap_year_needs_an_extra_column() {
        // 2012 is a leap year starting on a Sunday, Dec 31 lands in week 53
        let g = grid(2012);
        let last = g.position(date(2012, 12, 31)).unwrap();
        assert_eq!(last.week, 53);
        assert_eq!(g.week_count(), 54);
        // a leap year starting on Monday only needs 53
        assert_eq!(grid(2024).week_count(), 53);
    }

    #[test]
    fn every_date_gets_a_unique_cell_and_maps_back() {
        for year in [2012, 2023, 2024, 2028, 2033] {
            let g = grid(year);
            let mut seen = HashSet::new();
            for (day, pos) in g.cells() {
                assert!(pos.week < g.week_count());
                assert!(seen.insert(pos), "collision at {pos:?}");
                assert_eq!(g.date_at(pos), Some(day));
            }
            assert_eq!(seen.len() as u32, g.calendar().days_amount());
        }
    }

    #[test]
    fn padding_cells_have_no_date() {
        let g = grid(2023);
        assert_eq!(g.date_at(GridPosition { week: 0, weekday: 0 }), None);
        assert_eq!(g.date_at(GridPosition { week: 60, weekday: 0 }), None);
        assert_eq!(g.date_at(GridPosition { week: 1, weekday: 7 }), None);
        assert_eq!(g.position(date(2024, 1, 1)), None);
    }

    #[test]
    fn month_labels_use_the_cell_column() {
        let labels = grid(2023).month_labels();
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], MonthLabel { month: 1, name: "Jan", week: 0 });
        // 2023-02-01 is a Wednesday, 31 days + 6 padding cells in
        assert_eq!(labels[1], MonthLabel { month: 2, name: "Feb", week: 5 });
        assert!(labels.windows(2).all(|w| w[0].week < w[1].week));
    }
}
