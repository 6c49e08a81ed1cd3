use chrono::{Datelike, NaiveDate, Weekday};

/// Iterates over every date of a [`CalendarYear`] in order
#[derive(Debug, Clone)]
pub struct DaysIter {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DaysIter {
    const fn new(calendar: &CalendarYear) -> Self {
        Self {
            next: Some(calendar.start),
            end: calendar.end,
        }
    }
}

impl Iterator for DaysIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.filter(|d| *d <= self.end)?;
        self.next = date.succ_opt();
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.next {
            Some(d) if d <= self.end => (self.end - d).num_days() as usize + 1,
            _ => 0,
        };
        (left, Some(left))
    }
}

impl ExactSizeIterator for DaysIter {}

/// Data used to describe a calendar year, Jan 1 to Dec 31
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarYear {
    start: NaiveDate,
    end: NaiveDate,
}

impl CalendarYear {
    /// `None` when the year is outside of what chrono can represent
    pub fn new(year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.start
    }

    pub const fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// All dates of the year, in order
    pub const fn days_iter(&self) -> DaysIter {
        DaysIter::new(self)
    }

    /// Get the amount of days in this year
    pub fn days_amount(&self) -> u32 {
        self.end.ordinal()
    }

    pub fn is_leap(&self) -> bool {
        self.days_amount() == 366
    }

    /// Get the day of the week this year starts on
    pub fn start_weekday(&self) -> Weekday {
        self.start.weekday()
    }

    /// Whether `date` belongs to this year
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}
