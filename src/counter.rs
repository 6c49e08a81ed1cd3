//! Per-day event counting for a single year

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use log::debug;

/// Number of events per local calendar date, in calendar order
pub type DateCount = BTreeMap<NaiveDate, u32>;

/// Count local datetimes per date, keeping only those in `year`
pub fn count_dates<'a, Tz, I>(datetimes: I, year: i32) -> DateCount
where
    Tz: TimeZone + 'a,
    I: IntoIterator<Item = &'a DateTime<Tz>>,
{
    let mut counts = DateCount::new();
    let mut dropped = 0_usize;
    for date in datetimes.into_iter().map(DateTime::date_naive) {
        if date.year() != year {
            dropped += 1;
            continue;
        }
        *counts.entry(date).or_default() += 1;
    }
    debug!(
        "Counted events on {} days of {year}, {dropped} events outside the year",
        counts.len()
    );
    counts
}

/// Sum of all counts
pub fn total_count(counts: &DateCount) -> u64 {
    counts.values().map(|&c| u64::from(c)).sum()
}
