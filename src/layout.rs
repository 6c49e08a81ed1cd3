//! The full pipeline, from raw events to a layout a renderer can draw

use chrono::NaiveDate;
use chrono_tz::Tz;
use log::{error, info};
use serde::Serialize;

use crate::{
    calendar_utils::{CalendarYear, MonthLabel, YearGrid},
    counter::{count_dates, DateCount},
    error::{HeatmapError, Result},
    intensity::{Intensity, IntensityScale, Summary},
    time::{localize_events, parse_timezone, Event, LOCAL_TZ},
};

/// The two externally supplied parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapConfig {
    pub local_tz: Tz,
    pub year: i32,
}

impl HeatmapConfig {
    pub fn new(local_tz: &str, year: i32) -> Result<Self> {
        Ok(Self {
            local_tz: parse_timezone(local_tz)?,
            year,
        })
    }

    pub const fn with_default_tz(year: i32) -> Self {
        Self {
            local_tz: LOCAL_TZ,
            year,
        }
    }
}

/// One day of the year and where it goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub week: u32,
    pub weekday: u8,
    pub count: u32,
    pub intensity: Intensity,
}

/// Everything a renderer needs, computed up front
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayout {
    pub year: i32,
    pub timezone: &'static str,
    /// Grid width in weeks
    pub week_count: u32,
    /// One cell per day of the year, Jan 1 first
    pub cells: Vec<DayCell>,
    pub month_labels: Vec<MonthLabel>,
    pub summary: Summary,
}

impl HeatmapLayout {
    pub fn build(events: &[Event], config: &HeatmapConfig) -> Result<Self> {
        info!(
            "Building {} heatmap from {} events in {}",
            config.year,
            events.len(),
            config.local_tz.name()
        );
        let local = localize_events(events, config.local_tz)?;
        let counts = count_dates(&local, config.year);
        Self::from_counts(&counts, config)
    }

    pub fn from_counts(counts: &DateCount, config: &HeatmapConfig) -> Result<Self> {
        let year = config.year;
        let calendar = CalendarYear::new(year).ok_or_else(|| {
            error!("{year} has no complete calendar");
            HeatmapError::YearOutOfRange { year }
        })?;
        let counts: DateCount = counts
            .iter()
            .filter(|(date, _)| calendar.contains(**date))
            .map(|(&date, &count)| (date, count))
            .collect();

        let scale = IntensityScale::from_counts(&counts, year)?;
        let summary = Summary::new(&counts, &scale, year)?;
        let grid = YearGrid::new(calendar);

        let cells = grid
            .cells()
            .map(|(date, position)| {
                let count = counts.get(&date).copied().unwrap_or(0);
                DayCell {
                    date,
                    week: position.week,
                    weekday: position.weekday,
                    count,
                    intensity: scale.intensity(count),
                }
            })
            .collect();

        info!(
            "{year}: {} events on {} days, busiest {} with {}",
            summary.total_count, summary.active_days, summary.max_count_date, summary.max_count
        );

        Ok(Self {
            year,
            timezone: config.local_tz.name(),
            week_count: grid.week_count(),
            cells,
            month_labels: grid.month_labels(),
            summary,
        })
    }

    /// Every date of the year, in order
    pub fn date_range(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.cells.iter().map(|cell| cell.date)
    }

    pub fn title(&self) -> String {
        format!(
            "{} ChatGPT Conversation Heatmap (total={}).\nMost active day: {} with {} convos.",
            self.year, self.summary.total_count, self.summary.max_count_date, self.summary.max_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc_noon(y: i32, m: u32, d: u32) -> Event {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();
        Event::new(ts as f64)
    }

    #[test]
    fn unknown_timezone_is_rejected_by_the_config() {
        let err = HeatmapConfig::new("Not/AZone", 2024).unwrap_err();
        assert!(matches!(err, HeatmapError::UnknownTimezone(_)));
    }

    #[test]
    fn cells_cover_the_year() {
        let events = [utc_noon(2023, 6, 1), utc_noon(2023, 6, 1), utc_noon(2023, 8, 9)];
        let layout = HeatmapLayout::build(&events, &HeatmapConfig::with_default_tz(2023)).unwrap();
        assert_eq!(layout.cells.len(), 365);
        assert_eq!(layout.date_range().next(), NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(layout.date_range().last(), NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(layout.month_labels.len(), 12);
        assert!(layout.cells.iter().all(|c| c.week < layout.week_count));

        let busy = layout
            .cells
            .iter()
            .find(|c| c.date == NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
            .unwrap();
        assert_eq!(busy.count, 2);
        assert!(matches!(busy.intensity, Intensity::Level(_)));
        let quiet = layout.cells.iter().filter(|c| c.intensity == Intensity::NoData).count();
        assert_eq!(quiet, 363);
    }

    #[test]
    fn counts_outside_the_year_are_ignored() {
        let counts = DateCount::from([
            (NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 9),
            (NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), 1),
        ]);
        let layout = HeatmapLayout::from_counts(&counts, &HeatmapConfig::with_default_tz(2024)).unwrap();

        let march_first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(layout.summary.total_count, 1);
        assert_eq!(layout.summary.max_count_date, march_first);
        assert_eq!(layout.summary.max_count, 1);
        assert_eq!(layout.summary.active_days, 1);
        assert!(layout.date_range().any(|d| d == layout.summary.max_count_date));
        let cell_sum: u64 = layout.cells.iter().map(|c| u64::from(c.count)).sum();
        assert_eq!(cell_sum, layout.summary.total_count);
        assert!(layout.title().contains("(total=1)"));
    }

    #[test]
    fn only_other_years_means_no_data() {
        let counts = DateCount::from([(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), 4)]);
        let err = HeatmapLayout::from_counts(&counts, &HeatmapConfig::with_default_tz(2024)).unwrap_err();
        assert!(matches!(err, HeatmapError::NoDataForYear { year: 2024 }));
    }

    #[test]
    fn year_without_a_calendar_is_out_of_range() {
        let err = HeatmapLayout::from_counts(&DateCount::new(), &HeatmapConfig::with_default_tz(300_000))
            .unwrap_err();
        assert!(matches!(err, HeatmapError::YearOutOfRange { year: 300_000 }));
    }

    #[test]
    fn title_carries_the_summary() {
        let events = [utc_noon(2024, 3, 15), utc_noon(2024, 3, 15), utc_noon(2024, 3, 16)];
        let layout = HeatmapLayout::build(&events, &HeatmapConfig::with_default_tz(2024)).unwrap();
        assert_eq!(
            layout.title(),
            "2024 ChatGPT Conversation Heatmap (total=3).\nMost active day: 2024-03-15 with 2 convos."
        );
    }
}
