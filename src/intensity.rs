//! Mapping of daily counts to display intensity, plus the headline statistics

use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;

use crate::{
    counter::{total_count, DateCount},
    error::{HeatmapError, Result},
};

/// Percentile of the non-zero daily counts that maps to intensity 1
pub const SCALE_PERCENTILE: f64 = 90.0;

/// Display intensity of one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intensity {
    /// No events on that day, drawn apart from low activity
    NoData,
    /// `(count + 1) / p90`. Never negative, and above 1 for days busier than p90.
    Level(f64),
}

impl Intensity {
    pub fn level(self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::Level(v) => Some(v),
        }
    }
}

/// Percentile `q` (0 to 100) of an ascending slice, linear interpolation between closest ranks
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    let rank = (q / 100.0).clamp(0.0, 1.0) * sorted.len().checked_sub(1)? as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (&a, &b) = (sorted.get(lo)?, sorted.get(hi)?);
    Some(a + (b - a) * (rank - lo as f64))
}

/// Scale built from the counts of one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
    p90: f64,
}

impl IntensityScale {
    pub fn from_counts(counts: &DateCount, year: i32) -> Result<Self> {
        let mut active: Vec<f64> = counts
            .values()
            .filter(|&&c| c > 0)
            .map(|&c| f64::from(c))
            .collect();
        active.sort_by(f64::total_cmp);

        let Some(p90) = percentile(&active, SCALE_PERCENTILE) else {
            warn!("No events in {year}, nothing to scale");
            return Err(HeatmapError::NoDataForYear { year });
        };
        if p90 <= 0.0 {
            warn!("90th percentile of {year} is {p90}, nothing to scale");
            return Err(HeatmapError::NoDataForYear { year });
        }
        debug!("Intensity scale for {year}: p90 = {p90}");
        Ok(Self { p90 })
    }

    pub const fn p90(&self) -> f64 {
        self.p90
    }

    pub fn intensity(&self, count: u32) -> Intensity {
        if count == 0 {
            return Intensity::NoData;
        }
        Intensity::Level(((f64::from(count) + 1.0) / self.p90).max(0.0))
    }
}

/// Headline numbers shown in the title
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: u64,
    /// Busiest day, the earliest one on ties
    pub max_count_date: NaiveDate,
    pub max_count: u32,
    pub active_days: usize,
    pub p90: f64,
}

impl Summary {
    pub fn new(counts: &DateCount, scale: &IntensityScale, year: i32) -> Result<Self> {
        let mut busiest: Option<(NaiveDate, u32)> = None;
        // BTreeMap iterates in calendar order, so strict > keeps the earliest date
        for (&date, &count) in counts {
            if busiest.map_or(true, |(_, max)| count > max) {
                busiest = Some((date, count));
            }
        }
        let (max_count_date, max_count) =
            busiest.ok_or(HeatmapError::NoDataForYear { year })?;

        Ok(Self {
            total_count: total_count(counts),
            max_count_date,
            max_count,
            active_days: counts.values().filter(|&&c| c > 0).count(),
            p90: scale.p90(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 50.0), Some(3.0));
        assert_eq!(percentile(&values, 100.0), Some(5.0));
        // rank 0.9 * 4 = 3.6
        let p90 = percentile(&values, 90.0).unwrap();
        assert!((p90 - 4.6).abs() < 1e-12);
        assert_eq!(percentile(&[7.0], 90.0), Some(7.0));
        assert_eq!(percentile(&[], 90.0), None);
    }

    #[test]
    fn empty_counts_are_no_data() {
        let err = IntensityScale::from_counts(&DateCount::new(), 2023).unwrap_err();
        assert!(matches!(err, HeatmapError::NoDataForYear { year: 2023 }));
    }

    #[test]
    fn all_zero_counts_are_no_data() {
        let counts = DateCount::from([(date(2023, 5, 1), 0), (date(2023, 5, 2), 0)]);
        let err = IntensityScale::from_counts(&counts, 2023).unwrap_err();
        assert!(matches!(err, HeatmapError::NoDataForYear { year: 2023 }));
    }

    #[test]
    fn busy_days_are_not_clamped() {
        let mut counts: DateCount = date(2025, 1, 1)
            .iter_days()
            .take(90)
            .map(|d| (d, 1))
            .collect();
        counts.insert(date(2025, 6, 1), 50);

        let scale = IntensityScale::from_counts(&counts, 2025).unwrap();
        assert_eq!(scale.p90(), 1.0);
        assert_eq!(scale.intensity(1), Intensity::Level(2.0));
        let busiest = scale.intensity(50).level().unwrap();
        assert!(busiest > 1.0);
        assert_eq!(busiest, 51.0);
        assert_eq!(scale.intensity(0), Intensity::NoData);
    }

    #[test]
    fn summary_prefers_the_earliest_busiest_day() {
        let counts = DateCount::from([
            (date(2024, 2, 1), 1),
            (date(2024, 3, 15), 4),
            (date(2024, 7, 4), 4),
            (date(2024, 12, 1), 2),
        ]);
        let scale = IntensityScale::from_counts(&counts, 2024).unwrap();
        let summary = Summary::new(&counts, &scale, 2024).unwrap();
        assert_eq!(summary.max_count_date, date(2024, 3, 15));
        assert_eq!(summary.max_count, 4);
        assert_eq!(summary.total_count, 11);
        assert_eq!(summary.active_days, 4);
    }
}
