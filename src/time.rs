//! Conversion of raw epoch timestamps into the user's local calendar

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::{debug, error};

use crate::error::{HeatmapError, Result};

/// Timezone used when none is configured
///
/// Decides which calendar day an event lands on
pub const LOCAL_TZ: Tz = chrono_tz::UTC;

/// One input record. Only the creation time matters here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Seconds since the UTC epoch. `None` when the source had no numeric value.
    pub create_time: Option<f64>,
}

impl Event {
    pub const fn new(create_time: f64) -> Self {
        Self {
            create_time: Some(create_time),
        }
    }
}

/// Look up an IANA timezone identifier
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|_e| {
        error!("Unknown timezone {name:?}");
        HeatmapError::UnknownTimezone(name.to_owned())
    })
}

/// Interpret `create_time` as UTC epoch seconds and convert it to civil time in `tz`
///
/// `index` is only used to point at the offending record on failure.
pub fn to_local_datetime(create_time: Option<f64>, tz: Tz, index: usize) -> Result<DateTime<Tz>> {
    let invalid = || HeatmapError::InvalidTimestamp { index };
    let seconds = create_time.filter(|t| t.is_finite()).ok_or_else(invalid)?;

    let whole = seconds.floor();
    if whole < i64::MIN as f64 || whole > i64::MAX as f64 {
        return Err(invalid());
    }
    // Rounding can push a fraction just under 1 up to a full second
    let nanos = (((seconds - whole) * 1e9) as u32).min(999_999_999);

    let utc = DateTime::<Utc>::from_timestamp(whole as i64, nanos)
        .ok_or_else(invalid)?;
    Ok(utc.with_timezone(&tz))
}

/// Localize every event, failing on the first bad record
pub fn localize_events(events: &[Event], tz: Tz) -> Result<Vec<DateTime<Tz>>> {
    let local = events
        .iter()
        .enumerate()
        .map(|(index, event)| to_local_datetime(event.create_time, tz, index))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| error!("Timestamp normalization failed: {e}"))?;
    debug!("Localized {} events to {}", local.len(), tz.name());
    Ok(local)
}
