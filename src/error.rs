//! Error type shared by the whole heatmap pipeline.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatmapError>;

#[derive(Debug, Error)]
pub enum HeatmapError {
    /// A record has no usable `create_time`. The whole batch is rejected.
    #[error("record {index} has a missing, non-numeric or out of range create_time")]
    InvalidTimestamp { index: usize },

    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),

    /// Nothing is left to scale after filtering to the target year
    #[error("no events fall into the year {year}")]
    NoDataForYear { year: i32 },

    /// The year has no complete calendar in chrono's date range
    #[error("the year {year} is outside the supported calendar range")]
    YearOutOfRange { year: i32 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of records in {path}")]
    NotAnArray { path: PathBuf },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
