//! Calendar heatmap of conversation activity over one year
//!
//! Events are bucketed into days of the user's local timezone, placed on a
//! weeks x weekdays grid and colored relative to the 90th percentile of the
//! busy days:
//!
//! ```no_run
//! use convo_heatmap::{draw, layout::{HeatmapConfig, HeatmapLayout}, loader};
//!
//! # fn main() -> convo_heatmap::Result<()> {
//! let events = loader::load_events("data")?;
//! let config = HeatmapConfig::new("Europe/Berlin", 2024)?;
//! let layout = HeatmapLayout::build(&events, &config)?;
//! draw::render_canvas(&layout, &draw::DrawOptions::default()).save_png("heatmap_2024.png")?;
//! # Ok(())
//! # }
//! ```

pub mod calendar_utils;
pub mod cli;
pub mod counter;
pub mod draw;
pub mod error;
pub mod intensity;
pub mod layout;
pub mod loader;
pub mod time;

pub use error::{HeatmapError, Result};
pub use layout::{HeatmapConfig, HeatmapLayout};
pub use time::Event;
