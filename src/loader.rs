//! Reading events out of a ChatGPT data export

use std::{fs, path::Path};

use log::{debug, info};
use serde_json::Value;

use crate::{
    error::{HeatmapError, Result},
    time::Event,
};

/// File inside the export folder that holds the conversations
pub const CONVERSATIONS_FILE: &str = "conversations.json";

/// Load `conversations.json` from an unpacked export folder
pub fn load_events(folder: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = folder.as_ref().join(CONVERSATIONS_FILE);
    info!("Loading conversations from {}", path.display());
    let text = fs::read_to_string(&path).map_err(|source| HeatmapError::Io {
        path: path.clone(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&text).map_err(|source| HeatmapError::Json { path: path.clone(), source })?;
    events_from_value(&value).ok_or(HeatmapError::NotAnArray { path })
}

/// Parse events from a JSON document held in memory
pub fn events_from_json(text: &str) -> Result<Vec<Event>> {
    let value: Value = serde_json::from_str(text).map_err(|source| HeatmapError::Json {
        path: "<memory>".into(),
        source,
    })?;
    events_from_value(&value).ok_or_else(|| HeatmapError::NotAnArray {
        path: "<memory>".into(),
    })
}

/// A non-numeric or missing `create_time` becomes `None` and is rejected later
fn events_from_value(value: &Value) -> Option<Vec<Event>> {
    let records = value.as_array()?;
    let events: Vec<Event> = records
        .iter()
        .map(|record| Event {
            create_time: record.get("create_time").and_then(Value::as_f64),
        })
        .collect();
    debug!("Read {} records", events.len());
    Some(events)
}
