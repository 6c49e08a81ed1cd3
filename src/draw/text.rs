//! Plain text rendering for terminals

use std::fmt::Write;

use crate::{
    calendar_utils::all_weekdays_short_en, intensity::Intensity, layout::HeatmapLayout,
};

/// Character for one day, from no data to saturated
pub fn cell_char(intensity: Intensity) -> char {
    match intensity {
        Intensity::NoData => '·',
        Intensity::Level(v) if v < 0.25 => '░',
        Intensity::Level(v) if v < 0.5 => '▒',
        Intensity::Level(v) if v < 1.0 => '▓',
        Intensity::Level(_) => '█',
    }
}

/// Title, then one line per weekday and a line of month names
pub fn render_text(layout: &HeatmapLayout) -> String {
    let width = layout.week_count as usize;
    let mut rows = vec![vec![' '; width]; 7];
    for cell in &layout.cells {
        rows[cell.weekday as usize][cell.week as usize] = cell_char(cell.intensity);
    }

    let mut months = vec![' '; width + 3];
    for label in &layout.month_labels {
        for (offset, c) in label.name.chars().enumerate() {
            months[label.week as usize + offset] = c;
        }
    }

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", layout.title());
    for (name, row) in all_weekdays_short_en().iter().zip(&rows) {
        let _ = writeln!(out, "{name} {}", row.iter().collect::<String>());
    }
    let _ = writeln!(out, "    {}", months.iter().collect::<String>().trim_end());
    out
}
