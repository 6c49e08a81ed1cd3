//! CLI argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// What to produce from the computed layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PNG image (default)
    Png,
    /// The full layout as JSON on stdout
    Json,
    /// Character grid on stdout
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "convo-heatmap")]
#[command(version)]
#[command(about = "Heatmap of how many ChatGPT conversations you had on each day of a year", long_about = None)]
pub struct Cli {
    /// Unpacked ChatGPT data export, the folder holding conversations.json
    #[arg(long = "data-folder", alias = "chatgpt_data_folder", value_name = "DIR")]
    pub data_folder: PathBuf,

    /// IANA timezone the days are counted in (e.g. America/Los_Angeles)
    #[arg(long = "local-tz", alias = "local_tz", value_name = "TZ", default_value = "UTC")]
    pub local_tz: String,

    /// Year to draw
    #[arg(long)]
    pub year: i32,

    /// Where to write the PNG, defaults to heatmap_<year>.png
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "png")]
    pub format: OutputFormat,

    /// Side of one day cell in pixels
    #[arg(long = "cell-size", default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..=256))]
    pub cell_size: u32,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("heatmap_{}.png", self.year)))
    }
}
