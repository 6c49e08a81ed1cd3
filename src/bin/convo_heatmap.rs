use anyhow::{Context, Result};
use clap::Parser;
use convo_heatmap::{
    cli::{Cli, OutputFormat},
    draw::{self, text::render_text, DrawOptions},
    layout::{HeatmapConfig, HeatmapLayout},
    loader,
};
use tracing_subscriber::EnvFilter;

/// Initialize the log output, `RUST_LOG` applies unless `--debug` is given
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = HeatmapConfig::new(&cli.local_tz, cli.year)?;
    let events = loader::load_events(&cli.data_folder)
        .with_context(|| format!("loading export from {}", cli.data_folder.display()))?;
    let layout = HeatmapLayout::build(&events, &config)?;

    match cli.format {
        OutputFormat::Png => {
            let options = DrawOptions {
                cell_size: cli.cell_size,
                ..DrawOptions::default()
            };
            let path = cli.output_path();
            draw::render_canvas(&layout, &options)
                .save_png(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("{}", layout.title());
            println!("Saved {}", path.display());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&layout));
        }
    }
    Ok(())
}
