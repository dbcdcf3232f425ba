// main.rs - Interactive Conway's Game of Life viewer

use clap::Parser;
use eframe::egui;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::time::Duration;

mod app;
mod ui;

use app::{LifeApp, ViewerConfig};

#[derive(Parser)]
#[command(name = "conway_viewer")]
#[command(version)]
#[command(about = "Interactive Conway's Game of Life on a wrap-around board", long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(short = 'W', long, default_value = "50")]
    width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value = "50")]
    height: usize,

    /// Delay between generations while playing (milliseconds)
    #[arg(short, long, default_value = "200")]
    interval_ms: u64,

    /// Chance of a cell starting alive when the board is randomized
    #[arg(short, long, default_value_t = conway::DEFAULT_LIVE_PROBABILITY)]
    density: f64,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl From<&Cli> for ViewerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            interval: Duration::from_millis(cli.interval_ms),
            live_probability: cli.density,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();
    if let Err(err) = SimpleLogger::new().with_level(cli.log_level).init() {
        eprintln!("logger already initialized: {err}");
    }
    info!("Starting conway_viewer v{} ...", env!("CARGO_PKG_VERSION"));

    let app = match LifeApp::new(&ViewerConfig::from(&cli)) {
        Ok(app) => app,
        Err(err) => {
            error!("{err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}
