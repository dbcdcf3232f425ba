// main.rs - Headless Conway's Game of Life for the terminal

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;
use std::io::{self, Write};
use std::time::Duration;

mod layout;
mod player;

use layout::Layout;
use player::{Player, PlayerConfig};

#[derive(Parser)]
#[command(name = "conway_term")]
#[command(version)]
#[command(about = "Plays Conway's Game of Life in the terminal on a wrap-around board", long_about = None)]
struct Cli {
    /// Board width in cells
    #[arg(short = 'W', long, default_value = "30")]
    width: usize,

    /// Board height in cells
    #[arg(short = 'H', long, default_value = "20")]
    height: usize,

    /// Stop after this many generations
    #[arg(short = 'n', long, default_value = "200")]
    steps: u64,

    /// Delay between frames (milliseconds)
    #[arg(short, long, default_value = "100")]
    delay_ms: u64,

    /// Chance of a cell starting alive with the random layout
    #[arg(short = 'p', long, default_value_t = conway::DEFAULT_LIVE_PROBABILITY)]
    density: f64,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Starting board: random, demo, or a pattern name (glider, pulsar, ...)
    #[arg(short, long, default_value = "random")]
    layout: Layout,

    /// Clear the screen before each frame
    #[arg(short, long)]
    clear_screen: bool,

    /// Stop as soon as the board repeats a recent generation
    #[arg(long)]
    stop_on_cycle: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl From<&Cli> for PlayerConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            max_steps: cli.steps,
            delay: Duration::from_millis(cli.delay_ms),
            clear_screen: cli.clear_screen,
            stop_on_cycle: cli.stop_on_cycle,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .context("failed to initialize logging")?;
    info!("Starting conway_term v{} ...", env!("CARGO_PKG_VERSION"));

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = cli
        .layout
        .build(cli.width, cli.height, cli.density, &mut rng)
        .with_context(|| format!("cannot build a {}x{} board", cli.width, cli.height))?;

    let config = PlayerConfig::from(&cli);
    let mut player = Player::new(grid, &config);
    let mut out = io::stdout().lock();

    writeln!(out, "\nStarting animation...")?;
    player::run(&mut player, &config, &mut out).await?;
    writeln!(out, "Simulation complete!")?;
    Ok(())
}
