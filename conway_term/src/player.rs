// player.rs - Prints generations until the board settles

use conway::{CycleDetector, LifeGrid};
use log::{debug, info};
use std::io::{self, Write};
use std::time::Duration;
use tokio::signal;
use tokio::time::{self, MissedTickBehavior};

/// ANSI: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub max_steps: u64,
    pub delay: Duration,
    pub clear_screen: bool,
    pub stop_on_cycle: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_steps: 200,
            delay: Duration::from_millis(100),
            clear_screen: false,
            stop_on_cycle: false,
        }
    }
}

/// Why the player stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Extinct,
    StepLimit,
    Cycle,
    Interrupted,
}

pub struct Player {
    grid: LifeGrid,
    cycles: Option<CycleDetector>,
    max_steps: u64,
    steps: u64,
}

impl Player {
    pub fn new(grid: LifeGrid, config: &PlayerConfig) -> Self {
        Self {
            grid,
            cycles: config.stop_on_cycle.then(CycleDetector::default),
            max_steps: config.max_steps,
            steps: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Checks the current board before it is printed.
    pub fn finished(&mut self) -> Option<Finish> {
        if self.grid.is_dead() {
            return Some(Finish::Extinct);
        }
        if self.steps >= self.max_steps {
            return Some(Finish::StepLimit);
        }
        let repeated = self.cycles.as_mut().is_some_and(|cycles| cycles.observe(&self.grid));
        repeated.then_some(Finish::Cycle)
    }

    pub fn write_frame<W: Write>(&self, out: &mut W, clear_screen: bool) -> io::Result<()> {
        if clear_screen {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        write!(out, "{}", self.grid)?;
        writeln!(out, "Step: {}", self.steps)
    }

    pub fn advance(&mut self) {
        self.grid.step();
        self.steps += 1;
    }
}

/// Plays frames at the configured delay until the board settles or Ctrl-C.
pub async fn run<W: Write>(player: &mut Player, config: &PlayerConfig, out: &mut W) -> io::Result<Finish> {
    let mut ticker = time::interval(config.delay.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let ctrl_c = signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let finish = loop {
        tokio::select! {
            _ = &mut ctrl_c => break Finish::Interrupted,
            _ = ticker.tick() => {}
        }

        if let Some(finish) = player.finished() {
            break finish;
        }
        player.write_frame(out, config.clear_screen)?;
        out.flush()?;
        player.advance();
        debug!("generation {}", player.grid().generation());
    };

    info!("stopped after {} steps: {:?}", player.steps(), finish);
    Ok(finish)
}
