// app.rs - Viewer state and the actions behind each control

use conway::{compose, CycleDetector, LifeGrid, Preset, PRESETS};
use egui::Color32;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Smallest board the +/- buttons will shrink to.
pub const MIN_DIMENSION: usize = 5;
/// Largest board the +/- buttons will grow to.
pub const MAX_DIMENSION: usize = 200;

/// Speed slider range, in generations per second.
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 60.0;

/// Startup settings, filled in from the command line.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub width: usize,
    pub height: usize,
    pub interval: Duration,
    pub live_probability: f64,
    pub seed: Option<u64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            interval: Duration::from_millis(200),
            live_probability: conway::DEFAULT_LIVE_PROBABILITY,
            seed: None,
        }
    }
}

/// Why auto-play stopped by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    Extinct,
    Cycle,
}

pub struct LifeApp {
    pub grid: LifeGrid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_probability: f64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_preset: usize,
    pub halted: Option<Halt>,

    rng: StdRng,
    cycles: CycleDetector,
}

impl LifeApp {
    pub fn new(config: &ViewerConfig) -> conway::Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let width = config.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        let height = config.height.clamp(MIN_DIMENSION, MAX_DIMENSION);

        Ok(Self {
            grid: LifeGrid::new(width, height)?,
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.interval.max(Duration::from_millis(1)),
            live_probability: config.live_probability,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_preset: 0,
            halted: None,
            rng,
            cycles: CycleDetector::default(),
        })
    }

    /// Starts or pauses auto-play. Starting on an empty board seeds it first.
    ///
    /// The starting board counts toward cycle detection, so a period-p
    /// oscillator pauses after p steps.
    pub fn toggle_running(&mut self, now: Instant) {
        self.is_running = !self.is_running;
        if self.is_running {
            if self.grid.is_dead() {
                self.randomize();
                self.is_running = true;
            }
            self.cycles.reset();
            self.cycles.observe(&self.grid);
            self.halted = None;
            self.last_update = now;
        }
    }

    /// Advances one generation if auto-play is on and the interval has
    /// passed. Returns whether a step happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running || now.duration_since(self.last_update) < self.update_interval {
            return false;
        }
        self.advance();
        self.last_update = now;
        true
    }

    /// Single step, pausing auto-play if the board died or started repeating.
    pub fn advance(&mut self) {
        self.grid.step();

        let halt = if self.grid.is_dead() {
            Some(Halt::Extinct)
        } else if self.cycles.observe(&self.grid) {
            Some(Halt::Cycle)
        } else {
            None
        };

        if let Some(halt) = halt {
            if self.is_running {
                info!("pausing at generation {}: {:?}", self.grid.generation(), halt);
            }
            self.is_running = false;
            self.halted = Some(halt);
        }
    }

    pub fn clear(&mut self) {
        self.is_running = false;
        self.grid.clear();
        self.forget_history();
    }

    pub fn randomize(&mut self) {
        self.is_running = false;
        self.grid.randomize(self.live_probability, &mut self.rng);
        self.forget_history();
    }

    /// Toggles a cell from a click; ignored while auto-play is on.
    pub fn toggle_cell(&mut self, x: isize, y: isize) {
        if !self.is_running {
            self.grid.toggle(x, y);
            self.forget_history();
        }
    }

    pub fn current_preset(&self) -> &'static Preset {
        &PRESETS[self.selected_preset.min(PRESETS.len() - 1)]
    }

    /// Replaces the board with the selected preset centred on an empty grid.
    pub fn apply_selected_preset(&mut self) {
        let preset = self.current_preset();
        let pattern = preset.pattern();
        let (width, height) = (self.grid.width(), self.grid.height());
        let offset_x = (width as isize - pattern.width() as isize) / 2;
        let offset_y = (height as isize - pattern.height() as isize) / 2;
        let canvas = compose(width, height, &[(offset_x, offset_y, &pattern)]);

        match LifeGrid::with_pattern(width, height, &canvas) {
            Ok(grid) => {
                info!("applied preset {} at ({offset_x}, {offset_y})", preset.name);
                self.is_running = false;
                self.grid = grid;
                self.forget_history();
            }
            Err(err) => warn!("could not apply preset {}: {err}", preset.name),
        }
    }

    /// Grows or shrinks the board by the given deltas within the dimension bounds.
    pub fn resize_by(&mut self, dw: isize, dh: isize) {
        let bound = |size: usize, delta: isize| {
            size.saturating_add_signed(delta).clamp(MIN_DIMENSION, MAX_DIMENSION)
        };
        let width = bound(self.grid.width(), dw);
        let height = bound(self.grid.height(), dh);
        if (width, height) == (self.grid.width(), self.grid.height()) {
            return;
        }
        match self.grid.resize(width, height) {
            Ok(()) => self.forget_history(),
            Err(err) => warn!("{err}"),
        }
    }

    /// Generations per second as shown on the speed slider.
    pub fn speed(&self) -> f32 {
        1000.0 / self.update_interval.as_millis().max(1) as f32
    }

    pub fn set_speed(&mut self, generations_per_sec: f32) {
        let speed = generations_per_sec.clamp(MIN_SPEED, MAX_SPEED);
        self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
    }

    fn forget_history(&mut self) {
        self.halted = None;
        self.cycles.reset();
    }
}
