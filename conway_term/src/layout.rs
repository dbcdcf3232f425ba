// layout.rs - Starting boards for the terminal player

use conway::{compose, demo_layout, find_preset, preset_names, LifeGrid};
use rand::Rng;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown layout {0:?}; expected random, demo or one of: {}", preset_names().collect::<Vec<_>>().join(", "))]
    UnknownPreset(String),
}

/// How the board is seeded before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Every cell alive with the configured probability.
    Random,
    /// Two gliders and a blinker.
    Demo,
    /// A single catalog shape, centred.
    Preset(&'static str),
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" | "rand" => Ok(Layout::Random),
            "demo" => Ok(Layout::Demo),
            _ => find_preset(s)
                .map(|preset| Layout::Preset(preset.name))
                .ok_or_else(|| LayoutError::UnknownPreset(s.to_string())),
        }
    }
}

impl Layout {
    pub fn build<R: Rng + ?Sized>(
        self,
        width: usize,
        height: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> conway::Result<LifeGrid> {
        match self {
            Layout::Random => LifeGrid::new_random(width, height, live_probability, rng),
            Layout::Demo => LifeGrid::with_pattern(width, height, &demo_layout()),
            Layout::Preset(name) => {
                let pattern = find_preset(name).map(|p| p.pattern()).unwrap_or_default();
                let offset_x = (width as isize - pattern.width() as isize) / 2;
                let offset_y = (height as isize - pattern.height() as isize) / 2;
                let canvas = compose(width, height, &[(offset_x, offset_y, &pattern)]);
                LifeGrid::with_pattern(width, height, &canvas)
            }
        }
    }
}
