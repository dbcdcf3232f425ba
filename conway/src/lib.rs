//! Conway's Game of Life on a toroidal grid.
//!
//! [`LifeGrid`] owns the board and the generation counter. Every cell has
//! exactly eight neighbors: the board wraps around on both axes. Starting
//! layouts are described with [`Pattern`]s, either parsed from text rows,
//! taken from the [`PRESETS`] catalog, or assembled with [`compose`].
//!
//! ```
//! use conway::{LifeGrid, Pattern};
//!
//! let blinker = Pattern::parse(&["", " ###"]);
//! let mut grid = LifeGrid::with_pattern(5, 5, &blinker).unwrap();
//! grid.step();
//! assert!(grid.is_alive(2, 0) && grid.is_alive(2, 1) && grid.is_alive(2, 2));
//! assert_eq!(grid.generation(), 1);
//! ```

mod error;
mod grid;
mod history;
mod pattern;
mod patterns;
mod render;

pub use error::{GridError, Result};
pub use grid::{Board, LifeGrid, Row, DEFAULT_LIVE_PROBABILITY};
pub use history::{CycleDetector, DEFAULT_HISTORY};
pub use pattern::{compose, Pattern, Placement};
pub use patterns::{demo_layout, find_preset, preset_names, Preset, DEMO_SIZE, PRESETS};
