// grid.rs - Toroidal grid for Conway's Game of Life

use crate::error::{check_dimensions, Result};
use crate::pattern::Pattern;
use log::{debug, trace};
use rand::Rng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(test)]
mod tests;

/// Chance of a cell starting alive when a board is seeded randomly.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.3;

pub type Row = Vec<bool>;
pub type Board = Vec<Row>;

// Offsets of the eight Moore neighbors as (dx, dy).
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A rectangular board of live/dead cells whose edges wrap around.
///
/// The board is always exactly `height` rows of `width` cells. `step`,
/// `resize`, `clear` and `randomize` build a complete new buffer before
/// swapping it in, so no caller ever sees a half-updated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Board,
    generation: u64,
}

impl LifeGrid {
    /// Creates an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: empty_board(width, height),
            generation: 0,
        })
    }

    /// Creates a grid seeded from `pattern`, anchored at the top-left corner.
    ///
    /// Pattern cells that fall outside the grid are dropped; grid cells the
    /// pattern doesn't reach stay dead.
    pub fn with_pattern(width: usize, height: usize, pattern: &Pattern) -> Result<Self> {
        let mut grid = Self::new(width, height)?;
        if pattern.width() > width || pattern.height() > height {
            trace!(
                "clipping {}x{} pattern to {}x{} grid",
                pattern.width(), pattern.height(), width, height
            );
        }
        for (row, pattern_row) in grid.cells.iter_mut().zip(pattern.rows()) {
            for (cell, &alive) in row.iter_mut().zip(pattern_row) {
                *cell = alive;
            }
        }
        Ok(grid)
    }

    /// Creates a grid where every cell is independently alive with
    /// probability `live_probability`.
    pub fn new_random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: random_board(width, height, live_probability, rng),
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The board as `height` rows of `width` cells.
    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// Returns the cell state, or `false` for coordinates off the grid.
    pub fn is_alive(&self, x: isize, y: isize) -> bool {
        self.index(x, y).is_some_and(|(x, y)| self.cells[y][x])
    }

    /// Flips the cell at `(x, y)`. Off-grid coordinates are ignored.
    pub fn toggle(&mut self, x: isize, y: isize) {
        if let Some((x, y)) = self.index(x, y) {
            self.cells[y][x] = !self.cells[y][x];
        }
    }

    /// Counts the live cells among the eight wrapped neighbors of `(x, y)`.
    ///
    /// A wrapped neighbor that lands back on the cell itself (a grid one
    /// cell wide or tall) is not counted. Coordinates are taken modulo the
    /// grid size.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as isize, self.height as isize);
        let (x, y) = ((x % self.width) as isize, (y % self.height) as isize);

        let mut count = 0;
        for (dx, dy) in NEIGHBORS {
            let nx = (x + dx).rem_euclid(w);
            let ny = (y + dy).rem_euclid(h);
            if (nx, ny) == (x, y) {
                continue;
            }
            if self.cells[ny as usize][nx as usize] {
                count += 1;
            }
        }
        count
    }

    /// Advances the board by one generation.
    ///
    /// Every cell is computed from the current board into a fresh buffer:
    /// a live cell survives with 2 or 3 neighbors, a dead cell is born with
    /// exactly 3.
    pub fn step(&mut self) {
        let next: Board = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let alive = self.cells[y][x];
                        match (alive, self.live_neighbors(x, y)) {
                            (true, 2) | (true, 3) => true, // Survival
                            (false, 3)            => true, // Birth
                            _                     => false, // Death or stays dead
                        }
                    })
                    .collect()
            })
            .collect();

        self.cells = next;
        self.generation += 1;
    }

    /// True when no cell is alive.
    pub fn is_dead(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&alive| !alive))
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells = empty_board(self.width, self.height);
        self.generation = 0;
    }

    /// Discards the board for a fresh random fill and resets the generation
    /// counter.
    pub fn randomize<R: Rng + ?Sized>(&mut self, live_probability: f64, rng: &mut R) {
        debug!(
            "randomizing {}x{} grid with live probability {}",
            self.width, self.height, live_probability
        );
        self.cells = random_board(self.width, self.height, live_probability, rng);
        self.generation = 0;
    }

    /// Changes the grid size, keeping the overlapping top-left rectangle.
    ///
    /// New cells are dead. The generation counter is left alone.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<()> {
        check_dimensions(new_width, new_height)?;
        debug!(
            "resizing grid {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );

        let mut cells = empty_board(new_width, new_height);
        for (new_row, old_row) in cells.iter_mut().zip(&self.cells) {
            for (new_cell, &old_cell) in new_row.iter_mut().zip(old_row) {
                *new_cell = old_cell;
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
        Ok(())
    }

    /// Hash of the board contents and shape, ignoring the generation.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn index(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((x, y))
    }
}

fn empty_board(width: usize, height: usize) -> Board {
    vec![vec![false; width]; height]
}

fn random_board<R: Rng + ?Sized>(width: usize, height: usize, live_probability: f64, rng: &mut R) -> Board {
    let p = clamp_probability(live_probability);
    (0..height)
        .map(|_| (0..width).map(|_| rng.gen_bool(p)).collect())
        .collect()
}

/// Keeps `gen_bool` total: out-of-range values saturate, NaN means never.
fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
