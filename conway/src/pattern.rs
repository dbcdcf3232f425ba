// pattern.rs - Board snapshots used to seed grids

use crate::grid::{Board, LifeGrid, Row};

/// Marker for a live cell in text patterns.
pub const LIVE: char = '#';

/// An owned rectangular snapshot of live and dead cells.
///
/// Patterns never change a running grid; they are stamped onto a new one
/// with [`LifeGrid::with_pattern`] or combined with [`compose`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Board,
}

/// Places a pattern with its top-left corner at `(offset_x, offset_y)`.
pub type Placement<'a> = (isize, isize, &'a Pattern);

impl Pattern {
    /// All-dead pattern of the given size.
    pub fn empty(width: usize, height: usize) -> Self {
        Self { cells: vec![vec![false; width]; height] }
    }

    /// Parses text rows where `#` is alive and anything else is dead.
    ///
    /// Short rows are padded with dead cells up to the widest row.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows.iter().map(|r| r.as_ref().chars().count()).max().unwrap_or(0);
        let cells = rows
            .iter()
            .map(|r| {
                let mut row: Row = r.as_ref().chars().map(|c| c == LIVE).collect();
                row.resize(width, false);
                row
            })
            .collect();
        Self { cells }
    }

    /// Builds the smallest pattern holding the given live `(row, col)` cells.
    ///
    /// A cell at `usize::MAX` on either axis has no representable extent
    /// and is dropped.
    pub fn from_cells(cells: &[(usize, usize)]) -> Self {
        let extents: Vec<_> = cells
            .iter()
            .filter_map(|&(row, col)| Some((row.checked_add(1)?, col.checked_add(1)?)))
            .collect();
        let height = extents.iter().map(|&(rows, _)| rows).max().unwrap_or(0);
        let width = extents.iter().map(|&(_, cols)| cols).max().unwrap_or(0);
        let mut pattern = Self::empty(width, height);
        for &(rows, cols) in &extents {
            pattern.cells[rows - 1][cols - 1] = true;
        }
        pattern
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    /// Returns the cell at `(x, y)`, `false` outside the pattern.
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cells.get(y).and_then(|row| row.get(x)).copied().unwrap_or(false)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Coordinates `(x, y)` of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(x, _)| (x, y))
        })
    }

    /// Text form of the pattern, using `#` for live cells.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&alive| if alive { LIVE } else { ' ' }).collect())
            .collect()
    }

    /// Stamps the live cells of `pattern` at the offset, clipping anything
    /// that falls off this pattern.
    fn stamp(&mut self, offset_x: isize, offset_y: isize, pattern: &Pattern) {
        let (width, height) = (self.width() as isize, self.height() as isize);
        for (x, y) in pattern.live_cells() {
            let tx = offset_x.checked_add(x as isize);
            let ty = offset_y.checked_add(y as isize);
            let (Some(tx), Some(ty)) = (tx, ty) else { continue };
            if (0..width).contains(&tx) && (0..height).contains(&ty) {
                self.cells[ty as usize][tx as usize] = true;
            }
        }
    }
}

impl From<&LifeGrid> for Pattern {
    fn from(grid: &LifeGrid) -> Self {
        Self { cells: grid.rows().to_vec() }
    }
}

/// Combines several patterns onto one `width` x `height` canvas.
///
/// Placements are stamped in order and clipped to the canvas; where two
/// overlap, the later one wins.
pub fn compose(width: usize, height: usize, placements: &[Placement<'_>]) -> Pattern {
    let mut canvas = Pattern::empty(width, height);
    for &(offset_x, offset_y, pattern) in placements {
        canvas.stamp(offset_x, offset_y, pattern);
    }
    canvas
}
