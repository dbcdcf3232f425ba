// render.rs - Bordered text rendering of a grid

use crate::grid::LifeGrid;
use crate::pattern::LIVE;
use std::fmt;

const DEAD: char = ' ';

/// Prints the generation line followed by the board in a `+---+` frame.
///
/// ```text
/// Generation: 3
/// +-----+
/// | #   |
/// +-----+
/// ```
impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width());

        writeln!(f, "Generation: {}", self.generation())?;
        writeln!(f, "+{border}+")?;
        for row in self.rows() {
            let line: String = row.iter().map(|&alive| if alive { LIVE } else { DEAD }).collect();
            writeln!(f, "|{line}|")?;
        }
        writeln!(f, "+{border}+")
    }
}
