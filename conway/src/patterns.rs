// patterns.rs - Catalog of well-known starting shapes

use crate::pattern::{compose, Pattern};

/// A named shape, given as live `(row, col)` cells relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Preset {
    pub fn pattern(&self) -> Pattern {
        Pattern::from_cells(self.cells)
    }
}

pub const PRESETS: &[Preset] = &[
    // Still lifes
    Preset {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Preset {
        name: "Beehive",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    },
    Preset {
        name: "Loaf",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
    },
    Preset {
        name: "Boat",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)],
    },
    Preset {
        name: "Tub",
        cells: &[(0, 1), (1, 0), (1, 2), (2, 1)],
    },
    // Oscillators
    Preset {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Preset {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Preset {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Preset {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    // Spaceships and growth
    Preset {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Preset {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Preset {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a preset up by name, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name.eq_ignore_ascii_case(name))
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}

/// Width and height of the canvas produced by [`demo_layout`].
pub const DEMO_SIZE: (usize, usize) = (25, 15);

/// Two gliders and a blinker on a 25x15 canvas.
pub fn demo_layout() -> Pattern {
    let glider = Pattern::from_cells(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let blinker = Pattern::from_cells(&[(0, 0), (0, 1), (0, 2)]);
    let (width, height) = DEMO_SIZE;
    compose(width, height, &[(2, 2, &glider), (16, 8, &blinker), (5, 10, &glider)])
}
