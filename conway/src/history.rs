// history.rs - Detects boards that repeat an earlier one

use crate::grid::LifeGrid;

/// Number of recent boards remembered by default.
pub const DEFAULT_HISTORY: usize = 10;

/// Remembers fingerprints of the most recent boards in a ring buffer.
///
/// Catches still lifes and oscillators whose period fits in the history.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    history: Vec<u64>,
    capacity: usize,
    next: usize,
}

impl CycleDetector {
    /// A capacity of zero is bumped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Records `grid`, returning `true` if it matches a remembered board.
    ///
    /// A repeated board is not recorded again.
    pub fn observe(&mut self, grid: &LifeGrid) -> bool {
        let hash = grid.fingerprint();
        if self.history.contains(&hash) {
            return true;
        }

        if self.history.len() < self.capacity {
            self.history.push(hash);
        } else {
            self.history[self.next] = hash;
        }
        self.next = (self.next + 1) % self.capacity;
        false
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.next = 0;
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{find_preset, LifeGrid};

    fn grid_with(name: &str, size: usize) -> LifeGrid {
        let pattern = find_preset(name).unwrap().pattern();
        LifeGrid::with_pattern(size, size, &pattern).unwrap()
    }

    #[test]
    fn still_life_repeats_immediately() {
        let mut grid = grid_with("Block", 6);
        let mut detector = CycleDetector::default();
        assert!(!detector.observe(&grid));
        grid.step();
        assert!(detector.observe(&grid));
    }

    #[test]
    fn blinker_repeats_after_two_steps() {
        let mut grid = grid_with("Blinker", 5);
        let mut detector = CycleDetector::default();
        assert!(!detector.observe(&grid));
        grid.step();
        assert!(!detector.observe(&grid));
        grid.step();
        assert!(detector.observe(&grid));
    }

    #[test]
    fn glider_does_not_repeat_within_history() {
        let mut grid = grid_with("Glider", 20);
        let mut detector = CycleDetector::default();
        for _ in 0..DEFAULT_HISTORY * 2 {
            assert!(!detector.observe(&grid));
            grid.step();
        }
    }

    #[test]
    fn short_history_forgets_old_boards() {
        let mut grid = grid_with("Blinker", 5);
        let mut detector = CycleDetector::new(1);
        assert!(!detector.observe(&grid));
        grid.step();
        assert!(!detector.observe(&grid));
        grid.step();
        assert!(!detector.observe(&grid));
    }

    #[test]
    fn reset_forgets_everything() {
        let grid = grid_with("Block", 6);
        let mut detector = CycleDetector::default();
        detector.observe(&grid);
        detector.reset();
        assert!(!detector.observe(&grid));
    }
}
