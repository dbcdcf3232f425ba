use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::GridError;

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_new_is_empty() {
    let grid = LifeGrid::new(7, 3).unwrap();
    assert_eq!((grid.width(), grid.height()), (7, 3));
    assert_eq!(grid.generation(), 0);
    assert_eq!(grid.rows().len(), 3);
    assert!(grid.rows().iter().all(|row| row.len() == 7));
    assert!(grid.is_dead());
}

#[test]
fn test_zero_dimensions_rejected() {
    for (w, h) in [(0, 5), (5, 0), (0, 0)] {
        assert_eq!(
            LifeGrid::new(w, h),
            Err(GridError::InvalidDimensions { width: w, height: h })
        );
        assert!(LifeGrid::with_pattern(w, h, &Pattern::default()).is_err());
        assert!(LifeGrid::new_random(w, h, 0.5, &mut seeded(1)).is_err());
    }
}

#[test]
fn test_resize_rejects_zero_without_mutating() {
    let mut grid = LifeGrid::new(4, 4).unwrap();
    grid.toggle(1, 1);
    grid.step();
    let before = grid.clone();
    assert!(grid.resize(0, 4).is_err());
    assert!(grid.resize(4, 0).is_err());
    assert_eq!(grid, before);
}

#[test]
fn test_with_pattern_clips_large_pattern() {
    let pattern = Pattern::parse(&["#####", "#####", "#####"]);
    let grid = LifeGrid::with_pattern(3, 2, &pattern).unwrap();
    assert_eq!(grid.population(), 6);
    assert_eq!(grid.rows().len(), 2);
    assert!(grid.rows().iter().all(|row| row.len() == 3));
}

#[test]
fn test_with_pattern_pads_small_pattern() {
    let pattern = Pattern::parse(&["#", " #"]);
    let grid = LifeGrid::with_pattern(4, 4, &pattern).unwrap();
    assert!(grid.is_alive(0, 0));
    assert!(grid.is_alive(1, 1));
    assert_eq!(grid.population(), 2);
}

#[test]
fn test_random_fill_is_seeded() {
    let a = LifeGrid::new_random(20, 20, DEFAULT_LIVE_PROBABILITY, &mut seeded(42)).unwrap();
    let b = LifeGrid::new_random(20, 20, DEFAULT_LIVE_PROBABILITY, &mut seeded(42)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.generation(), 0);
    // 400 cells at 30% should land well inside these bounds
    assert!((40..200).contains(&a.population()));
}

#[test]
fn test_random_probability_extremes() {
    let mut rng = seeded(7);
    assert!(LifeGrid::new_random(8, 8, 0.0, &mut rng).unwrap().is_dead());
    assert_eq!(LifeGrid::new_random(8, 8, 1.0, &mut rng).unwrap().population(), 64);
    assert_eq!(LifeGrid::new_random(8, 8, 3.5, &mut rng).unwrap().population(), 64);
    assert!(LifeGrid::new_random(8, 8, -1.0, &mut rng).unwrap().is_dead());
    assert!(LifeGrid::new_random(8, 8, f64::NAN, &mut rng).unwrap().is_dead());
}

#[test]
fn test_out_of_bounds_access() {
    let mut grid = LifeGrid::new(3, 3).unwrap();
    let before = grid.clone();
    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (isize::MIN, isize::MAX)] {
        grid.toggle(x, y);
        assert!(!grid.is_alive(x, y));
    }
    assert_eq!(grid, before);
}

#[test]
fn test_toggle_twice_restores_cell() {
    let mut grid = LifeGrid::new(3, 3).unwrap();
    grid.toggle(2, 1);
    assert!(grid.is_alive(2, 1));
    assert_eq!(grid.population(), 1);
    grid.toggle(2, 1);
    assert!(grid.is_dead());
}

#[test]
fn test_neighbors_wrap_around() {
    let mut grid = LifeGrid::new(5, 5).unwrap();
    grid.toggle(4, 4);
    grid.toggle(0, 4);
    grid.toggle(4, 0);
    assert_eq!(grid.live_neighbors(0, 0), 3);
    assert_eq!(grid.live_neighbors(2, 2), 0);
    assert_eq!(grid.live_neighbors(4, 4), 2);
}

#[test]
fn test_single_cell_is_not_its_own_neighbor() {
    let mut grid = LifeGrid::new(1, 1).unwrap();
    grid.toggle(0, 0);
    assert_eq!(grid.live_neighbors(0, 0), 0);
    grid.step();
    assert!(grid.is_dead());
    assert_eq!(grid.generation(), 1);
}

#[test]
fn test_narrow_grid_counts_wrapped_duplicates() {
    // On a 2-wide grid the left and right neighbors are the same cell.
    let mut grid = LifeGrid::new(2, 3).unwrap();
    grid.toggle(1, 1);
    assert_eq!(grid.live_neighbors(0, 1), 2);
    // A one-wide column only sees cells above and below, each three times.
    let mut column = LifeGrid::new(1, 3).unwrap();
    column.toggle(0, 0);
    assert_eq!(column.live_neighbors(0, 1), 3);
}

#[test]
fn test_step_uses_previous_generation_only() {
    // An L-tromino becomes a block; an in-place update would disagree.
    let pattern = Pattern::parse(&["##", "# "]);
    let mut grid = LifeGrid::with_pattern(6, 6, &pattern).unwrap();
    grid.step();
    assert_eq!(grid.population(), 4);
    assert!(grid.is_alive(1, 1));
}

#[test]
fn test_clear_resets() {
    let mut grid = LifeGrid::new_random(6, 6, 0.5, &mut seeded(3)).unwrap();
    grid.step();
    grid.clear();
    assert!(grid.is_dead());
    assert_eq!(grid.generation(), 0);
    assert_eq!((grid.width(), grid.height()), (6, 6));
}

#[test]
fn test_randomize_discards_board() {
    let mut grid = LifeGrid::with_pattern(4, 4, &Pattern::parse(&["####"; 4])).unwrap();
    grid.step();
    grid.randomize(0.0, &mut seeded(9));
    assert!(grid.is_dead());
    assert_eq!(grid.generation(), 0);
}

#[test]
fn test_resize_grows_and_shrinks() {
    let mut grid = LifeGrid::new(3, 3).unwrap();
    grid.toggle(2, 2);
    grid.toggle(0, 1);
    grid.resize(5, 2).unwrap();
    assert_eq!((grid.width(), grid.height()), (5, 2));
    assert!(grid.rows().iter().all(|row| row.len() == 5));
    assert!(grid.is_alive(0, 1));
    assert!(!grid.is_alive(2, 2));
    assert_eq!(grid.population(), 1);
}

#[test]
fn test_fingerprint_ignores_generation() {
    let pattern = find_block();
    let mut a = LifeGrid::with_pattern(6, 6, &pattern).unwrap();
    let b = a.clone();
    a.step();
    assert_eq!(a.fingerprint(), b.fingerprint());
    a.toggle(5, 5);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

fn find_block() -> Pattern {
    crate::find_preset("Block").unwrap().pattern()
}

prop_compose! {
    fn arb_grid()(width in 1..12usize, height in 1..12usize, seed in any::<u64>(), p in 0.0..1.0f64) -> LifeGrid {
        LifeGrid::new_random(width, height, p, &mut seeded(seed)).unwrap()
    }
}

proptest! {
    #[test]
    fn proptest_step_is_deterministic(grid in arb_grid()) {
        let mut a = grid.clone();
        let mut b = grid;
        a.step();
        b.step();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_step_keeps_shape(grid in arb_grid()) {
        let mut grid = grid;
        let (w, h) = (grid.width(), grid.height());
        grid.step();
        prop_assert_eq!(grid.rows().len(), h);
        prop_assert!(grid.rows().iter().all(|row| row.len() == w));
        prop_assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn proptest_toggle_twice_restores(grid in arb_grid(), x in -3..15isize, y in -3..15isize) {
        let mut toggled = grid.clone();
        toggled.toggle(x, y);
        toggled.toggle(x, y);
        prop_assert_eq!(toggled, grid);
    }

    #[test]
    fn proptest_is_dead_matches_population(grid in arb_grid()) {
        prop_assert_eq!(grid.is_dead(), grid.population() == 0);
    }

    #[test]
    fn proptest_resize_keeps_overlap(grid in arb_grid(), w in 1..12usize, h in 1..12usize) {
        let mut resized = grid.clone();
        resized.resize(w, h).unwrap();
        prop_assert_eq!(resized.generation(), grid.generation());
        for y in 0..h as isize {
            for x in 0..w as isize {
                prop_assert_eq!(resized.is_alive(x, y), grid.is_alive(x, y));
            }
        }
    }
}
