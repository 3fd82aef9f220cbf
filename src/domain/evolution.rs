//! Sparse generation step.
//!
//! Instead of scanning a dense grid, every live cell votes for its eight
//! neighbors. Only cells that received a vote can be alive next generation,
//! so the cost is O(live cells * 8) no matter how large the universe is.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::{Cell, GridBounds, LiveSet};

/// Conway's rule (B3/S23):
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
#[inline]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Live-neighbor count for every cell adjacent to at least one live cell.
/// Candidates outside `bounds` are dropped so the grid edge acts as a wall.
pub fn neighbor_counts(live: &LiveSet, bounds: GridBounds) -> HashMap<Cell, u8> {
    let mut counts = HashMap::with_capacity(live.len() * 4);
    for cell in live.iter() {
        tally(&mut counts, cell, bounds);
    }
    counts
}

#[inline]
fn tally(counts: &mut HashMap<Cell, u8>, cell: Cell, bounds: GridBounds) {
    for neighbor in cell.neighbors().filter(|&n| bounds.contains(n)) {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
}

/// Pure evolution - returns the next generation, leaves `live` untouched
pub fn step(live: &LiveSet, bounds: GridBounds) -> LiveSet {
    neighbor_counts(live, bounds)
        .into_iter()
        .filter(|&(cell, count)| next_state(live.contains(cell), count))
        .map(|(cell, _)| cell)
        .collect()
}

/// Same result as [`step`], with the counting split across rayon workers.
/// Each worker fills a private map and the maps are merged pairwise.
pub fn step_parallel(live: &LiveSet, bounds: GridBounds) -> LiveSet {
    let counts = live
        .as_set()
        .par_iter()
        .fold(HashMap::new, |mut counts, &cell| {
            tally(&mut counts, cell, bounds);
            counts
        })
        .reduce(HashMap::new, merge_counts);

    let next: HashSet<Cell> = counts
        .into_par_iter()
        .filter(|&(cell, count)| next_state(live.contains(cell), count))
        .map(|(cell, _)| cell)
        .collect();
    LiveSet::from(next)
}

fn merge_counts(a: HashMap<Cell, u8>, b: HashMap<Cell, u8>) -> HashMap<Cell, u8> {
    let (mut big, small) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (cell, count) in small {
        *big.entry(cell).or_insert(0) += count;
    }
    big
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use proptest::prelude::*;

    const BOUNDS: GridBounds = GridBounds::new(1_000, 1_000);

    fn set(cells: &[(i32, i32)]) -> LiveSet {
        cells.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn test_rule_table() {
        // Underpopulation
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        // Survival
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        // Overpopulation
        assert!(!next_state(true, 4));
        assert!(!next_state(true, 8));
        // Reproduction
        assert!(next_state(false, 3));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 6));
    }

    #[test]
    fn test_block_still_life() {
        let block = presets::block().cells_at(Cell::new(10, 10));
        let once = step(&block, BOUNDS);
        assert_eq!(once, block);
        assert_eq!(step(&once, BOUNDS), block);
    }

    #[test]
    fn test_blinker_period_two() {
        let blinker = set(&[(4, 5), (5, 5), (6, 5)]);

        let next = step(&blinker, BOUNDS);
        assert_eq!(next, set(&[(5, 4), (5, 5), (5, 6)]));

        let next2 = step(&next, BOUNDS);
        assert_eq!(next2, blinker);
    }

    #[test]
    fn test_birth_on_three() {
        let live = set(&[(0, 0), (2, 0), (1, 2)]);
        let next = step(&live, BOUNDS);
        // (1, 1) touches all three
        assert!(next.contains(Cell::new(1, 1)));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        // Plus shape: center has 4 neighbors
        let live = set(&[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        let next = step(&live, BOUNDS);
        assert!(!next.contains(Cell::new(5, 5)));
    }

    #[test]
    fn test_lonely_cells_die() {
        let live = set(&[(10, 10), (20, 20), (21, 20)]);
        assert!(step(&live, BOUNDS).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let live = set(&[(4, 5), (5, 5), (6, 5)]);
        let copy = live.clone();
        let _ = step(&live, BOUNDS);
        assert_eq!(live, copy);
    }

    #[test]
    fn test_edge_never_leaks_out_of_bounds() {
        // Vertical blinker on the left wall would spawn at x = -1
        let live = set(&[(0, 4), (0, 5), (0, 6)]);
        let next = step(&live, BOUNDS);
        assert!(next.iter().all(|c| BOUNDS.contains(c)));
        assert_eq!(next, set(&[(0, 5), (1, 5)]));
    }

    #[test]
    fn test_glider_translates() {
        let glider = presets::glider().cells_at(Cell::new(100, 100));
        let mut live = glider.clone();
        for _ in 0..4 {
            live = step(&live, BOUNDS);
        }
        let moved: LiveSet = glider.iter().map(|c| Cell::new(c.x + 1, c.y + 1)).collect();
        assert_eq!(live, moved);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut live = LiveSet::new();
        for i in 0..400 {
            live.insert(Cell::new(i % 50, (i * 7) % 50));
        }
        let mut serial = live.clone();
        let mut parallel = live;
        for _ in 0..10 {
            serial = step(&serial, BOUNDS);
            parallel = step_parallel(&parallel, BOUNDS);
            assert_eq!(serial, parallel);
        }
    }

    /// Dense reference: count neighbors by membership for every cell in the
    /// padded bounding box.
    fn reference_step(live: &LiveSet, bounds: GridBounds) -> LiveSet {
        let Some(min_x) = live.iter().map(|c| c.x).min() else {
            return LiveSet::new();
        };
        let max_x = live.iter().map(|c| c.x).max().unwrap();
        let min_y = live.iter().map(|c| c.y).min().unwrap();
        let max_y = live.iter().map(|c| c.y).max().unwrap();
        let mut next = LiveSet::new();
        for y in (min_y - 1)..=(max_y + 1) {
            for x in (min_x - 1)..=(max_x + 1) {
                let cell = Cell::new(x, y);
                if !bounds.contains(cell) {
                    continue;
                }
                let n = cell.neighbors().filter(|&c| live.contains(c)).count() as u8;
                if next_state(live.contains(cell), n) {
                    next.insert(cell);
                }
            }
        }
        next
    }

    proptest! {
        #[test]
        fn prop_matches_dense_reference(cells in prop::collection::vec((0i32..24, 0i32..24), 0..120)) {
            let live: LiveSet = cells.into_iter().map(Cell::from).collect();
            prop_assert_eq!(step(&live, BOUNDS), reference_step(&live, BOUNDS));
        }

        #[test]
        fn prop_parallel_matches_serial(cells in prop::collection::vec((0i32..32, 0i32..32), 0..200)) {
            let live: LiveSet = cells.into_iter().map(Cell::from).collect();
            prop_assert_eq!(step_parallel(&live, BOUNDS), step(&live, BOUNDS));
        }

        #[test]
        fn prop_block_is_stable_anywhere(x in 0i32..998, y in 0i32..998) {
            let block = presets::block().cells_at(Cell::new(x, y));
            prop_assert_eq!(step(&step(&block, BOUNDS), BOUNDS), block);
        }
    }
}
