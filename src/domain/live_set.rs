//! Sparse storage of live cells.
//!
//! Only live coordinates are kept, so memory follows the population and not
//! the nominal grid size.

use std::collections::HashSet;

use super::{Cell, Rect};

/// The set of currently live cells. Order is irrelevant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiveSet {
    cells: HashSet<Cell>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell alive. Returns false if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Union a batch of cells into the set
    pub fn insert_all(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.cells.extend(cells);
    }

    /// Remove a batch of cells from the set
    pub fn remove_all(&mut self, cells: impl IntoIterator<Item = Cell>) {
        for cell in cells {
            self.cells.remove(&cell);
        }
    }

    /// Kill every cell inside `rect`. Walks whichever is smaller, the
    /// rectangle or the population. Returns the number of cells removed.
    pub fn clear_rect(&mut self, rect: Rect) -> usize {
        let before = self.cells.len();
        if rect.area() <= before {
            self.remove_all(rect.cells());
        } else {
            self.cells.retain(|&cell| !rect.contains(cell));
        }
        before - self.cells.len()
    }

    /// Live cells inside `rect`, in no particular order
    pub fn cells_in(&self, rect: Rect) -> Vec<Cell> {
        if rect.area() < self.cells.len() {
            rect.cells().filter(|&cell| self.contains(cell)).collect()
        } else {
            self.iter().filter(|&cell| rect.contains(cell)).collect()
        }
    }

    pub fn count_in(&self, rect: Rect) -> usize {
        if rect.area() < self.cells.len() {
            rect.cells().filter(|&cell| self.contains(cell)).count()
        } else {
            self.iter().filter(|&cell| rect.contains(cell)).count()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn as_set(&self) -> &HashSet<Cell> {
        &self.cells
    }
}

impl FromIterator<Cell> for LiveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl From<HashSet<Cell>> for LiveSet {
    fn from(cells: HashSet<Cell>) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut live = LiveSet::new();
        assert!(live.insert(Cell::new(1, 2)));
        assert!(!live.insert(Cell::new(1, 2)));
        assert_eq!(live.len(), 1);
        assert!(live.contains(Cell::new(1, 2)));
        assert!(!live.contains(Cell::new(2, 1)));
    }

    #[test]
    fn test_union_and_difference() {
        let mut live: LiveSet = [(0, 0), (1, 1)].into_iter().map(|(x, y)| Cell::new(x, y)).collect();
        live.insert_all([Cell::new(1, 1), Cell::new(2, 2)]);
        assert_eq!(live.len(), 3);

        live.remove_all([Cell::new(0, 0), Cell::new(9, 9)]);
        assert_eq!(live.len(), 2);
        assert!(!live.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_clear_rect_small_population() {
        // Population smaller than the rectangle takes the retain path
        let mut live: LiveSet = [(5, 5), (50, 50), (10, 10)].into_iter().map(|(x, y)| Cell::new(x, y)).collect();
        let removed = live.clear_rect(Rect::new(0, 0, 20, 20));
        assert_eq!(removed, 2);
        assert_eq!(live.len(), 1);
        assert!(live.contains(Cell::new(50, 50)));
    }

    #[test]
    fn test_clear_rect_large_population() {
        // Dense population larger than the rectangle walks the rectangle
        let mut live: LiveSet = Rect::new(0, 0, 30, 30).cells().collect();
        let removed = live.clear_rect(Rect::new(10, 10, 5, 5));
        assert_eq!(removed, 25);
        assert_eq!(live.len(), 900 - 25);
        assert_eq!(live.count_in(Rect::new(10, 10, 5, 5)), 0);
    }

    #[test]
    fn test_cells_in() {
        let live: LiveSet = [(1, 1), (3, 3), (8, 8)].into_iter().map(|(x, y)| Cell::new(x, y)).collect();
        let mut inside = live.cells_in(Rect::new(0, 0, 5, 5));
        inside.sort();
        assert_eq!(inside, vec![Cell::new(1, 1), Cell::new(3, 3)]);
        assert_eq!(live.count_in(Rect::new(0, 0, 2, 2)), 1);
    }
}
