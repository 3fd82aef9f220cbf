/// Cell is a coordinate on the grid. A cell is alive when it is
/// present in the live set and dead otherwise; it carries no other state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offsets of the eight surrounding cells (Moore neighborhood)
    pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0),           (1, 0),
        (-1, 1),  (0, 1),  (1, 1),
    ];

    /// Iterate the eight neighbors of this cell, unclipped
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        Self::NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Cell::new(self.x + dx, self.y + dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Half-open axis-aligned rectangle [x0, x1) x [y0, y1)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x0: x, y0: y, x1: x + width, y1: y + height }
    }

    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub const fn area(&self) -> usize {
        if self.x1 <= self.x0 || self.y1 <= self.y0 {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x0 && cell.x < self.x1 && cell.y >= self.y0 && cell.y < self.y1
    }

    /// Row-major iteration over every cell of the rectangle
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| Cell::new(x, y)))
    }
}

/// Extent of the finite universe, [0, width) x [0, height)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub const fn contains_rect(&self, rect: &Rect) -> bool {
        rect.x0 >= 0 && rect.y0 >= 0 && rect.x1 <= self.width && rect.y1 <= self.height
    }
}
