use crate::config::NavSteps;
use crate::domain::{Cell, GridBounds, Rect};

/// Navigation command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Viewport is the rectangle of the grid currently observed.
/// Its size is fixed; only the top-left corner moves, and it never leaves
/// the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    bounds: GridBounds,
}

impl Viewport {
    pub fn new(width: i32, height: i32, bounds: GridBounds) -> Self {
        Self { x: 0, y: 0, width, height, bounds }
    }

    pub const fn max_x(&self) -> i32 {
        self.bounds.width - self.width
    }

    pub const fn max_y(&self) -> i32 {
        self.bounds.height - self.height
    }

    /// Jump to a position, clamped to the grid
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x.clamp(0, self.max_x());
        self.y = y.clamp(0, self.max_y());
    }

    /// Shift by a signed delta, clamped to the grid
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.move_to(self.x.saturating_add(dx), self.y.saturating_add(dy));
    }

    /// Apply a navigation command using the configured step sizes
    pub fn step(&mut self, direction: Direction, steps: &NavSteps) {
        match direction {
            Direction::Left => self.pan(-steps.left, 0),
            Direction::Right => self.pan(steps.right, 0),
            Direction::Up => self.pan(0, -steps.up),
            Direction::Down => self.pan(0, steps.down),
        }
    }

    pub const fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub const fn center(&self) -> Cell {
        Cell::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Convert a grid cell to a pixel position relative to the viewport
    pub fn grid_to_screen(&self, cell: Cell, cell_size: f32) -> (f32, f32) {
        (
            (cell.x - self.x) as f32 * cell_size,
            (cell.y - self.y) as f32 * cell_size,
        )
    }

    /// Back to the top-left corner of the grid
    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(500, 400, GridBounds::new(1_000_000, 1_000_000))
    }

    #[test]
    fn test_moves_use_configured_steps() {
        let steps = NavSteps::default();
        let mut vp = viewport();
        vp.step(Direction::Right, &steps);
        vp.step(Direction::Down, &steps);
        assert_eq!((vp.x, vp.y), (30, 30));
        vp.step(Direction::Up, &steps);
        assert_eq!(vp.y, 0);
    }

    #[test]
    fn test_clamps_at_origin() {
        let steps = NavSteps::default();
        let mut vp = viewport();
        vp.move_to(500, 10);
        vp.step(Direction::Left, &steps);
        vp.step(Direction::Up, &steps);
        assert_eq!((vp.x, vp.y), (0, 0));
    }

    #[test]
    fn test_clamps_at_far_edge() {
        let steps = NavSteps::default();
        let mut vp = viewport();
        vp.move_to(i32::MAX, i32::MAX);
        assert_eq!((vp.x, vp.y), (999_500, 999_600));
        vp.step(Direction::Right, &steps);
        vp.step(Direction::Down, &steps);
        assert_eq!((vp.x, vp.y), (999_500, 999_600));
        assert_eq!(vp.rect().x1, 1_000_000);
    }

    #[test]
    fn test_center_and_screen_mapping() {
        let mut vp = viewport();
        vp.move_to(100, 200);
        assert_eq!(vp.center(), Cell::new(350, 400));
        assert_eq!(vp.grid_to_screen(Cell::new(110, 205), 2.0), (20.0, 10.0));
    }

    #[test]
    fn test_reset() {
        let mut vp = viewport();
        vp.move_to(1234, 5678);
        vp.reset();
        assert_eq!(vp.rect(), Rect::new(0, 0, 500, 400));
    }
}
