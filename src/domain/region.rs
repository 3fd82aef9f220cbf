//! Region geometry and stochastic seeding.
//!
//! The grid is tiled by squares of side `size`. Tile `(kx, ky)` covers
//! `[kx * size, (kx + 1) * size)` on each axis and is identified by its
//! center `(kx * size + size / 2, ky * size + size / 2)`. Only whole tiles
//! are ever used, so a trailing strip narrower than `size` at the far edge
//! of the grid is never seeded.

use std::collections::HashSet;

use rand::Rng;

use super::{Cell, GridBounds, Rect};
use crate::error::ConfigError;

/// A region, identified by the center of its tile
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Region {
    pub cx: i32,
    pub cy: i32,
}

impl Region {
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }

    /// Cells covered by a region of side `size`
    pub const fn footprint(&self, size: i32) -> Rect {
        let half = size / 2;
        Rect::new(self.cx - half, self.cy - half, size, size)
    }
}

/// Tiling of the grid into regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionGrid {
    pub size: i32,
    pub bounds: GridBounds,
}

impl RegionGrid {
    pub const fn new(size: i32, bounds: GridBounds) -> Self {
        Self { size, bounds }
    }

    /// Whole tiles along each axis
    pub const fn tiles(&self) -> (i32, i32) {
        (self.bounds.width / self.size, self.bounds.height / self.size)
    }

    pub const fn region_at_tile(&self, kx: i32, ky: i32) -> Region {
        let half = self.size / 2;
        Region::new(kx * self.size + half, ky * self.size + half)
    }

    /// The 3x3 block of regions around `focus`.
    ///
    /// The block is shifted inward at the grid edges so all nine regions
    /// stay inside the grid; the region containing `focus` is always part
    /// of it. Returned in row-major order.
    pub fn neighborhood(&self, focus: Cell) -> Vec<Region> {
        let (tx, ty) = self.tiles();
        debug_assert!(tx >= 3 && ty >= 3, "grid must hold 3 regions per axis");
        let kx = (focus.x.max(0) / self.size).clamp(1, tx - 2);
        let ky = (focus.y.max(0) / self.size).clamp(1, ty - 2);

        let half = self.size / 2;
        let max_cx = self.bounds.width - half;
        let max_cy = self.bounds.height - half;
        let mut regions = Vec::with_capacity(9);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let region = self.region_at_tile(kx + dx, ky + dy);
                let region = Region::new(region.cx.clamp(half, max_cx), region.cy.clamp(half, max_cy));
                if !regions.contains(&region) {
                    regions.push(region);
                }
            }
        }
        regions
    }
}

/// Draw `target` distinct random cells inside `rect` by rejection sampling.
///
/// Gives up with [`ConfigError::SeedingStalled`] after
/// `target * attempt_factor` draws.
pub fn sample_cells<R: Rng>(
    rng: &mut R,
    region: Region,
    rect: Rect,
    target: usize,
    attempt_factor: usize,
) -> Result<HashSet<Cell>, ConfigError> {
    let max_attempts = if rect.area() < target { 0 } else { target.saturating_mul(attempt_factor) };
    let mut cells = HashSet::with_capacity(target);
    let mut attempts = 0;
    while cells.len() < target {
        if attempts >= max_attempts {
            return Err(ConfigError::SeedingStalled {
                region,
                attempts,
                placed: cells.len(),
                target,
            });
        }
        attempts += 1;
        let x = rng.random_range(rect.x0..rect.x1);
        let y = rng.random_range(rect.y0..rect.y1);
        cells.insert(Cell::new(x, y));
    }
    Ok(cells)
}
