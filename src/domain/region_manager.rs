//! Lazy materialization of the grid around the viewport.
//!
//! Each region moves through three states:
//!
//! ```text
//! Uninitialized --(enters 3x3 neighborhood)--> Initialized
//! Initialized   --(outside buffer, > min tracked)--> CoolingDown
//! CoolingDown   --(periodic cooldown clear)--> Uninitialized
//! ```
//!
//! Seeding unions random cells into the live set; eviction wipes the
//! region's footprint. Cells that evolution carries across a region border
//! are not tracked, they simply live or die with the tiles they land in.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::region::{RegionGrid, sample_cells};
use super::{Cell, LiveSet, Rect, Region};
use crate::config::SimConfig;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionState {
    Uninitialized,
    Initialized,
    CoolingDown,
}

/// What a single [`RegionManager::update`] changed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionUpdate {
    pub seeded: Vec<Region>,
    pub evicted: Option<Region>,
}

impl RegionUpdate {
    pub fn is_empty(&self) -> bool {
        self.seeded.is_empty() && self.evicted.is_none()
    }
}

pub struct RegionManager {
    grid: RegionGrid,
    seed_target: usize,
    attempt_factor: usize,
    buffer: i32,
    min_tracked: usize,
    initialized: BTreeSet<Region>,
    cooling: BTreeSet<Region>,
    rng: StdRng,
}

impl RegionManager {
    /// Build a manager from a validated config. Uses `config.seed` when set,
    /// OS entropy otherwise.
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &SimConfig, rng: StdRng) -> Self {
        Self {
            grid: RegionGrid::new(config.region_size, config.bounds()),
            seed_target: config.seed_target(),
            attempt_factor: config.seed_attempt_factor,
            buffer: config.buffer(),
            min_tracked: config.min_tracked_regions,
            initialized: BTreeSet::new(),
            cooling: BTreeSet::new(),
            rng,
        }
    }

    pub fn state(&self, region: Region) -> RegionState {
        if self.initialized.contains(&region) {
            RegionState::Initialized
        } else if self.cooling.contains(&region) {
            RegionState::CoolingDown
        } else {
            RegionState::Uninitialized
        }
    }

    /// Regions currently tracked as initialized, in coordinate order
    pub fn initialized(&self) -> impl Iterator<Item = Region> + '_ {
        self.initialized.iter().copied()
    }

    pub fn tracked_count(&self) -> usize {
        self.initialized.len()
    }

    pub fn cooling_count(&self) -> usize {
        self.cooling.len()
    }

    /// Seed every fresh region around `view`, then evict at most one stale
    /// region. Regions of the current 3x3 neighborhood are exempt from
    /// eviction on purpose: at the grid edge the shifted block reaches past
    /// the buffer, and evicting it would reseed it again right away.
    pub fn update(&mut self, view: Rect, live: &mut LiveSet) -> Result<RegionUpdate, ConfigError> {
        let focus = Cell::new(view.x0 + view.width() / 2, view.y0 + view.height() / 2);
        let neighborhood = self.grid.neighborhood(focus);
        let mut report = RegionUpdate::default();

        for &region in &neighborhood {
            if self.state(region) == RegionState::Uninitialized {
                self.seed(region, live)?;
                report.seeded.push(region);
            }
        }

        report.evicted = self.evict_one(view, &neighborhood, live);
        Ok(report)
    }

    /// Populate `region` at the configured density and mark it initialized
    pub fn seed(&mut self, region: Region, live: &mut LiveSet) -> Result<usize, ConfigError> {
        let rect = region.footprint(self.grid.size);
        debug_assert!(self.grid.bounds.contains_rect(&rect), "region {region:?} leaves the grid");

        let cells = sample_cells(&mut self.rng, region, rect, self.seed_target, self.attempt_factor)?;
        let placed = cells.len();
        live.insert_all(cells);
        self.initialized.insert(region);
        log::debug!("Seeded region ({}, {}) with {} cells", region.cx, region.cy, placed);
        Ok(placed)
    }

    /// True when the region center lies beyond the buffer around `view`
    pub fn is_stale(&self, region: Region, view: Rect) -> bool {
        region.cx < view.x0.saturating_sub(self.buffer)
            || region.cx > view.x1.saturating_add(self.buffer)
            || region.cy < view.y0.saturating_sub(self.buffer)
            || region.cy > view.y1.saturating_add(self.buffer)
    }

    /// Evict the stale region farthest from the viewport center. Ties go to
    /// the smallest coordinate. Regions of the current neighborhood are never
    /// evicted, and nothing happens while `min_tracked` or fewer regions are
    /// tracked.
    fn evict_one(&mut self, view: Rect, neighborhood: &[Region], live: &mut LiveSet) -> Option<Region> {
        if self.initialized.len() <= self.min_tracked {
            return None;
        }
        let cx = i64::from(view.x0) + i64::from(view.width()) / 2;
        let cy = i64::from(view.y0) + i64::from(view.height()) / 2;
        let victim = self
            .initialized
            .iter()
            .copied()
            .filter(|region| !neighborhood.contains(region))
            .filter(|&region| self.is_stale(region, view))
            .max_by_key(|region| {
                let dx = i64::from(region.cx) - cx;
                let dy = i64::from(region.cy) - cy;
                (dx * dx + dy * dy, Reverse(*region))
            })?;

        self.evict(victim, live);
        Some(victim)
    }

    /// Wipe the region's footprint and put it on cooldown
    pub fn evict(&mut self, region: Region, live: &mut LiveSet) -> usize {
        let removed = live.clear_rect(region.footprint(self.grid.size));
        self.initialized.remove(&region);
        self.cooling.insert(region);
        log::info!("Removed region ({}, {}), {} cells dropped", region.cx, region.cy, removed);
        removed
    }

    /// Let every cooling region be seeded again. Returns how many were freed.
    pub fn clear_cooldown(&mut self) -> usize {
        let freed = self.cooling.len();
        self.cooling.clear();
        freed
    }
}
