use std::time::Instant;

use crate::application::{Direction, Viewport};
use crate::config::SimConfig;
use crate::domain::{Algorithm, Cell, LiveSet, Pattern, RegionManager, RegionUpdate};
use crate::error::ConfigError;

/// What happened during one call to [`Simulation::frame`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub regions: RegionUpdate,
    pub evolved: bool,
    pub cooldown_cleared: bool,
}

/// Simulation owns all state of a run and advances it one frame at a time.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub config: SimConfig,
    pub live: LiveSet,
    pub regions: RegionManager,
    pub viewport: Viewport,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub frame: u64,
    pub generation: u64,
    pub last_evolution_time_ms: f32,
    pub last_region_time_ms: f32,
}

impl Simulation {
    /// Validate the config and seed the regions around the starting viewport
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let regions = RegionManager::new(&config);
        let viewport = Viewport::new(config.viewport_width, config.viewport_height, config.bounds());
        let mut sim = Self {
            algorithm: Algorithm::from_parallel(config.parallel_evolution),
            config,
            live: LiveSet::new(),
            regions,
            viewport,
            is_running: true,
            frame: 0,
            generation: 0,
            last_evolution_time_ms: 0.0,
            last_region_time_ms: 0.0,
        };
        let initial = sim.regions.update(sim.viewport.rect(), &mut sim.live)?;
        log::info!(
            "Seeded {} regions, {} live cells",
            initial.seeded.len(),
            sim.live.len()
        );
        Ok(sim)
    }

    /// Apply a navigation command to the viewport
    pub fn navigate(&mut self, direction: Direction) {
        self.viewport.step(direction, &self.config.nav);
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Advance one frame: stream regions for the current viewport, clear
    /// the cooldown set on schedule, then evolve if this frame is due.
    pub fn frame(&mut self) -> Result<FrameReport, ConfigError> {
        let start = Instant::now();
        let regions = self.regions.update(self.viewport.rect(), &mut self.live)?;
        self.last_region_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        if !regions.is_empty() {
            log::debug!(
                "Regions: {} seeded, {} evicted, {} tracked",
                regions.seeded.len(),
                usize::from(regions.evicted.is_some()),
                self.regions.tracked_count()
            );
        }

        let cooldown_cleared = self.frame % self.config.cooldown_period == 0;
        if cooldown_cleared {
            let freed = self.regions.clear_cooldown();
            if freed > 0 {
                log::debug!("Cooldown cleared, {} regions may be seeded again", freed);
            }
        }

        let evolved = self.is_running && self.frame % self.config.update_interval == 0;
        if evolved {
            self.evolve();
        }

        self.frame += 1;
        Ok(FrameReport { regions, evolved, cooldown_cleared })
    }

    /// Replace the live set with the next generation
    pub fn evolve(&mut self) {
        let start = Instant::now();
        self.live = self.algorithm.step(&self.live, self.config.bounds());
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Stamp a pattern centered on the viewport
    pub fn stamp_pattern(&mut self, pattern: &Pattern) -> usize {
        let center = self.viewport.center();
        let origin = Cell::new(center.x - pattern.width / 2, center.y - pattern.height / 2);
        pattern.place_on(&mut self.live, origin, self.config.bounds())
    }

    /// Live cells inside the viewport, for rendering
    pub fn visible_cells(&self) -> Vec<Cell> {
        self.live.cells_in(self.viewport.rect())
    }
}
