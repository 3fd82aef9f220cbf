//! Simulation options.
//!
//! Defaults reproduce the classic million-cell setup. Any subset of fields
//! can be overridden from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::GridBounds;
use crate::error::ConfigError;

/// Densities above this make rejection sampling degrade badly.
pub const MAX_SEED_DENSITY: f64 = 0.5;

/// Viewport step per navigation command, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSteps {
    pub left: i32,
    pub right: i32,
    pub up: i32,
    pub down: i32,
}

impl Default for NavSteps {
    fn default() -> Self {
        Self {
            left: 1000,
            right: 30,
            up: 30,
            down: 30,
        }
    }
}

/// Every tunable of the simulation and its frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Side length of a region, in cells
    pub region_size: i32,
    /// Fraction of a region's cells that are alive after seeding
    pub seed_density: f64,
    /// Frames between evolution steps
    pub update_interval: u64,
    /// Eviction buffer = multiplier * max(viewport width, viewport height)
    pub buffer_multiplier: i32,
    /// Frames between full clears of the cooldown set
    pub cooldown_period: u64,
    /// Eviction only happens while more regions than this are tracked
    pub min_tracked_regions: usize,
    /// Rejection sampling gives up after target * factor draws
    pub seed_attempt_factor: usize,
    pub nav: NavSteps,
    pub cell_size: f32,
    pub grid_line_spacing: i32,
    pub parallel_evolution: bool,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: 1_000_000,
            grid_height: 1_000_000,
            viewport_width: 500,
            viewport_height: 400,
            region_size: 600,
            seed_density: 0.05,
            update_interval: 5,
            buffer_multiplier: 2,
            cooldown_period: 100,
            min_tracked_regions: 6,
            seed_attempt_factor: 64,
            nav: NavSteps::default(),
            cell_size: 2.0,
            grid_line_spacing: 100,
            parallel_evolution: false,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("region_size", self.region_size),
            ("buffer_multiplier", self.buffer_multiplier),
            ("grid_line_spacing", self.grid_line_spacing),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= 0) {
            return Err(ConfigError::Zero { name: *name });
        }
        if self.update_interval == 0 {
            return Err(ConfigError::Zero { name: "update_interval" });
        }
        if self.cooldown_period == 0 {
            return Err(ConfigError::Zero { name: "cooldown_period" });
        }
        if self.seed_attempt_factor == 0 {
            return Err(ConfigError::Zero { name: "seed_attempt_factor" });
        }
        if self.viewport_width > self.grid_width || self.viewport_height > self.grid_height {
            return Err(ConfigError::ViewportTooLarge {
                width: self.viewport_width,
                height: self.viewport_height,
                grid_width: self.grid_width,
                grid_height: self.grid_height,
            });
        }
        let extent = self.viewport_width.max(self.viewport_height);
        if self.buffer_multiplier.checked_mul(extent).is_none() {
            return Err(ConfigError::BufferOverflow {
                multiplier: self.buffer_multiplier,
                extent,
            });
        }
        if self.region_size % 2 != 0 {
            return Err(ConfigError::OddRegionSize(self.region_size));
        }
        for (axis, extent) in [("x", self.grid_width), ("y", self.grid_height)] {
            let tiles = extent / self.region_size;
            if tiles < 3 {
                return Err(ConfigError::GridTooSmall { axis, tiles });
            }
        }
        if !(self.seed_density > 0.0 && self.seed_density <= MAX_SEED_DENSITY) {
            return Err(ConfigError::InvalidDensity(self.seed_density));
        }
        Ok(())
    }

    pub const fn bounds(&self) -> GridBounds {
        GridBounds::new(self.grid_width, self.grid_height)
    }

    /// Distance beyond the viewport edges at which regions get evicted
    pub fn buffer(&self) -> i32 {
        self.buffer_multiplier.saturating_mul(self.viewport_width.max(self.viewport_height))
    }

    /// Window size in pixels needed to show the whole viewport
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.viewport_width as f32 * self.cell_size) as i32,
            (self.viewport_height as f32 * self.cell_size) as i32,
        )
    }

    /// Live cells placed into every freshly seeded region
    pub fn seed_target(&self) -> usize {
        let area = self.region_size as f64 * self.region_size as f64;
        (area * self.seed_density).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.buffer(), 1000);
        assert_eq!(config.seed_target(), 18_000);
    }

    #[test]
    fn test_rejects_dense_seeding() {
        let config = SimConfig {
            seed_density: 0.9,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidDensity(_))));
    }

    #[test]
    fn test_rejects_overflowing_buffer() {
        let config = SimConfig {
            buffer_multiplier: i32::MAX,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BufferOverflow { multiplier: i32::MAX, extent: 500 })
        ));
        // Never panics even when validation is skipped
        assert_eq!(config.buffer(), i32::MAX);
    }

    #[test]
    fn test_window_follows_viewport() {
        assert_eq!(SimConfig::default().window_size(), (1000, 800));
        let config = SimConfig::from_json_str(r#"{ "viewport_width": 800, "cell_size": 1.5 }"#).unwrap();
        assert_eq!(config.window_size(), (1200, 600));
    }

    #[test]
    fn test_rejects_odd_region() {
        let config = SimConfig {
            region_size: 601,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::OddRegionSize(601))));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let config = SimConfig {
            grid_width: 1000,
            grid_height: 1000,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GridTooSmall { axis: "x", tiles: 1 })
        ));
    }

    #[test]
    fn test_rejects_oversized_viewport() {
        let config = SimConfig {
            viewport_width: 2_000_000,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ViewportTooLarge { .. })));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SimConfig::from_json_str(r#"{ "seed_density": 0.1, "nav": { "left": 30 } }"#)
            .unwrap();
        assert_eq!(config.seed_density, 0.1);
        assert_eq!(config.nav.left, 30);
        assert_eq!(config.nav.right, 30);
        assert_eq!(config.region_size, 600);
    }

    #[test]
    fn test_json_is_validated() {
        let result = SimConfig::from_json_str(r#"{ "update_interval": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Zero { name: "update_interval" })));
    }
}
