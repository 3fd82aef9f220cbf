use thiserror::Error;

use crate::domain::Region;

/// Errors raised when a configuration cannot drive the simulation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
    #[error("viewport {width}x{height} does not fit in grid {grid_width}x{grid_height}")]
    ViewportTooLarge {
        width: i32,
        height: i32,
        grid_width: i32,
        grid_height: i32,
    },
    #[error("buffer multiplier {multiplier} times viewport extent {extent} overflows")]
    BufferOverflow { multiplier: i32, extent: i32 },
    #[error("region size {0} must be even")]
    OddRegionSize(i32),
    #[error("grid must hold at least 3 regions per axis, got {tiles} along {axis}")]
    GridTooSmall { axis: &'static str, tiles: i32 },
    #[error("seed density {0} must be in (0, {max}]", max = crate::config::MAX_SEED_DENSITY)]
    InvalidDensity(f64),
    #[error("region {region:?} stalled after {attempts} attempts ({placed}/{target} cells placed)")]
    SeedingStalled {
        region: Region,
        attempts: usize,
        placed: usize,
        target: usize,
    },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
