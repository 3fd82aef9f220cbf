// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Frame loop coordination
pub mod application;

// Ambient configuration and errors
pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, Region, RegionManager, presets, step};
pub use application::{Direction, Simulation, Viewport};
pub use config::SimConfig;
pub use error::ConfigError;
