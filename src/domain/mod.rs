mod cell;
mod live_set;
mod patterns;
mod algorithm;
pub mod evolution;
pub mod region;
pub mod region_manager;

pub use cell::{Cell, GridBounds, Rect};
pub use live_set::LiveSet;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use evolution::{next_state, step, step_parallel};
pub use region::{Region, RegionGrid};
pub use region_manager::{RegionManager, RegionState, RegionUpdate};
