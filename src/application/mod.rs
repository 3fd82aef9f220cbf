mod simulation;
mod viewport;

pub use simulation::{FrameReport, Simulation};
pub use viewport::{Direction, Viewport};
