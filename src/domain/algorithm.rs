//! Selects which evolution implementation drives the simulation.

use super::{GridBounds, LiveSet, evolution};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Single HashMap neighbor tally
    #[default]
    Serial,
    /// Per-worker tallies on rayon, merged at the end
    Parallel,
}

impl Algorithm {
    pub const fn from_parallel(parallel: bool) -> Self {
        if parallel { Algorithm::Parallel } else { Algorithm::Serial }
    }

    /// Display name for the stats overlay
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Sparse",
            Algorithm::Parallel => "Sparse+Par",
        }
    }

    pub fn step(&self, live: &LiveSet, bounds: GridBounds) -> LiveSet {
        match self {
            Algorithm::Serial => evolution::step(live, bounds),
            Algorithm::Parallel => evolution::step_parallel(live, bounds),
        }
    }
}
