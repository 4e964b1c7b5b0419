//! Simulation configuration with documented defaults
//!
//! All tunable values are collected here with explanations of their purpose.
//! The CLI populates this struct; library users can build it directly.

use crate::pattern::Anchor;

/// Configuration for a simulation run
///
/// Defaults reproduce the behavior of running the simulator with no
/// arguments: a random world filling the terminal, 10 frames per second,
/// running until interrupted.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// World dimensions, `None` means derive from the terminal size
    ///
    /// Both dimensions must be greater than 5; the engine rejects smaller
    /// worlds since a pattern plus its mandatory 1-cell border cannot fit.
    pub shape: Option<(usize, usize)>,

    /// Maximum number of generations to simulate
    ///
    /// 0 means unbounded; the run then ends only via auto-exit or user input.
    pub max_iterations: u64,

    /// Target frames (generations) per second
    ///
    /// The driver sleeps for whatever remains of the frame interval after
    /// compute and render time. Must be greater than zero.
    pub target_framerate: f64,

    /// Exit automatically when the world dies out or keeps repeating
    pub auto_exit: bool,

    /// Repeated-state budget for auto-exit
    ///
    /// Every observation of a previously seen world state costs 1 from this
    /// budget, whether or not the repeats are consecutive. A repeat observed
    /// with the budget exhausted ends the run.
    pub repetition_tolerance: u32,

    /// Probability that a cell starts live under random seeding
    pub seed_density: f64,

    /// RNG seed for random worlds, `None` picks one at startup
    ///
    /// Recorded in the startup log so any run can be reproduced.
    pub seed: Option<u64>,

    /// Where a loaded pattern is placed within the world
    pub anchor: Anchor,

    /// Pause after drawing generation 0 until a key is pressed
    pub wait_on_start: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            shape: None,
            max_iterations: 0,
            target_framerate: 10.0,
            auto_exit: false,
            repetition_tolerance: 20,
            seed_density: 0.2,
            seed: None,
            anchor: Anchor::default(),
            wait_on_start: false,
        }
    }
}
