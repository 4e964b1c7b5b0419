//! Cellular-automaton engine: world update, hashing, repetition bookkeeping
//!
//! The engine owns its grid, generation counter, and state history, and is
//! passed explicitly to the driver loop. The update rule is the classic
//! B3/S23 with a zero-padding boundary: a live cell survives on exactly 2 or
//! 3 live neighbors, a dead cell births on exactly 3, and cells outside the
//! grid always count as dead.

mod history;
mod world;

pub use history::StateHistory;
pub use world::World;

use ahash::RandomState;
use rand::Rng;

use crate::core::error::{LifeError, Result};
use crate::core::Generation;
use crate::pattern::{Anchor, Pattern};

/// Fixed hasher keys. The world hash must be a pure function of cell
/// contents, so the per-process key randomization of the default
/// `RandomState` is deliberately bypassed.
const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// How the initial world is populated
#[derive(Debug, Clone, Copy)]
pub enum SeedSource<'a> {
    /// Each cell independently live with probability `density`
    Random { density: f64 },
    /// A parsed pattern placed at the given anchor
    Pattern { pattern: &'a Pattern, anchor: Anchor },
}

/// Simulation engine for one run
///
/// Construction seeds the world and yields a ready engine at generation 0
/// with empty history; re-seeding means constructing a new engine.
#[derive(Debug)]
pub struct Engine {
    world: World,
    scratch: World,
    generation: Generation,
    history: StateHistory,
}

impl Engine {
    /// Builds a ready engine with the given world size and seeding
    ///
    /// Fails with `InvalidWorldSize` if either dimension is 5 or less, and
    /// with `PatternTooLarge` if a pattern does not fit inside the world
    /// with a 1-cell border on every side.
    ///
    /// `density` for random seeding must be within `[0, 1]`; the CLI
    /// validates this before construction.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        seed: &SeedSource<'_>,
        rng: &mut R,
    ) -> Result<Self> {
        if width <= 5 || height <= 5 {
            return Err(LifeError::InvalidWorldSize { width, height });
        }

        let mut world = World::new(width, height);
        match *seed {
            SeedSource::Random { density } => {
                for y in 0..height {
                    for x in 0..width {
                        if rng.gen_bool(density) {
                            world.set(x, y, true);
                        }
                    }
                }
            }
            SeedSource::Pattern { pattern, anchor } => {
                let (pw, ph) = (pattern.width(), pattern.height());
                if pw + 2 >= width || ph + 2 >= height {
                    return Err(LifeError::PatternTooLarge {
                        pattern_width: pw,
                        pattern_height: ph,
                        world_width: width,
                        world_height: height,
                    });
                }
                let (ox, oy) = anchor.offsets((width, height), (pw, ph));
                for y in 0..ph {
                    for x in 0..pw {
                        if pattern.is_live(x, y) {
                            world.set(ox + x, oy + y, true);
                        }
                    }
                }
            }
        }

        Ok(Self {
            scratch: World::new(width, height),
            world,
            generation: 0,
            history: StateHistory::new(),
        })
    }

    /// Advances the world by one generation
    ///
    /// Synchronous update semantics: every neighbor count reads the
    /// previous generation only. The next state is written into a scratch
    /// buffer and swapped in, so no cell ever observes a half-updated grid.
    pub fn step(&mut self) {
        let (width, height) = (self.world.width(), self.world.height());
        for y in 0..height {
            for x in 0..width {
                let neighbors = self.world.live_neighbors(x, y);
                let alive = self.world.get(x, y);
                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                self.scratch.set(x, y, next);
            }
        }
        std::mem::swap(&mut self.world, &mut self.scratch);
        self.generation += 1;
    }

    /// Content hash of the current grid
    ///
    /// Row-major bit-packing hashed with fixed keys: two grids with
    /// identical cell contents produce identical hashes, independent of the
    /// generation counter or when the hash is computed.
    pub fn compute_hash(&self) -> u64 {
        let (k0, k1, k2, k3) = HASH_SEEDS;
        RandomState::with_seeds(k0, k1, k2, k3).hash_one(self.world.pack_bits())
    }

    /// Looks up the current state in the history, recording it if new
    ///
    /// Returns the generation at which this exact grid was first observed,
    /// or `None` if it has not been seen before. Grid contents are
    /// untouched.
    pub fn record_and_check_repetition(&mut self) -> Option<Generation> {
        let hash = self.compute_hash();
        self.history.record(hash, self.generation)
    }

    pub fn live_cell_count(&self) -> usize {
        self.world.live_cell_count()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of distinct states observed so far
    pub fn distinct_states(&self) -> usize {
        self.history.len()
    }
}
