//! Fixed-interval driver loop
//!
//! Owns everything the engine deliberately does not: frame pacing, keyboard
//! handling, and exit policy. Per frame, in the original program's order:
//! hash and record the state, count live cells, draw, check exit
//! conditions, pace, then step.

use std::time::{Duration, Instant};

use crate::core::{Generation, Result, SimulationConfig};
use crate::engine::Engine;
use crate::render::{InputEvent, Render};

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Configured iteration limit reached
    MaxIterations,
    /// Auto-exit: no live cells remain
    AllCellsDead,
    /// Auto-exit: repeated states exhausted the tolerance budget
    RepetitionLimit,
    /// User pressed a quit key
    UserQuit,
}

/// Runs the simulation until an exit condition fires
///
/// The repetition budget counts every repeated-state observation across the
/// whole run, not consecutive repeats only: each repeat costs 1, and a
/// repeat observed with the budget already spent ends the run.
pub fn run(
    engine: &mut Engine,
    renderer: &mut dyn Render,
    config: &SimulationConfig,
) -> Result<ExitReason> {
    let interval = Duration::from_secs_f64(1.0 / config.target_framerate);
    let mut budget = config.repetition_tolerance;

    loop {
        let frame_start = Instant::now();

        let hash = engine.compute_hash();
        let repeat = engine.record_and_check_repetition();
        let live = engine.live_cell_count();
        let t = engine.generation();

        renderer.draw(engine.world(), &format_status(t, live, hash, repeat))?;

        if config.wait_on_start && t == 0 {
            renderer.wait_for_key()?;
        }

        if config.auto_exit {
            if repeat.is_some() {
                if budget == 0 {
                    tracing::info!(generation = t, "repetition tolerance exhausted");
                    return Ok(ExitReason::RepetitionLimit);
                }
                budget -= 1;
            }
            if live == 0 {
                tracing::info!(generation = t, "all cells dead");
                return Ok(ExitReason::AllCellsDead);
            }
        }
        if config.max_iterations != 0 && t >= config.max_iterations {
            tracing::info!(generation = t, "iteration limit reached");
            return Ok(ExitReason::MaxIterations);
        }

        if let Some(reason) = pace(renderer, frame_start + interval)? {
            return Ok(reason);
        }

        engine.step();
    }
}

/// Sleeps out the rest of the frame, servicing keyboard input meanwhile
///
/// Returns an exit reason if the user quit, `None` when the frame deadline
/// passed. Pausing holds here, before the next step, so the displayed frame
/// stays consistent with the engine state.
fn pace(renderer: &mut dyn Render, deadline: Instant) -> Result<Option<ExitReason>> {
    let mut paused = false;
    loop {
        let timeout = if paused {
            // no deadline while paused; just keep the keyboard responsive
            Duration::from_millis(100)
        } else {
            deadline.saturating_duration_since(Instant::now())
        };
        match renderer.poll_input(timeout)? {
            Some(InputEvent::Quit) => {
                tracing::info!("quit requested");
                return Ok(Some(ExitReason::UserQuit));
            }
            Some(InputEvent::TogglePause) => paused = !paused,
            Some(InputEvent::Other) => {}
            None if paused => {}
            None => return Ok(None),
        }
        if !paused && Instant::now() >= deadline {
            return Ok(None);
        }
    }
}

fn format_status(t: Generation, live: usize, hash: u64, repeat: Option<Generation>) -> String {
    let mut status = format!("t={t} | live cells: {live} | hash: {hash:016x}");
    if let Some(first) = repeat {
        status.push_str(&format!(" | repeat of t={first} (t-{})", t - first));
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SeedSource;
    use crate::pattern::{Anchor, Pattern};
    use crate::render::HeadlessRender;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fast_config() -> SimulationConfig {
        SimulationConfig {
            target_framerate: 1000.0,
            ..SimulationConfig::default()
        }
    }

    fn blinker_engine() -> Engine {
        let pattern = Pattern::parse("OOO").unwrap();
        Engine::new(
            11,
            11,
            &SeedSource::Pattern {
                pattern: &pattern,
                anchor: Anchor::default(),
            },
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap()
    }

    #[test]
    fn test_exit_on_iteration_limit() {
        let mut engine = blinker_engine();
        let config = SimulationConfig {
            max_iterations: 5,
            ..fast_config()
        };
        let reason = run(&mut engine, &mut HeadlessRender, &config).unwrap();
        assert_eq!(reason, ExitReason::MaxIterations);
        assert_eq!(engine.generation(), 5);
    }

    #[test]
    fn test_exit_on_all_dead() {
        // a lone cell dies after one step
        let pattern = Pattern::parse("O").unwrap();
        let mut engine = Engine::new(
            10,
            10,
            &SeedSource::Pattern {
                pattern: &pattern,
                anchor: Anchor::default(),
            },
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();
        let config = SimulationConfig {
            auto_exit: true,
            ..fast_config()
        };
        let reason = run(&mut engine, &mut HeadlessRender, &config).unwrap();
        assert_eq!(reason, ExitReason::AllCellsDead);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_exit_on_repetition_budget() {
        let mut engine = blinker_engine();
        let config = SimulationConfig {
            auto_exit: true,
            repetition_tolerance: 0,
            ..fast_config()
        };
        let reason = run(&mut engine, &mut HeadlessRender, &config).unwrap();
        assert_eq!(reason, ExitReason::RepetitionLimit);
        // blinker period is 2: first repeat observed at t=2
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_repetition_budget_counts_every_repeat() {
        let mut engine = blinker_engine();
        let config = SimulationConfig {
            auto_exit: true,
            repetition_tolerance: 3,
            ..fast_config()
        };
        let reason = run(&mut engine, &mut HeadlessRender, &config).unwrap();
        assert_eq!(reason, ExitReason::RepetitionLimit);
        // repeats at t=2,3,4 spend the budget; the repeat at t=5 exits
        assert_eq!(engine.generation(), 5);
    }

    #[test]
    fn test_status_line_formats_repeat() {
        assert_eq!(
            format_status(12, 34, 0xabcd, Some(4)),
            "t=12 | live cells: 34 | hash: 000000000000abcd | repeat of t=4 (t-8)"
        );
        assert_eq!(
            format_status(0, 9, 1, None),
            "t=0 | live cells: 9 | hash: 0000000000000001"
        );
    }
}
