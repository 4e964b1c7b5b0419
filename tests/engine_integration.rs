//! End-to-end engine behavior: seeding, stepping, hashing, repetition

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use termlife::core::SimulationConfig;
use termlife::driver::{self, ExitReason};
use termlife::engine::{Engine, SeedSource};
use termlife::pattern::{Anchor, Pattern};
use termlife::render::HeadlessRender;

fn engine_from(text: &str, width: usize, height: usize) -> Engine {
    let pattern = Pattern::parse(text).unwrap();
    Engine::new(
        width,
        height,
        &SeedSource::Pattern {
            pattern: &pattern,
            anchor: Anchor::default(),
        },
        &mut ChaCha8Rng::seed_from_u64(0),
    )
    .unwrap()
}

#[test]
fn blinker_cycle_detected_through_driver() {
    // vertical blinker behaves identically to horizontal
    let mut engine = engine_from("O\nO\nO", 11, 11);
    let config = SimulationConfig {
        auto_exit: true,
        repetition_tolerance: 0,
        target_framerate: 1000.0,
        ..SimulationConfig::default()
    };
    let reason = driver::run(&mut engine, &mut HeadlessRender, &config).unwrap();
    assert_eq!(reason, ExitReason::RepetitionLimit);
    assert_eq!(engine.generation(), 2);
    assert_eq!(engine.live_cell_count(), 3);
}

#[test]
fn r_pentomino_runs_bounded() {
    let mut engine = engine_from(".OO\nOO.\n.O.", 40, 40);
    let config = SimulationConfig {
        max_iterations: 100,
        target_framerate: 1000.0,
        ..SimulationConfig::default()
    };
    let reason = driver::run(&mut engine, &mut HeadlessRender, &config).unwrap();
    assert_eq!(reason, ExitReason::MaxIterations);
    assert_eq!(engine.generation(), 100);
    assert!(engine.live_cell_count() > 0);
}

#[test]
fn hash_ignores_generation_counter() {
    // two engines at different generations but identical grids hash equal
    let mut a = engine_from("OOO", 11, 11);
    let b = engine_from("OOO", 11, 11);
    a.step();
    a.step(); // blinker back to its original grid, generation 2 vs 0
    assert_eq!(a.generation(), 2);
    assert_eq!(a.compute_hash(), b.compute_hash());
}

#[test]
fn gun_emits_gliders() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/patterns/gosper-glider-gun.cells");
    let pattern = Pattern::load(path.as_ref()).unwrap();
    let mut engine = Engine::new(
        80,
        50,
        &SeedSource::Pattern {
            pattern: &pattern,
            anchor: Anchor::default(),
        },
        &mut ChaCha8Rng::seed_from_u64(0),
    )
    .unwrap();
    assert_eq!(engine.live_cell_count(), 36);
    for _ in 0..60 {
        engine.step();
    }
    // two gliders launched by generation 60
    assert!(engine.live_cell_count() > 36);
}

proptest! {
    #[test]
    fn equal_grids_always_hash_equal(rows in prop::collection::vec(
        prop::collection::vec(any::<bool>(), 8), 8,
    )) {
        let text: String = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c { 'O' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        let a = engine_from(&text, 12, 12);
        let b = engine_from(&text, 12, 12);
        prop_assert_eq!(a.compute_hash(), b.compute_hash());
        prop_assert_eq!(a.compute_hash(), a.compute_hash());
    }

    #[test]
    fn step_never_resizes_the_world(
        density in 0.0f64..=1.0,
        seed in any::<u64>(),
        steps in 0usize..8,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut engine =
            Engine::new(16, 12, &SeedSource::Random { density }, &mut rng).unwrap();
        for _ in 0..steps {
            engine.step();
        }
        prop_assert_eq!(engine.world().width(), 16);
        prop_assert_eq!(engine.world().height(), 12);
    }

    #[test]
    fn live_count_matches_pattern_before_stepping(rows in prop::collection::vec(
        prop::collection::vec(any::<bool>(), 6), 6,
    )) {
        let text: String = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c { 'O' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        let pattern = Pattern::parse(&text).unwrap();
        let expected = pattern.live_cell_count();
        let engine = Engine::new(
            10,
            10,
            &SeedSource::Pattern {
                pattern: &pattern,
                anchor: Anchor::default(),
            },
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();
        prop_assert_eq!(engine.live_cell_count(), expected);
    }
}
