//! Entry point: CLI parsing, logging setup, and wiring
//!
//! The engine, renderer, and driver are assembled here; everything after
//! argument validation is delegated to `driver::run`.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use termlife::core::{Result, SimulationConfig};
use termlife::driver::{self, ExitReason};
use termlife::engine::{Engine, SeedSource};
use termlife::pattern::{Anchor, Pattern};
use termlife::render::{default_shape, HeadlessRender, TerminalRender};

/// Conway's Game of Life in the terminal, with cycle detection
#[derive(Parser, Debug)]
#[command(name = "termlife")]
#[command(about = "Conway's Game of Life in the terminal, with cycle detection")]
struct Args {
    /// Plaintext pattern file for the initial state [default: random]
    file: Option<PathBuf>,

    /// World shape [default: fill the terminal]
    #[arg(short, long, num_args = 2, value_names = ["W", "H"])]
    shape: Option<Vec<usize>>,

    /// Maximum number of iterations, 0 for unbounded
    #[arg(short = 't', long, default_value_t = 0, value_name = "T")]
    iterations: u64,

    /// Exit when all cells are dead or states keep repeating
    #[arg(short = 'e', long)]
    autoexit: bool,

    /// Target framerate in frames per second
    #[arg(short, long, default_value_t = 10.0, value_name = "F", value_parser = parse_framerate)]
    fps: f64,

    /// Pattern position in the world: l/c/r then t/c/b
    #[arg(short, long, default_value = "cc", value_name = "P")]
    position: Anchor,

    /// Pause after the initial state is drawn
    #[arg(short, long)]
    waitinit: bool,

    /// RNG seed for reproducible random worlds [default: random]
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Probability that a cell starts live under random seeding
    #[arg(long, default_value_t = 0.2, value_name = "D", value_parser = parse_density)]
    density: f64,

    /// Run without the terminal UI at full speed
    #[arg(long)]
    headless: bool,
}

fn parse_framerate(s: &str) -> std::result::Result<f64, String> {
    let fps: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if fps > 0.0 {
        Ok(fps)
    } else {
        Err("framerate must be greater than zero".into())
    }
}

fn parse_density(s: &str) -> std::result::Result<f64, String> {
    let density: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err("density must be within [0, 1]".into())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stderr so log lines never corrupt the alternate-screen UI
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("termlife=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = match args.shape.as_deref() {
        Some([w, h]) => (*w, *h),
        _ => default_shape()?,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(width, height, seed, "starting simulation");

    let pattern;
    let source = match &args.file {
        Some(path) => {
            pattern = Pattern::load(path)?;
            SeedSource::Pattern {
                pattern: &pattern,
                anchor: args.position,
            }
        }
        None => SeedSource::Random {
            density: args.density,
        },
    };
    let mut engine = Engine::new(width, height, &source, &mut rng)?;

    let config = SimulationConfig {
        shape: Some((width, height)),
        max_iterations: args.iterations,
        target_framerate: args.fps,
        auto_exit: args.autoexit,
        seed_density: args.density,
        seed: Some(seed),
        anchor: args.position,
        wait_on_start: args.waitinit,
        ..SimulationConfig::default()
    };

    let reason = if args.headless {
        driver::run(&mut engine, &mut HeadlessRender, &config)?
    } else {
        let mut renderer = TerminalRender::new()?;
        let reason = driver::run(&mut engine, &mut renderer, &config)?;
        drop(renderer); // restore the terminal before printing the summary
        reason
    };

    match reason {
        ExitReason::AllCellsDead => println!("All cells are dead, exiting."),
        ExitReason::RepetitionLimit => println!("Repeated states exceeded tolerance, exiting."),
        ExitReason::MaxIterations => println!(
            "Reached iteration limit at generation {}.",
            engine.generation()
        ),
        ExitReason::UserQuit => println!("Interrupted."),
    }
    tracing::info!(
        generation = engine.generation(),
        live_cells = engine.live_cell_count(),
        distinct_states = engine.distinct_states(),
        "run finished"
    );
    println!("Program exited.");
    Ok(())
}
