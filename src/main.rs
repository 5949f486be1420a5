//! Catch the Fruit entry point
//!
//! Runs a headless session driven by the autopilot and logs the HUD.
//! Windowed front-ends link the library and supply their own input and
//! render collaborators.

use anyhow::{Context, Result};
use clap::Parser;

use catch_fruit::Game;
use catch_fruit::consts::SIM_DT;
use catch_fruit::platform::{self, Autopilot, FixedClock, LogSink, SteppedClock, TickSource};
use catch_fruit::tuning::Tuning;

#[derive(Parser)]
#[command(name = "catch-fruit")]
#[command(about = "Catch the falling fruit (headless autopilot demo)")]
struct Args {
    /// RNG seed for fruit spawns (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to run
    #[arg(long, default_value_t = 60 * 60)]
    ticks: u64,
    /// JSON file overriding game balance
    #[arg(long)]
    tuning: Option<std::path::PathBuf>,
    /// Tick at 60 Hz wall-clock time instead of as fast as possible
    #[arg(long)]
    realtime: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });

    log::info!("Catch the Fruit starting...");
    log::info!("Game initialized with seed: {}", seed);

    let mut game = Game::new(tuning, seed);
    let mut clock: Box<dyn TickSource> = if args.realtime {
        Box::new(FixedClock::sixty_hz())
    } else {
        Box::new(SteppedClock::new(SIM_DT))
    };

    let summary = platform::run(
        &mut game,
        &mut Autopilot,
        &mut LogSink::new(),
        clock.as_mut(),
        Some(args.ticks),
    );

    println!(
        "{} ticks, {} caught, {} missed, {} game over(s), best score {}",
        summary.ticks, summary.catches, summary.misses, summary.game_overs, summary.best_score
    );
    Ok(())
}
