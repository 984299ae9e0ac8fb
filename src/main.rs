use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cli_clicker_game::game::actions::Action;
use cli_clicker_game::game::save::ScoreFile;
use cli_clicker_game::game::state::GameState;
use cli_clicker_game::game::ClickerGame;
use cli_clicker_game::stats::{self, StatsReporter};
use cli_clicker_game::time::TickClock;
use cli_clicker_game::tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Save file path (default: SaveGames/SaveGame.ylwfo next to the binary)
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Seed for the fluctuation RNG (deterministic session)
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a terminal for this many simulated seconds, then print a
    /// summary
    #[arg(long)]
    headless: Option<u32>,

    /// Simulated clicks per second in headless mode
    #[arg(long, default_value_t = 5)]
    clicks_per_sec: u32,

    /// Ignore any existing save and start from zero
    #[arg(long)]
    fresh: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let store = args
        .save_file
        .map(ScoreFile::new)
        .unwrap_or_else(ScoreFile::default_location);

    let mut state = GameState::new();
    if args.fresh {
        log::info!("--fresh: ignoring any existing save");
    } else {
        match store.load() {
            Ok(Some(score)) => {
                log::info!("loaded score {} from {}", score, store.path().display());
                state.score = score;
            }
            Ok(None) => {
                log::info!("no save at {}; starting fresh", store.path().display());
            }
            Err(e) => {
                log::warn!("could not read save ({e}); starting from zero");
            }
        }
    }

    // Stats are best-effort: a failed init degrades to local-only mode
    // inside init(), never aborts the game.
    let mut reporter = stats::init();

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut game = ClickerGame::new(state);

    if let Some(seconds) = args.headless {
        run_headless(
            &mut game,
            &mut rng,
            reporter.as_mut(),
            seconds,
            args.clicks_per_sec,
        );
    } else {
        let mut tui = Tui::new()?;
        tui.run(&mut game, &mut rng, reporter.as_mut())?;
    }

    // One save at orderly shutdown; a failed write is a warning, the
    // process still exits cleanly.
    if let Err(e) = store.save(game.state.score) {
        log::warn!("could not save score to {}: {e}", store.path().display());
    } else {
        log::info!(
            "saved score {} to {}",
            game.state.score,
            store.path().display()
        );
    }

    if let Err(e) = reporter.shutdown() {
        log::warn!("stats shutdown failed: {e}");
    }

    Ok(())
}

/// Headless session: a simulated timeline with a fixed click rate and greedy
/// upgrade purchases, useful for balance checks and smoke runs in CI.
fn run_headless(
    game: &mut ClickerGame,
    rng: &mut SmallRng,
    reporter: &mut dyn StatsReporter,
    seconds: u32,
    clicks_per_sec: u32,
) {
    let mut clock = TickClock::new(0.0);
    let mut ticks_fired = 0u64;
    let mut upgrades = 0u32;

    for second in 1..=seconds {
        for _ in 0..clicks_per_sec {
            game.handle_action(Action::Click, reporter);
        }

        // Fire every tick due inside this simulated second, rescheduling
        // from the deadline so the timeline doesn't drift.
        let now = f64::from(second) * 1000.0;
        while clock.due(now) {
            let fired_at = clock.deadline_ms();
            let factor = game.tick(rng, reporter);
            clock.reschedule(fired_at, factor);
            ticks_fired += 1;
        }

        while game.state.can_afford_upgrade() {
            game.handle_action(Action::BuyUpgrade, reporter);
            upgrades += 1;
        }

        if second % 60 == 0 {
            log::info!(
                "t={}s score={} auto=+{}/tick cost={}",
                second,
                game.state.score,
                game.state.auto_increment,
                game.state.upgrade_cost
            );
        }
    }

    println!("headless run: {seconds}s simulated, {clicks_per_sec} clicks/s");
    println!(
        "  score={} ticks={} upgrades={} auto=+{}/tick next_cost={}",
        game.state.score, ticks_fired, upgrades, game.state.auto_increment, game.state.upgrade_cost
    );
}
