//! End-to-end scenarios for the clicker core, driven through the library
//! surface exactly as the terminal front end drives it.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use cli_clicker_game::game::actions::Action;
use cli_clicker_game::game::save::ScoreFile;
use cli_clicker_game::game::state::GameState;
use cli_clicker_game::game::{ClickerGame, Feedback};
use cli_clicker_game::stats::{RecordingStats, StatsError, StatsReporter};

#[test]
fn fresh_session_clicks_and_upgrade_gating() {
    let mut game = ClickerGame::new(GameState::new());
    let mut rec = RecordingStats::default();

    for _ in 0..5 {
        game.handle_action(Action::Click, &mut rec);
    }
    assert_eq!(game.state.score, 5);
    assert_eq!(rec.score_values(), vec![1, 2, 3, 4, 5]);

    // Purchase at cost 100 with score 5: fails, nothing changes.
    game.handle_action(Action::BuyUpgrade, &mut rec);
    assert_eq!(game.feedback, Some(Feedback::PurchaseDenied));
    assert_eq!(game.state.score, 5);
    assert_eq!(game.state.upgrade_cost, 100);
    assert!((game.state.auto_increment - 1.0).abs() < f64::EPSILON);

    // With 150 score the purchase applies exactly once.
    game.state.score = 150;
    game.handle_action(Action::BuyUpgrade, &mut rec);
    assert_eq!(game.feedback, Some(Feedback::PurchaseOk));
    assert_eq!(game.state.score, 50);
    assert!((game.state.auto_increment - 1.5).abs() < f64::EPSILON);
    assert_eq!(game.state.upgrade_cost, 200);
}

#[test]
fn achievement_fires_once_when_a_tick_crosses_the_threshold() {
    let mut game = ClickerGame::new(GameState::new());
    let mut rec = RecordingStats::default();
    let mut rng = SmallRng::seed_from_u64(99);

    game.state.score = 999;
    game.state.fluctuation_factor = 1.0; // next tick adds exactly 1

    game.tick(&mut rng, &mut rec);
    assert!(game.state.score >= 1000);
    assert_eq!(rec.achievements, vec!["ACH_1000_POINTS"]);

    // Staying above the threshold does not re-grant.
    game.tick(&mut rng, &mut rec);
    game.handle_action(Action::Click, &mut rec);
    assert_eq!(rec.achievements.len(), 1);
}

#[test]
fn session_score_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreFile::new(dir.path().join("SaveGames").join("SaveGame.ylwfo"));

    // First session: click seven times, save at shutdown.
    let mut game = ClickerGame::new(GameState::new());
    let mut rec = RecordingStats::default();
    for _ in 0..7 {
        game.handle_action(Action::Click, &mut rec);
    }
    store.save(game.state.score).unwrap();

    // Second session: startup load restores the score.
    let mut state = GameState::new();
    if let Ok(Some(score)) = store.load() {
        state.score = score;
    }
    assert_eq!(state.score, 7);
}

#[test]
fn corrupt_save_falls_back_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SaveGame.ylwfo");
    std::fs::write(&path, "\u{1f36a} not a score").unwrap();
    let store = ScoreFile::new(path);

    // The startup sequence: a load error is a warning, score stays default.
    let mut state = GameState::new();
    match store.load() {
        Ok(Some(score)) => state.score = score,
        Ok(None) | Err(_) => {}
    }
    assert_eq!(state.score, 0);
}

#[test]
fn failing_stats_service_never_disturbs_play() {
    struct DownStats;

    impl StatsReporter for DownStats {
        fn report_stat(&mut self, _name: &str, _value: u64) -> Result<(), StatsError> {
            Err(StatsError::Unavailable("service down".into()))
        }

        fn grant_achievement(&mut self, _id: &str) -> Result<(), StatsError> {
            Err(StatsError::Unavailable("service down".into()))
        }
    }

    let mut game = ClickerGame::new(GameState::new());
    let mut down = DownStats;
    let mut rng = SmallRng::seed_from_u64(5);

    game.state.score = 999;
    game.state.fluctuation_factor = 1.0;
    game.tick(&mut rng, &mut down); // crosses 1000, both calls fail
    for _ in 0..3 {
        game.handle_action(Action::Click, &mut down);
    }
    assert_eq!(game.state.score, 1003);
}
