//! Clicker game controller: owns the state, dispatches player actions,
//! runs ticks and funnels best-effort stats reports.

pub mod actions;
pub mod logic;
pub mod save;
pub mod state;

mod simulator;

use rand::Rng;

use crate::stats::{self, StatsReporter};
use actions::Action;
use logic::UpgradeOutcome;
use state::GameState;

/// Transient visual feedback for the last upgrade attempt. Cleared on the
/// next automatic tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    PurchaseOk,
    PurchaseDenied,
}

pub struct ClickerGame {
    pub state: GameState,
    pub feedback: Option<Feedback>,
    /// Set once the player asked to quit; the loop stops on it.
    pub quit: bool,
}

impl ClickerGame {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            feedback: None,
            quit: false,
        }
    }

    /// Dispatch one player action.
    pub fn handle_action(&mut self, action: Action, reporter: &mut dyn StatsReporter) {
        match action {
            Action::Click => {
                logic::click(&mut self.state);
                self.after_gain(reporter);
            }
            Action::BuyUpgrade => {
                self.feedback = Some(match logic::buy_upgrade(&mut self.state) {
                    UpgradeOutcome::Purchased => Feedback::PurchaseOk,
                    UpgradeOutcome::Insufficient => Feedback::PurchaseDenied,
                });
            }
            Action::Quit => self.quit = true,
        }
    }

    /// One automatic tick. Returns the new fluctuation factor so the caller
    /// can reschedule the clock.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, reporter: &mut dyn StatsReporter) -> f64 {
        let factor = logic::tick(&mut self.state, rng);
        self.feedback = None;
        self.after_gain(reporter);
        factor
    }

    /// Stats follow-up shared by clicks and ticks: report the score, and
    /// grant the threshold achievement the first time it is reached.
    fn after_gain(&mut self, reporter: &mut dyn StatsReporter) {
        stats::report_score_best_effort(reporter, self.state.score);
        if let Some(id) = logic::milestone(&mut self.state) {
            stats::grant_best_effort(reporter, id);
        }
    }
}
