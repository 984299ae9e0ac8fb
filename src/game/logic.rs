//! Core clicker rules — pure functions over `GameState`, fully testable.

use rand::Rng;

use super::state::{GameState, ACHIEVEMENT_THRESHOLD, ACH_1000_POINTS, UPGRADE_STEP};

/// Outcome of an upgrade purchase attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeOutcome {
    Purchased,
    Insufficient,
}

/// Manual click: add `floor(1 * multiplier)` to the score. Returns the gain.
pub fn click(state: &mut GameState) -> u64 {
    let gain = state.click_gain();
    state.score = state.score.saturating_add(gain);
    gain
}

/// One firing of the automatic income timer.
///
/// Adds `floor(auto_increment * multiplier * fluctuation_factor)` to the
/// score, then re-rolls the fluctuation factor uniformly in (1.0, 3.0).
/// Returns the new factor so the caller can reschedule the next tick at
/// `1 second / factor`.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> f64 {
    let gain = state.tick_gain();
    state.score = state.score.saturating_add(gain);
    state.fluctuation_factor = 1.0 + rng.gen::<f64>() * 2.0;
    state.fluctuation_factor
}

/// Try to buy the auto-income upgrade.
///
/// All-or-nothing: with insufficient score nothing changes. On success the
/// cost is deducted, the income rises by [`UPGRADE_STEP`] and the next cost
/// doubles.
pub fn buy_upgrade(state: &mut GameState) -> UpgradeOutcome {
    if state.score < state.upgrade_cost {
        return UpgradeOutcome::Insufficient;
    }
    state.score -= state.upgrade_cost;
    state.auto_increment += UPGRADE_STEP;
    state.upgrade_cost = state.upgrade_cost.saturating_mul(2);
    UpgradeOutcome::Purchased
}

/// First time the score reaches the threshold, yield the achievement id to
/// grant. Later calls return `None`; the grant is emitted once per session
/// rather than leaning on the collaborator's idempotence.
pub fn milestone(state: &mut GameState) -> Option<&'static str> {
    if !state.achievement_sent && state.score >= ACHIEVEMENT_THRESHOLD {
        state.achievement_sent = true;
        return Some(ACH_1000_POINTS);
    }
    None
}
