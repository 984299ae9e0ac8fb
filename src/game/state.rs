//! Clicker game state definitions.

/// Score at which the one achievement unlocks.
pub const ACHIEVEMENT_THRESHOLD: u64 = 1000;

/// Achievement id understood by the stats collaborator.
pub const ACH_1000_POINTS: &str = "ACH_1000_POINTS";

/// Cost of the first auto-income upgrade.
pub const BASE_UPGRADE_COST: u64 = 100;

/// Auto-income gained per purchased upgrade.
pub const UPGRADE_STEP: f64 = 0.5;

/// Full state of a clicker session.
///
/// Owned by the event loop: clicks, ticks and upgrade purchases all mutate
/// it on that one thread, so no operation needs locking.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Accumulated score. Never negative; additions saturate.
    pub score: u64,
    /// Factor applied to every gain. No code path changes it yet; kept as
    /// an extension point.
    pub multiplier: f64,
    /// Per-tick base income before multiplier and fluctuation.
    pub auto_increment: f64,
    /// Cost of the next upgrade. Doubles on every purchase.
    pub upgrade_cost: u64,
    /// Per-tick random factor in (1.0, 3.0). Scales both the tick income
    /// and the delay until the next tick. Not persisted.
    pub fluctuation_factor: f64,
    /// Whether the threshold achievement was already emitted this session.
    pub achievement_sent: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            multiplier: 1.0,
            auto_increment: 1.0,
            upgrade_cost: BASE_UPGRADE_COST,
            // First tick runs at the nominal one-second period.
            fluctuation_factor: 1.0,
            achievement_sent: false,
        }
    }

    /// Score gained by one manual click.
    pub fn click_gain(&self) -> u64 {
        self.multiplier.floor() as u64
    }

    /// Score the next automatic tick yields at the current fluctuation.
    pub fn tick_gain(&self) -> u64 {
        (self.auto_increment * self.multiplier * self.fluctuation_factor).floor() as u64
    }

    pub fn can_afford_upgrade(&self) -> bool {
        self.score >= self.upgrade_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_defaults() {
        let s = GameState::new();
        assert_eq!(s.score, 0);
        assert_eq!(s.upgrade_cost, BASE_UPGRADE_COST);
        assert!((s.multiplier - 1.0).abs() < f64::EPSILON);
        assert!((s.auto_increment - 1.0).abs() < f64::EPSILON);
        assert!((s.fluctuation_factor - 1.0).abs() < f64::EPSILON);
        assert!(!s.achievement_sent);
    }

    #[test]
    fn click_gain_is_one_at_unit_multiplier() {
        let s = GameState::new();
        assert_eq!(s.click_gain(), 1);
    }

    #[test]
    fn tick_gain_floors_the_product() {
        let mut s = GameState::new();
        s.auto_increment = 1.5;
        s.fluctuation_factor = 1.7;
        // 1.5 * 1.0 * 1.7 = 2.55 → 2
        assert_eq!(s.tick_gain(), 2);
    }

    #[test]
    fn affordability_boundary() {
        let mut s = GameState::new();
        s.score = 99;
        assert!(!s.can_afford_upgrade());
        s.score = 100;
        assert!(s.can_afford_upgrade());
    }
}
