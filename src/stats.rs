//! Best-effort stats and achievement reporting.
//!
//! The stats service is an optional collaborator: every call may fail and no
//! failure is allowed to disturb play. When the service cannot be reached
//! the game runs local-only, backed by [`OfflineStats`].

use thiserror::Error;

/// Stat name for the running score.
pub const STAT_SCORE: &str = "STAT_SCORE";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats service unavailable: {0}")]
    Unavailable(String),
    #[error("stats call rejected: {0}")]
    Rejected(String),
}

/// Capability interface to the external stats/achievement service.
pub trait StatsReporter {
    /// Report a named stat value. Best-effort.
    fn report_stat(&mut self, name: &str, value: u64) -> Result<(), StatsError>;

    /// Grant an achievement by id. Granting twice is a no-op on the
    /// service side.
    fn grant_achievement(&mut self, id: &str) -> Result<(), StatsError>;

    /// Flush and release the service at orderly shutdown.
    fn shutdown(&mut self) -> Result<(), StatsError> {
        Ok(())
    }
}

/// Local-only mode: everything is accepted and discarded.
#[derive(Debug, Default)]
pub struct OfflineStats;

impl StatsReporter for OfflineStats {
    fn report_stat(&mut self, _name: &str, _value: u64) -> Result<(), StatsError> {
        Ok(())
    }

    fn grant_achievement(&mut self, _id: &str) -> Result<(), StatsError> {
        Ok(())
    }
}

/// In-memory reporter that records every call. Used by tests to assert on
/// what the game emitted.
#[derive(Debug, Default)]
pub struct RecordingStats {
    pub stats: Vec<(String, u64)>,
    pub achievements: Vec<String>,
}

impl RecordingStats {
    /// The reported values of the score stat, in order.
    pub fn score_values(&self) -> Vec<u64> {
        self.stats
            .iter()
            .filter(|(name, _)| name == STAT_SCORE)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl StatsReporter for RecordingStats {
    fn report_stat(&mut self, name: &str, value: u64) -> Result<(), StatsError> {
        self.stats.push((name.to_string(), value));
        Ok(())
    }

    fn grant_achievement(&mut self, id: &str) -> Result<(), StatsError> {
        self.achievements.push(id.to_string());
        Ok(())
    }
}

/// Initialize the best available reporter.
///
/// No service binding is compiled in yet, so this always degrades to the
/// local-only mode; the game is fully playable without it.
pub fn init() -> Box<dyn StatsReporter> {
    log::info!("stats service not configured; progress stays local");
    Box::new(OfflineStats)
}

/// Report the score stat, logging and swallowing any failure.
pub fn report_score_best_effort(reporter: &mut dyn StatsReporter, value: u64) {
    if let Err(e) = reporter.report_stat(STAT_SCORE, value) {
        log::warn!("score report failed: {e}");
    }
}

/// Grant an achievement, logging and swallowing any failure.
pub fn grant_best_effort(reporter: &mut dyn StatsReporter, id: &str) {
    if let Err(e) = reporter.grant_achievement(id) {
        log::warn!("achievement grant failed: {e}");
    }
}
