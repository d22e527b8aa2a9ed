use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::score::{PlayableBeatmap, Score};
use super::statistic::StatisticItem;

/// Cooperative cancellation flag shared with an in-flight load.
///
/// The UI side cancels; the background side polls between units of work.
/// A cancelled load must produce no visible effect.
#[derive(Debug, Clone, Default)]
pub struct LoadToken(Arc<AtomicBool>);

impl LoadToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Error from beatmap resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The load's token was cancelled while resolving.
    Cancelled,
    /// The beatmap could not be produced (missing, corrupt, conversion
    /// failure). The message is diagnostic only and never shown to users.
    Unavailable(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Cancelled => write!(f, "beatmap resolution cancelled"),
            ResolveError::Unavailable(msg) => write!(f, "beatmap unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves the playable beatmap for a score.
///
/// Potentially slow (difficulty conversion, disk, network); always invoked
/// on a background task. Implementations should poll `token` between
/// expensive stages and bail out with [`ResolveError::Cancelled`].
pub trait BeatmapResolver: Send + Sync {
    fn resolve(&self, score: &Score, token: &LoadToken) -> Result<PlayableBeatmap, ResolveError>;
}

/// Ruleset-specific statistics generation.
///
/// Runs on the load's background task; item factories are deferred until the
/// panel attaches them on the UI thread.
pub trait StatisticsProvider: Send + Sync {
    fn statistics(&self, score: &Score, beatmap: &PlayableBeatmap) -> Vec<StatisticItem>;
}

/// The client's login state, as far as the results screen cares.
pub trait SessionProvider {
    /// Fetching hit-event history requires an authenticated API session, so
    /// the re-fetch action is only offered when this holds.
    fn is_logged_in(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_live_and_cancels_once() {
        let token = LoadToken::new();
        assert!(!token.is_cancelled());

        let shared = token.clone();
        shared.cancel();
        assert!(token.is_cancelled());
    }
}
