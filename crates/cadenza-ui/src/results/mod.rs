//! Results-screen widgets.
//!
//! The statistics panel owns the post-play statistics display: it reacts to
//! score assignment, resolves the playable beatmap on a background task, and
//! attaches ruleset-generated statistics back on the UI thread.

mod panel;
mod score;
mod services;
mod statistic;

pub use panel::{AttachedStatistic, PanelContent, StatisticsPanel};
pub use score::{HitEvent, HitResult, PlayableBeatmap, Score};
pub use services::{BeatmapResolver, LoadToken, ResolveError, SessionProvider, StatisticsProvider};
pub use statistic::{StatisticItem, ValueDisplay};
