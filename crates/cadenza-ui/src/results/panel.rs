use std::sync::Arc;

use cadenza_engine::coords::Rect;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::event::{EventResult, UiEvent};
use crate::widget::{Element, Widget};

use super::score::{PlayableBeatmap, Score};
use super::services::{BeatmapResolver, LoadToken, ResolveError, SessionProvider, StatisticsProvider};
use super::statistic::{StatisticItem, ValueDisplay};

const MISSING_HIT_EVENTS_MESSAGE: &str =
    "Extended statistics for this score require hit events, which have not been fetched.";

/// What the panel currently displays.
pub enum PanelContent {
    /// Nothing bound, or the last load was discarded.
    Empty,
    /// A load is in flight; the host shows a spinner over this state.
    Loading,
    /// Statistics cannot be shown at all; optionally offers a re-fetch.
    Placeholder { message: String, can_refetch: bool },
    /// The scrollable statistics list.
    Statistics {
        beatmap: PlayableBeatmap,
        rows: Vec<AttachedStatistic>,
    },
}

/// One attached statistics row.
pub struct AttachedStatistic {
    pub name: String,
    pub element: Element,
}

/// Payload produced by a load's background task.
struct LoadedStatistics {
    beatmap: PlayableBeatmap,
    items: Vec<StatisticItem>,
}

struct PendingLoad {
    generation: u64,
    score: Arc<Score>,
    token: LoadToken,
    rx: oneshot::Receiver<Result<LoadedStatistics, ResolveError>>,
}

/// Post-play statistics panel.
///
/// Assigning a score cancels any in-flight load and starts a new one:
/// beatmap resolution and statistics generation run on a background task,
/// and the finished content is attached from [`update`] on the UI thread.
/// Only the most recently issued load may touch displayed content: the
/// continuation re-checks both its generation and the bound score's
/// identity before attaching, so a superseded or cancelled load has no
/// visible effect.
///
/// [`update`]: Widget::update
pub struct StatisticsPanel {
    runtime: Handle,
    resolver: Arc<dyn BeatmapResolver>,
    provider: Arc<dyn StatisticsProvider>,
    session: Box<dyn SessionProvider>,

    score: Option<Arc<Score>>,
    content: PanelContent,
    visible: bool,
    generation: u64,
    pending: Option<PendingLoad>,
}

impl StatisticsPanel {
    pub fn new(
        runtime: Handle,
        resolver: Arc<dyn BeatmapResolver>,
        provider: Arc<dyn StatisticsProvider>,
        session: Box<dyn SessionProvider>,
    ) -> Self {
        Self {
            runtime,
            resolver,
            provider,
            session,
            score: None,
            content: PanelContent::Empty,
            visible: false,
            generation: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    #[inline]
    pub fn score(&self) -> Option<&Arc<Score>> {
        self.score.as_ref()
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Binds `score` and kicks off a load for it.
    ///
    /// Assignment is identity-sensitive: re-assigning the same `Arc` is a
    /// no-op, so a redundant rebind cannot flicker the display through a
    /// fresh load cycle. Use [`refetch`] to force a reload of the current
    /// score.
    ///
    /// [`refetch`]: StatisticsPanel::refetch
    pub fn assign(&mut self, score: Option<Arc<Score>>) {
        let unchanged = match (&self.score, &score) {
            (Some(bound), Some(new)) => Arc::ptr_eq(bound, new),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        self.score = score;
        self.reload();
    }

    /// Reloads the currently bound score unconditionally.
    pub fn refetch(&mut self) {
        self.reload();
    }

    /// Cancels any outstanding load. Called on removal from the scene;
    /// dropping the panel does the same.
    pub fn detach(&mut self) {
        self.cancel_pending();
    }

    fn reload(&mut self) {
        self.cancel_pending();

        let Some(score) = self.score.clone() else {
            self.content = PanelContent::Empty;
            return;
        };

        self.content = PanelContent::Loading;
        self.generation += 1;

        let token = LoadToken::new();
        let (tx, rx) = oneshot::channel();
        let resolver = Arc::clone(&self.resolver);
        let provider = Arc::clone(&self.provider);
        let task_score = Arc::clone(&score);
        let task_token = token.clone();

        self.runtime.spawn_blocking(move || {
            let result = resolve_and_generate(&*resolver, &*provider, &task_score, &task_token);
            // The receiver disappears when the load is superseded.
            let _ = tx.send(result);
        });

        self.pending = Some(PendingLoad {
            generation: self.generation,
            score,
            token,
            rx,
        });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
        }
    }

    fn poll_pending(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };

        let result = match pending.rx.try_recv() {
            Err(TryRecvError::Empty) => {
                self.pending = Some(pending);
                return;
            }
            Err(TryRecvError::Closed) => {
                Err(ResolveError::Unavailable("load task dropped its result".into()))
            }
            Ok(result) => result,
        };

        // Only the most recent load may touch content, and only while its
        // score is still the bound one.
        let current = pending.generation == self.generation
            && !pending.token.is_cancelled()
            && matches!(&self.score, Some(bound) if Arc::ptr_eq(bound, &pending.score));
        if !current {
            return;
        }

        match result {
            Ok(loaded) => {
                let score = Arc::clone(&pending.score);
                self.attach(&score, loaded);
            }
            Err(ResolveError::Cancelled) => {}
            Err(err) => {
                log::warn!("statistics load failed for score #{}: {err}", pending.score.id);
                self.content = PanelContent::Empty;
            }
        }
    }

    fn attach(&mut self, score: &Score, loaded: LoadedStatistics) {
        let LoadedStatistics { beatmap, items } = loaded;
        log::debug!("attaching statistics for \"{}\" (score #{})", beatmap.title, score.id);

        if score.has_hit_events() {
            let rows = items.into_iter().map(attach_row).collect();
            self.content = PanelContent::Statistics { beatmap, rows };
            return;
        }

        let (available, unavailable): (Vec<_>, Vec<_>) =
            items.into_iter().partition(|item| !item.requires_hit_events);

        if available.is_empty() {
            self.content = PanelContent::Placeholder {
                message: MISSING_HIT_EVENTS_MESSAGE.to_owned(),
                can_refetch: self.session.is_logged_in(),
            };
            return;
        }

        let mut rows: Vec<AttachedStatistic> = available.into_iter().map(attach_row).collect();
        if !unavailable.is_empty() {
            rows.push(unavailable_row(&unavailable));
        }
        self.content = PanelContent::Statistics { beatmap, rows };
    }
}

impl Widget for StatisticsPanel {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) => {
                self.visible = !self.visible;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn update(&mut self) {
        self.poll_pending();
    }
}

impl Drop for StatisticsPanel {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Background half of a load: resolve, then generate, polling the token in
/// between so a superseded load stops doing work.
fn resolve_and_generate(
    resolver: &dyn BeatmapResolver,
    provider: &dyn StatisticsProvider,
    score: &Score,
    token: &LoadToken,
) -> Result<LoadedStatistics, ResolveError> {
    if token.is_cancelled() {
        return Err(ResolveError::Cancelled);
    }
    let beatmap = resolver.resolve(score, token)?;
    if token.is_cancelled() {
        return Err(ResolveError::Cancelled);
    }
    let items = provider.statistics(score, &beatmap);
    Ok(LoadedStatistics { beatmap, items })
}

fn attach_row(item: StatisticItem) -> AttachedStatistic {
    let name = item.name.clone();
    AttachedStatistic {
        name,
        element: item.build(),
    }
}

fn unavailable_row(items: &[StatisticItem]) -> AttachedStatistic {
    let names = items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    AttachedStatistic {
        name: names,
        element: Element::new(ValueDisplay::new("hit events", "not available")),
    }
}
