use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use cadenza_engine::logging::{init_logging, LoggingConfig};
use cadenza_engine::time::{GameplayClockCoordinator, StopwatchClock};
use cadenza_ui::prelude::*;

/// Post-play score payload, as the score store would deliver it.
const SCORE_FIXTURE: &str = r#"{
    "id": 1,
    "user": "cadenza",
    "total_score": 927210,
    "accuracy": 0.9821,
    "max_combo": 444,
    "hit_events": [
        { "time_offset": -1.5, "result": "Great" },
        { "time_offset": 0.2, "result": "Perfect" },
        { "time_offset": 12.8, "result": "Good" }
    ]
}"#;

/// Selection layer standing in for the editor: logs every transform.
struct SelectionScaler {
    quad: Rect,
}

impl ScaleTarget for SelectionScaler {
    fn begin(&mut self) -> Option<Rect> {
        log::info!("scale session begun over {:?}", self.quad);
        Some(self.quad)
    }

    fn update(&mut self, scale: Vec2, origin: Vec2) {
        log::info!(
            "scale ({:.2}, {:.2}) around ({:.0}, {:.0})",
            scale.x, scale.y, origin.x, origin.y
        );
    }

    fn commit(&mut self) {
        log::info!("scale session committed");
    }
}

struct LocalResolver;

impl BeatmapResolver for LocalResolver {
    fn resolve(&self, score: &Score, token: &LoadToken) -> Result<PlayableBeatmap, ResolveError> {
        if token.is_cancelled() {
            return Err(ResolveError::Cancelled);
        }
        Ok(PlayableBeatmap {
            title: format!("demo beatmap #{}", score.id),
            overall_difficulty: 8.2,
            object_count: 1024,
        })
    }
}

struct DemoStatistics;

impl StatisticsProvider for DemoStatistics {
    fn statistics(&self, score: &Score, _beatmap: &PlayableBeatmap) -> Vec<StatisticItem> {
        let accuracy = format!("{:.2}%", score.accuracy * 100.0);
        let combo = format!("{}x", score.max_combo);
        let events = format!("{} recorded", score.hit_events.len());
        vec![
            StatisticItem::new("accuracy", false, move || {
                Element::new(ValueDisplay::new("Accuracy", accuracy))
            }),
            StatisticItem::new("max combo", false, move || {
                Element::new(ValueDisplay::new("Max Combo", combo))
            }),
            StatisticItem::new("timing distribution", true, move || {
                Element::new(ValueDisplay::new("Hit Events", events))
            }),
        ]
    }
}

struct LocalSession;

impl SessionProvider for LocalSession {
    fn is_logged_in(&self) -> bool {
        true
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔══════════════════════════════════════╗");
    println!("  ║   CADENZA CLIENT — headless session  ║");
    println!("  ╚══════════════════════════════════════╝");
    println!();

    run_gameplay_clock();
    run_scale_gesture();
    run_results_panel()?;

    Ok(())
}

/// Drives the gameplay clock through a start / seek / pause / restart cycle.
fn run_gameplay_clock() {
    let mut coordinator = GameplayClockCoordinator::new(StopwatchClock::new());

    coordinator.on_paused_change(|change| {
        log::info!("paused: {} -> {}", change.old, change.new);
    });

    coordinator.start();
    std::thread::sleep(Duration::from_millis(50));
    coordinator.update();
    log::info!("gameplay time after ~50ms: {:.1}ms", coordinator.clock().current_time());

    coordinator.seek(30_000.0);
    coordinator.update();
    log::info!("gameplay time after seek: {:.1}ms", coordinator.clock().current_time());

    if let Err(err) = coordinator.clock().set_rate(1.5) {
        log::info!("rate change rejected as expected: {err}");
    }

    coordinator.stop();
    coordinator.restart();
    log::info!(
        "after restart while paused: time {:.1}ms, running {}",
        coordinator.clock().current_time(),
        coordinator.clock().is_running()
    );
}

/// Simulates dragging the bottom-right scale handle of a selection,
/// toggling aspect-lock mid-gesture.
fn run_scale_gesture() {
    let quad = Rect::new(200.0, 100.0, 100.0, 50.0);
    let handle_rect = Rect::new(294.0, 144.0, 12.0, 12.0);
    let mut handle = ScaleHandle::new(
        Anchor::bottom_right(),
        Some(Box::new(SelectionScaler { quad })),
    );

    let start = Vec2::new(300.0, 150.0);
    handle.on_event(&UiEvent::DragStart { pos: start, button: MouseButton::Left }, handle_rect);
    handle.on_event(&UiEvent::Drag { pos: start + Vec2::new(20.0, 5.0), start }, handle_rect);

    let shift = Modifiers { shift: true, ..Modifiers::default() };
    handle.on_event(&UiEvent::KeyDown { key: Key::Shift, modifiers: shift }, handle_rect);
    handle.on_event(
        &UiEvent::KeyUp { key: Key::Shift, modifiers: Modifiers::default() },
        handle_rect,
    );

    handle.on_event(&UiEvent::DragEnd { pos: start + Vec2::new(20.0, 5.0), start }, handle_rect);
}

/// Loads a fixture score into the statistics panel and waits for attach.
fn run_results_panel() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;

    let score: Score = serde_json::from_str(SCORE_FIXTURE).context("parse score fixture")?;
    let mut panel = StatisticsPanel::new(
        runtime.handle().clone(),
        Arc::new(LocalResolver),
        Arc::new(DemoStatistics),
        Box::new(LocalSession),
    );

    panel.assign(Some(Arc::new(score)));

    // Frame loop stand-in: tick until the load lands.
    for _ in 0..200 {
        panel.update();
        if !matches!(panel.content(), PanelContent::Loading) {
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }

    match panel.content() {
        PanelContent::Statistics { beatmap, rows } => {
            log::info!("statistics attached for \"{}\":", beatmap.title);
            for row in rows {
                log::info!("  - {}", row.name);
            }
        }
        PanelContent::Placeholder { message, can_refetch } => {
            log::info!("placeholder shown ({message}), re-fetch available: {can_refetch}");
        }
        PanelContent::Loading => anyhow::bail!("statistics load did not complete"),
        PanelContent::Empty => anyhow::bail!("statistics load was discarded"),
    }

    Ok(())
}
