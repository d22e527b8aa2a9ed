use cadenza_engine::coords::Rect;

use crate::event::{EventResult, UiEvent};

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// Widgets own state and event handling; drawing belongs to the hosting
/// renderer, which reads widget state after events and updates have run.
pub trait Widget: 'static {
    /// Route an input event. Return [`EventResult::Consumed`] to stop
    /// propagation. The default does nothing, so display-only leaves need
    /// no implementation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }

    /// Per-frame hook, called once per frame on the UI thread. Widgets that
    /// track background work drain it here.
    fn update(&mut self) {}
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget — the universal child type for containers.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        self.0.on_event(event, rect)
    }

    #[inline]
    pub fn update(&mut self) {
        self.0.update()
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}
