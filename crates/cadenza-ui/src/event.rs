use cadenza_engine::coords::Vec2;
use cadenza_engine::input::{Key, Modifiers, MouseButton};

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// A drag gesture began at `pos` with `button` held.
    DragStart { pos: Vec2, button: MouseButton },
    /// Mouse moved while the drag button is held.
    /// `pos` is the current cursor position; `start` is where the drag began.
    Drag { pos: Vec2, start: Vec2 },
    /// Drag button released.
    ///
    /// Fires even when `pos` is outside the widget — use
    /// `rect.contains(start)` to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Named key pressed.
    KeyDown { key: Key, modifiers: Modifiers },
    /// Named key released.
    KeyUp { key: Key, modifiers: Modifiers },
}

/// Result returned by [`Widget::on_event`].
///
/// [`Widget::on_event`]: crate::widget::Widget::on_event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
