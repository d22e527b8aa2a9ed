use cadenza_engine::coords::{Anchor, Rect, Vec2};
use cadenza_engine::input::{Key, MouseButton};

use crate::event::{EventResult, UiEvent};
use crate::widget::Widget;

use super::transform::ScaleTarget;

/// Drag handle attached to one edge or corner of the selection box.
///
/// Dragging converts pointer displacement into a scale multiplier relative
/// to the selection bounds captured at gesture start, applied around the
/// point of the box opposite the handle. Holding `Shift` locks aspect ratio.
///
/// The target is optional: with no target attached (or a target that
/// declines to begin a session), drag starts are rejected and no gesture
/// state is created.
pub struct ScaleHandle {
    anchor: Anchor,
    target: Option<Box<dyn ScaleTarget>>,
    gesture: Option<Gesture>,
}

/// Per-gesture state, captured at drag start and dropped at drag end.
struct Gesture {
    /// Anchor in effect for this gesture.
    anchor: Anchor,
    /// Selection bounds the target reported at drag start.
    quad: Rect,
    /// Raw pointer displacement at the most recent drag update, kept so a
    /// modifier toggle can reapply without waiting for the next move.
    last_raw: Vec2,
    aspect_locked: bool,
}

impl ScaleHandle {
    pub fn new(anchor: Anchor, target: Option<Box<dyn ScaleTarget>>) -> Self {
        Self {
            anchor,
            target,
            gesture: None,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Whether a drag gesture is currently active.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    fn begin_gesture(&mut self) -> EventResult {
        let Some(target) = self.target.as_mut() else {
            return EventResult::Ignored;
        };
        let Some(quad) = target.begin() else {
            return EventResult::Ignored;
        };

        self.gesture = Some(Gesture {
            anchor: self.anchor,
            quad,
            last_raw: Vec2::zero(),
            aspect_locked: false,
        });
        EventResult::Consumed
    }

    fn set_aspect_lock(&mut self, locked: bool) -> EventResult {
        let changed = match &mut self.gesture {
            Some(gesture) if gesture.aspect_locked != locked => {
                gesture.aspect_locked = locked;
                true
            }
            _ => false,
        };
        if !changed {
            return EventResult::Ignored;
        }

        // Reapply from the stored displacement so the lock takes effect
        // before the next pointer move.
        self.apply();
        EventResult::Consumed
    }

    fn apply(&mut self) {
        let Some(gesture) = &self.gesture else { return };
        let scale = scale_factor(gesture.anchor, gesture.quad, gesture.last_raw, gesture.aspect_locked);
        let origin = gesture.anchor.origin_on(gesture.quad);
        if let Some(target) = self.target.as_mut() {
            target.update(scale, origin);
        }
    }
}

impl Widget for ScaleHandle {
    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::DragStart { pos, button: MouseButton::Left } if rect.contains(*pos) => {
                self.begin_gesture()
            }

            UiEvent::Drag { pos, start } if self.gesture.is_some() => {
                let raw = *pos - *start;
                if let Some(gesture) = &mut self.gesture {
                    gesture.last_raw = raw;
                }
                self.apply();
                EventResult::Consumed
            }

            UiEvent::DragEnd { .. } if self.gesture.is_some() => {
                self.gesture = None;
                if let Some(target) = self.target.as_mut() {
                    target.commit();
                }
                EventResult::Consumed
            }

            UiEvent::KeyDown { key: Key::Shift, .. } => self.set_aspect_lock(true),
            UiEvent::KeyUp { key: Key::Shift, .. } => self.set_aspect_lock(false),

            _ => EventResult::Ignored,
        }
    }
}

/// Scale multiplier for a drag of `raw` against `quad` from `anchor`.
fn scale_factor(anchor: Anchor, quad: Rect, raw: Vec2, aspect_locked: bool) -> Vec2 {
    let delta = anchor.outward_delta(raw);

    // Degenerate extents scale by 1 rather than going non-finite.
    let sx = if anchor.controls_x() && quad.size.x != 0.0 {
        1.0 + delta.x / quad.size.x
    } else {
        1.0
    };
    let sy = if anchor.controls_y() && quad.size.y != 0.0 {
        1.0 + delta.y / quad.size.y
    } else {
        1.0
    };

    if aspect_locked {
        Vec2::splat((sx + sy) * 0.5)
    } else {
        Vec2::new(sx, sy)
    }
}
