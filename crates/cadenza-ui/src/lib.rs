//! Cadenza UI — gameplay and editor widgets on top of `cadenza-engine`.
//!
//! Widgets here own state and event handling only; the hosting runtime
//! routes input to [`Widget::on_event`], ticks [`Widget::update`] once per
//! frame, and draws from widget state. External capabilities (selection
//! transforms, beatmap resolution, statistics generation, login state) are
//! constructor-injected trait objects.
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`] for any type, then use it anywhere an [`Element`]
//! is accepted:
//!
//! ```rust,ignore
//! use cadenza_ui::prelude::*;
//!
//! pub struct ComboCounter { pub combo: u32 }
//!
//! impl Widget for ComboCounter {}
//! ```
//!
//! [`Widget`]: widget::Widget
//! [`Widget::on_event`]: widget::Widget::on_event
//! [`Widget::update`]: widget::Widget::update
//! [`Element`]: widget::Element

pub mod editor;
pub mod event;
pub mod results;
pub mod widget;

/// Everything needed to build and extend UI — import this in component files.
pub mod prelude {
    pub use crate::editor::{ScaleHandle, ScaleTarget};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::results::{
        AttachedStatistic, BeatmapResolver, HitEvent, HitResult, LoadToken, PanelContent,
        PlayableBeatmap, ResolveError, Score, SessionProvider, StatisticItem, StatisticsPanel,
        StatisticsProvider, ValueDisplay,
    };
    pub use crate::widget::{Element, Widget};

    // Re-export the engine primitives everyone needs.
    pub use cadenza_engine::coords::{Anchor, Rect, Vec2};
    pub use cadenza_engine::input::{Key, Modifiers, MouseButton};
}
