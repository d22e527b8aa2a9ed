//! Gameplay timing.
//!
//! All gameplay time is `f64` milliseconds. The layering is:
//! - an [`AdjustableClock`] source that can be sought and started/stopped
//!   independently of its consumers,
//! - a [`FramedClock`] that quantizes the source so one frame observes one
//!   consistent timestamp,
//! - a [`GameplayClockCoordinator`] that owns both and drives them from a
//!   single paused flag, exposing a read-only [`GameplayClock`] downstream.

mod adjustable;
mod framed;
mod gameplay;

pub use adjustable::{AdjustableClock, StopwatchClock};
pub use framed::FramedClock;
pub use gameplay::{ClockError, GameplayClock, GameplayClockCoordinator};
