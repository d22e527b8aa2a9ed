//! Input identifiers.
//!
//! Public API is platform-agnostic: the hosting runtime translates window
//! system events into these types before they reach any widget.

mod types;

pub use types::{Key, Modifiers, MouseButton};
