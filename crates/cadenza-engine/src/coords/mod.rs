//! Coordinate and geometry types shared across the client.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod anchor;
mod rect;
mod vec2;

pub use anchor::Anchor;
pub use rect::Rect;
pub use vec2::Vec2;
