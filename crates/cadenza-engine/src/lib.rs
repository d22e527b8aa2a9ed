//! Cadenza engine crate.
//!
//! Platform-agnostic primitives shared by the client's UI layers: geometry
//! and anchors, input identifiers, observable values, and gameplay timing.
//! Rendering, windowing, and audio live behind the collaborating layers and
//! never leak types into this crate.

pub mod binding;
pub mod coords;
pub mod input;
pub mod logging;
pub mod time;
