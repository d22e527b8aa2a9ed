//! Observable values.
//!
//! A `Bindable` is a single-threaded cell whose registered handlers run
//! synchronously when the value actually changes. It backs the client's
//! flag-driven couplings (pause state, score assignment) without pulling in
//! a full reactive framework.

mod bindable;

pub use bindable::{Bindable, ValueChange};
