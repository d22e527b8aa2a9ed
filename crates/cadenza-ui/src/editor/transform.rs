use cadenza_engine::coords::{Rect, Vec2};

/// Transform session the selection layer hands to scale handles.
///
/// One session spans one drag gesture: `begin` at drag start, any number of
/// `update`s while the pointer moves, `commit` on release.
pub trait ScaleTarget {
    /// Begins a scale session.
    ///
    /// Returns the selection's bounding quad captured at gesture start, or
    /// `None` when nothing is selected / the selection cannot be scaled;
    /// in that case no gesture begins.
    fn begin(&mut self) -> Option<Rect>;

    /// Applies `scale` (multiplier per axis) around the fixed point `origin`.
    /// Replaces, not accumulates: each call carries the full factor relative
    /// to the quad returned by `begin`.
    fn update(&mut self, scale: Vec2, origin: Vec2);

    /// Finalizes the session started by `begin`.
    fn commit(&mut self);
}
