use super::{Rect, Vec2};

/// Which edge or corner of a box a control is attached to.
///
/// Stored as explicit edge booleans rather than a packed bitset so the
/// participating axes are readable at a glance. An axis with neither of its
/// edges set is not controlled by the anchor (a purely horizontal handle has
/// `top == bottom == false`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Anchor {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Anchor {
    #[inline]
    pub const fn centre() -> Self {
        Self { left: false, right: false, top: false, bottom: false }
    }

    #[inline]
    pub const fn top_left() -> Self {
        Self { left: true, right: false, top: true, bottom: false }
    }

    #[inline]
    pub const fn top() -> Self {
        Self { left: false, right: false, top: true, bottom: false }
    }

    #[inline]
    pub const fn top_right() -> Self {
        Self { left: false, right: true, top: true, bottom: false }
    }

    #[inline]
    pub const fn left() -> Self {
        Self { left: true, right: false, top: false, bottom: false }
    }

    #[inline]
    pub const fn right() -> Self {
        Self { left: false, right: true, top: false, bottom: false }
    }

    #[inline]
    pub const fn bottom_left() -> Self {
        Self { left: true, right: false, top: false, bottom: true }
    }

    #[inline]
    pub const fn bottom() -> Self {
        Self { left: false, right: false, top: false, bottom: true }
    }

    #[inline]
    pub const fn bottom_right() -> Self {
        Self { left: false, right: true, top: false, bottom: true }
    }

    /// Whether the horizontal axis participates in a transform from this anchor.
    #[inline]
    pub const fn controls_x(self) -> bool {
        self.left || self.right
    }

    /// Whether the vertical axis participates in a transform from this anchor.
    #[inline]
    pub const fn controls_y(self) -> bool {
        self.top || self.bottom
    }

    /// The anchor across the box: left/right and top/bottom swapped.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            top: self.bottom,
            bottom: self.top,
        }
    }

    /// Converts a raw pointer displacement into outward growth.
    ///
    /// Axes the anchor does not control are zeroed; left/top displacement is
    /// sign-inverted so that dragging away from the box is always positive.
    pub fn outward_delta(self, drag: Vec2) -> Vec2 {
        let mut d = drag;

        if !self.controls_x() {
            d.x = 0.0;
        } else if self.left {
            d.x = -d.x;
        }

        if !self.controls_y() {
            d.y = 0.0;
        } else if self.top {
            d.y = -d.y;
        }

        d
    }

    /// The point of `quad` that stays fixed while scaling from this anchor.
    ///
    /// Dragging a corner pins the opposite corner; dragging an edge pins the
    /// opposite edge's midline; an uncontrolled axis pins the centre.
    pub fn origin_on(self, quad: Rect) -> Vec2 {
        let x = if self.left {
            quad.max().x
        } else if self.right {
            quad.min().x
        } else {
            quad.center().x
        };

        let y = if self.top {
            quad.max().y
        } else if self.bottom {
            quad.min().y
        } else {
            quad.center().y
        };

        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: Rect = Rect::new(10.0, 20.0, 100.0, 50.0);

    // ── axis participation ────────────────────────────────────────────────

    #[test]
    fn centre_controls_nothing() {
        let a = Anchor::centre();
        assert!(!a.controls_x());
        assert!(!a.controls_y());
    }

    #[test]
    fn edges_control_one_axis() {
        assert!(Anchor::left().controls_x());
        assert!(!Anchor::left().controls_y());
        assert!(Anchor::bottom().controls_y());
        assert!(!Anchor::bottom().controls_x());
    }

    // ── opposite ──────────────────────────────────────────────────────────

    #[test]
    fn opposite_swaps_both_axes() {
        assert_eq!(Anchor::top_left().opposite(), Anchor::bottom_right());
        assert_eq!(Anchor::right().opposite(), Anchor::left());
        assert_eq!(Anchor::centre().opposite(), Anchor::centre());
    }

    // ── outward_delta ─────────────────────────────────────────────────────

    #[test]
    fn outward_delta_zeroes_uncontrolled_axis() {
        let d = Anchor::right().outward_delta(Vec2::new(12.0, 7.0));
        assert_eq!(d, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn outward_delta_inverts_left_and_top() {
        // Dragging a left handle further left grows the box.
        let d = Anchor::top_left().outward_delta(Vec2::new(-4.0, -6.0));
        assert_eq!(d, Vec2::new(4.0, 6.0));
    }

    #[test]
    fn outward_delta_bottom_right_passes_through() {
        let d = Anchor::bottom_right().outward_delta(Vec2::new(4.0, 6.0));
        assert_eq!(d, Vec2::new(4.0, 6.0));
    }

    // ── origin_on ─────────────────────────────────────────────────────────

    #[test]
    fn corner_anchor_pins_opposite_corner() {
        assert_eq!(Anchor::top_right().origin_on(QUAD), Vec2::new(10.0, 70.0));
        assert_eq!(Anchor::bottom_left().origin_on(QUAD), Vec2::new(110.0, 20.0));
    }

    #[test]
    fn edge_anchor_pins_opposite_edge_midline() {
        assert_eq!(Anchor::left().origin_on(QUAD), Vec2::new(110.0, 45.0));
        assert_eq!(Anchor::bottom().origin_on(QUAD), Vec2::new(60.0, 20.0));
    }

    #[test]
    fn centre_anchor_pins_centre() {
        assert_eq!(Anchor::centre().origin_on(QUAD), QUAD.center());
    }
}
