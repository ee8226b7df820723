// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of the ring, avatar circle and caption badge inside the widget box.
//!
//! The ring inset depends on the badge height, while the badge sits on the
//! ring's lower edge. The badge height used here is therefore the one observed
//! by the host on a previous pass (see [`WidgetState`](crate::WidgetState)); the
//! first pass uses `0` and the layout settles once the measurement arrives.
//!
//! ```
//! use avatar_countdown::compute_offsets;
//!
//! let first = compute_offsets(0.0, 4.0);
//! assert_eq!((first.ring_padding, first.avatar_padding), (0.0, 4.0));
//!
//! let settled = compute_offsets(50.0, 4.0);
//! assert_eq!((settled.ring_padding, settled.avatar_padding), (5.0, 9.0));
//! ```

use kurbo::{Point, Rect, RoundedRect, Size, Vec2};

use crate::style::StyleConfig;

/// Divisor applied to the badge height to get the ring inset.
///
/// Damps the feedback between badge size and ring geometry so a change in the
/// caption only nudges the ring. Tunable; it is a visual constant, not a derived law.
pub const RING_DAMPING: f64 = 10.0;

/// Insets applied to the ring and the avatar circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offsets {
    /// Inset of the ring's bounds from the widget box, on every side.
    pub ring_padding: f64,
    /// Inset of the avatar circle from the widget box, on every side.
    pub avatar_padding: f64,
}

/// Computes ring and avatar insets from the last observed badge height.
pub fn compute_offsets(badge_height: f64, inner_space: f64) -> Offsets {
    let ring_padding = badge_height / RING_DAMPING;
    Offsets {
        ring_padding,
        avatar_padding: ring_padding + inner_space,
    }
}

/// Resolved rectangles for one render pass, in the widget's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetLayout {
    /// The widget box, anchored at the origin.
    pub bounds: Rect,
    /// Insets this layout was derived from.
    pub offsets: Offsets,
    /// Rect the ring's arc is inscribed in.
    pub ring_bounds: Rect,
    /// Rect of the avatar circle.
    pub avatar_bounds: Rect,
    /// Circular clip of the avatar (a stadium when the box is not square).
    pub avatar_clip: RoundedRect,
    /// Where the avatar text block starts so that it is centered.
    pub avatar_text_origin: Point,
    /// Outer rect of the caption badge, including its inner padding.
    pub badge_bounds: Rect,
    /// Rounded clip of the caption badge.
    pub badge_clip: RoundedRect,
    /// Where the caption text block starts.
    pub badge_text_origin: Point,
}

/// Lays out the widget in a box of `box_size`.
///
/// - `avatar_text` and `badge_content` are the measured sizes of the two text blocks.
/// - `measured_badge_height` is the badge height reported by the host on an earlier pass.
///
/// Negative or NaN box dimensions are treated as zero. Insets larger than the box
/// collapse the affected rect onto the box center instead of inverting it.
pub fn resolve(
    box_size: Size,
    avatar_text: Size,
    badge_content: Size,
    measured_badge_height: f64,
    style: &StyleConfig,
) -> WidgetLayout {
    let bounds = Rect::from_origin_size(
        Point::ZERO,
        Size::new(box_size.width.max(0.0), box_size.height.max(0.0)),
    );
    let offsets = compute_offsets(measured_badge_height, style.inner_space);

    let ring_bounds = deflate(bounds, offsets.ring_padding);
    let avatar_bounds = deflate(bounds, offsets.avatar_padding);
    let avatar_radius = avatar_bounds.width().min(avatar_bounds.height()) / 2.0;
    let avatar_clip = RoundedRect::from_rect(avatar_bounds, avatar_radius);
    let avatar_text_origin =
        avatar_bounds.center() - Vec2::new(avatar_text.width / 2.0, avatar_text.height / 2.0);

    let padding = style.badge_padding;
    let badge_size = Size::new(
        badge_content.width + 2.0 * padding,
        badge_content.height + 2.0 * padding,
    );
    let badge_origin = Point::new(
        (bounds.width() - badge_size.width) / 2.0,
        bounds.height() - badge_size.height,
    );
    let badge_bounds = Rect::from_origin_size(badge_origin, badge_size);
    let badge_clip = RoundedRect::from_rect(badge_bounds, style.badge_corner_radius);
    let badge_text_origin = badge_origin + Vec2::new(padding, padding);

    WidgetLayout {
        bounds,
        offsets,
        ring_bounds,
        avatar_bounds,
        avatar_clip,
        avatar_text_origin,
        badge_bounds,
        badge_clip,
        badge_text_origin,
    }
}

/// Shrinks `rect` by `amount` on every side, never past its center.
fn deflate(rect: Rect, amount: f64) -> Rect {
    let c = rect.center();
    Rect::new(
        (rect.x0 + amount).min(c.x),
        (rect.y0 + amount).min(c.y),
        (rect.x1 - amount).max(c.x),
        (rect.y1 - amount).max(c.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_damped_badge_height() {
        for h in [0.0, 1.0, 12.5, 50.0, 300.0] {
            let o = compute_offsets(h, 4.0);
            assert_eq!(o.ring_padding, h / 10.0);
            assert_eq!(o.avatar_padding, o.ring_padding + 4.0);
            assert!(o.avatar_padding > o.ring_padding, "avatar sits inside the ring");
        }
        let flush = compute_offsets(20.0, 0.0);
        assert_eq!(flush.avatar_padding, flush.ring_padding);
    }

    #[test]
    fn offsets_converge_after_measurement() {
        let first = compute_offsets(0.0, 4.0);
        assert_eq!(first, Offsets { ring_padding: 0.0, avatar_padding: 4.0 });
        let measured = compute_offsets(50.0, 4.0);
        assert_eq!(measured, Offsets { ring_padding: 5.0, avatar_padding: 9.0 });
        let again = compute_offsets(50.0, 4.0);
        assert_eq!(again, measured, "unchanged badge height is a fixed point");
    }

    #[test]
    fn square_box_layout() {
        let style = StyleConfig::default();
        let layout = resolve(
            Size::new(100.0, 100.0),
            Size::new(20.0, 10.0),
            Size::new(40.0, 16.0),
            20.0,
            &style,
        );
        assert_eq!(layout.bounds, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(layout.ring_bounds, Rect::new(2.0, 2.0, 98.0, 98.0));
        assert_eq!(layout.avatar_bounds, Rect::new(6.0, 6.0, 94.0, 94.0));
        assert_eq!(layout.avatar_clip.radii().top_left, 44.0);
        assert_eq!(layout.avatar_text_origin, Point::new(40.0, 45.0));

        // 40x16 text plus 2px padding on each side, bottom-centered.
        assert_eq!(layout.badge_bounds, Rect::new(28.0, 80.0, 72.0, 100.0));
        assert_eq!(layout.badge_clip.radii().top_left, 2.0);
        assert_eq!(layout.badge_text_origin, Point::new(30.0, 82.0));
    }

    #[test]
    fn ring_stays_concentric_with_avatar() {
        let style = StyleConfig::default();
        let layout = resolve(Size::new(80.0, 120.0), Size::ZERO, Size::ZERO, 33.0, &style);
        assert_eq!(layout.ring_bounds.center(), layout.avatar_bounds.center());
        assert_eq!(layout.avatar_clip.radii().top_left, layout.avatar_bounds.width() / 2.0);
    }

    #[test]
    fn degenerate_boxes_collapse() {
        let style = StyleConfig::default();
        let negative = resolve(Size::new(-10.0, -5.0), Size::ZERO, Size::ZERO, 0.0, &style);
        assert_eq!(negative.bounds, Rect::ZERO);
        assert_eq!(negative.ring_bounds.area(), 0.0);
        assert_eq!(negative.avatar_bounds.area(), 0.0);

        let tiny = resolve(Size::new(4.0, 4.0), Size::ZERO, Size::ZERO, 100.0, &style);
        assert_eq!(tiny.avatar_bounds, Rect::new(2.0, 2.0, 2.0, 2.0));
        assert!(tiny.ring_bounds.width() >= 0.0, "insets never invert a rect");
    }
}
