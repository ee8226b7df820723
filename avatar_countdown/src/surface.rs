// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the widget relies on but does not implement.
//!
//! The widget never shapes text or rasterizes paths. A host provides a
//! [`TextMeasurer`] for layout and a [`Surface`] to replay
//! [`DrawCommands`](crate::DrawCommands) onto.

use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;

use crate::ring::ArcSpec;
use crate::style::TextStyle;

/// Measures a single text block.
pub trait TextMeasurer {
    /// Size of `text` laid out on one line in `style`.
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &mut T {
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size {
        (**self).measure_text(text, style)
    }
}

/// Drawing primitives in the widget's local coordinate space.
///
/// Every method may fail with the host's own error type; replay stops at the first error.
pub trait Surface {
    /// Error reported by the host.
    type Error;

    /// Strokes `arc` inscribed in `bounds`.
    fn draw_arc(&mut self, color: Color, bounds: Rect, arc: &ArcSpec) -> Result<(), Self::Error>;

    /// Intersects the current clip with `clip` until the matching [`Surface::pop_clip`].
    fn push_clip(&mut self, clip: RoundedRect) -> Result<(), Self::Error>;

    /// Restores the clip active before the last [`Surface::push_clip`].
    fn pop_clip(&mut self) -> Result<(), Self::Error>;

    /// Fills `shape` with a solid color.
    fn fill(&mut self, shape: RoundedRect, color: Color) -> Result<(), Self::Error>;

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, style: &TextStyle, origin: Point)
    -> Result<(), Self::Error>;
}
