// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style bundle for the avatar countdown widget.
//!
//! Styles are plain values supplied by the caller on every pass.
//! There is no theme lookup: [`StyleConfig::default`] is a fixed palette and
//! callers derive variations from it with the `with_*` setters.
//!
//! ```
//! use avatar_countdown::{StyleConfig, kurbo::Cap};
//!
//! let style = StyleConfig::default()
//!     .with_stroke_width(8.0)
//!     .with_cap(Cap::Butt);
//! assert_eq!(style.stroke_width, 8.0);
//! assert_eq!(style.inner_space, 4.0);
//! ```

use kurbo::Cap;
use peniko::Color;

use crate::ring::DEFAULT_START_ANGLE;

/// Baseline palette used by [`StyleConfig::default`].
pub mod palette {
    use peniko::Color;

    /// Ring and badge background.
    pub const PRIMARY: Color = Color::from_rgb8(0x67, 0x50, 0xA4);
    /// Badge caption text.
    pub const ON_PRIMARY: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    /// Avatar circle background.
    pub const SURFACE_VARIANT: Color = Color::from_rgb8(0xE7, 0xE0, 0xEC);
    /// Avatar initials.
    pub const ON_SURFACE_VARIANT: Color = Color::from_rgb8(0x49, 0x45, 0x4F);
}

/// Font weight requested from the host text shaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Horizontal alignment of a text block within its own line box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Leading edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Trailing edge.
    End,
}

/// Text styling handed through to the host's measurer and text renderer.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    /// Fill color of the glyphs.
    pub color: Color,
    /// Font size in logical pixels.
    pub font_size: f64,
    /// Requested weight.
    pub font_weight: FontWeight,
    /// Alignment within the text block.
    pub align: TextAlign,
}

impl TextStyle {
    /// Default font size in logical pixels.
    pub const DEFAULT_FONT_SIZE: f64 = 14.0;

    /// A regular, start-aligned style in the given color.
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: FontWeight::Normal,
            align: TextAlign::Start,
        }
    }

    /// Returns this style with a different font size.
    #[must_use]
    pub const fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns this style with a different weight.
    #[must_use]
    pub const fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Returns this style with a different alignment.
    #[must_use]
    pub const fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Everything that controls how the widget looks.
///
/// Lengths are logical pixels in the widget's local coordinate space.
#[derive(Clone, Debug)]
pub struct StyleConfig {
    /// Style of the initials drawn inside the avatar circle.
    pub avatar_text: TextStyle,
    /// Style of the caption inside the badge.
    pub counter_text: TextStyle,
    /// Fill of the avatar circle.
    pub avatar_background: Color,
    /// Fill of the caption badge.
    pub counter_background: Color,
    /// Stroke color of the progress ring.
    pub ring_color: Color,
    /// Gap between the ring and the avatar circle.
    pub inner_space: f64,
    /// Stroke width of the progress ring.
    pub stroke_width: f64,
    /// Corner radius of the caption badge.
    pub badge_corner_radius: f64,
    /// Padding between the caption text and the badge edge.
    pub badge_padding: f64,
    /// Shape of the ring's open ends.
    pub cap: Cap,
    /// Angle in degrees where the ring starts.
    pub start_angle: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            avatar_text: TextStyle::new(palette::ON_SURFACE_VARIANT)
                .with_weight(FontWeight::Bold)
                .with_align(TextAlign::Center),
            counter_text: TextStyle::new(palette::ON_PRIMARY),
            avatar_background: palette::SURFACE_VARIANT,
            counter_background: palette::PRIMARY,
            ring_color: palette::PRIMARY,
            inner_space: 4.0,
            stroke_width: 6.0,
            badge_corner_radius: 2.0,
            badge_padding: 2.0,
            cap: Cap::Round,
            start_angle: DEFAULT_START_ANGLE,
        }
    }
}

impl StyleConfig {
    /// Returns this style with a different avatar text style.
    #[must_use]
    pub fn with_avatar_text(mut self, style: TextStyle) -> Self {
        self.avatar_text = style;
        self
    }

    /// Returns this style with a different caption text style.
    #[must_use]
    pub fn with_counter_text(mut self, style: TextStyle) -> Self {
        self.counter_text = style;
        self
    }

    /// Returns this style with a different avatar fill.
    #[must_use]
    pub fn with_avatar_background(mut self, color: Color) -> Self {
        self.avatar_background = color;
        self
    }

    /// Returns this style with a different badge fill.
    #[must_use]
    pub fn with_counter_background(mut self, color: Color) -> Self {
        self.counter_background = color;
        self
    }

    /// Returns this style with a different ring color.
    #[must_use]
    pub fn with_ring_color(mut self, color: Color) -> Self {
        self.ring_color = color;
        self
    }

    /// Returns this style with a different ring/avatar gap.
    #[must_use]
    pub fn with_inner_space(mut self, inner_space: f64) -> Self {
        self.inner_space = inner_space;
        self
    }

    /// Returns this style with a different ring stroke width.
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Returns this style with a different badge corner radius.
    #[must_use]
    pub fn with_badge_corner_radius(mut self, radius: f64) -> Self {
        self.badge_corner_radius = radius;
        self
    }

    /// Returns this style with a different badge inner padding.
    #[must_use]
    pub fn with_badge_padding(mut self, padding: f64) -> Self {
        self.badge_padding = padding;
        self
    }

    /// Returns this style with a different ring cap.
    #[must_use]
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns this style with a different ring start angle, in degrees.
    #[must_use]
    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }
}
