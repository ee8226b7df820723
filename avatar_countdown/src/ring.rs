// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progress ring geometry: percentage to arc.
//!
//! Angles are in degrees, measured from the positive x axis with y pointing down,
//! so positive sweeps run clockwise on screen. The ring always sweeps in the
//! negative direction from its start angle.
//!
//! Percentages are not validated. `0` gives an empty arc at the start angle,
//! `100` a full turn, and anything beyond wraps past a full turn (`150` sweeps
//! `-540` degrees). Most surfaces clip such an arc to a single revolution.
//!
//! ```
//! use avatar_countdown::{compute_arc, DEFAULT_START_ANGLE, kurbo::Cap};
//!
//! let arc = compute_arc(50.0, DEFAULT_START_ANGLE, 6.0, Cap::Round);
//! assert_eq!(arc.sweep_angle, -180.0);
//! assert!(!arc.use_center);
//! ```

use kurbo::{Arc, Cap, Rect, Stroke, Vec2};

/// Start angle of the ring, in degrees.
pub const DEFAULT_START_ANGLE: f64 = 90.0;

const FULL_TURN: f64 = 360.0;

/// Description of the progress arc, ready to hand to a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    /// Where the arc starts, in degrees.
    pub start_angle: f64,
    /// Signed arc length in degrees.
    pub sweep_angle: f64,
    /// Whether the arc is closed through the center. Always `false`: the ring is an open stroke.
    pub use_center: bool,
    /// Stroke width.
    pub stroke_width: f64,
    /// Shape of both open ends.
    pub cap: Cap,
}

impl ArcSpec {
    /// Absolute arc length in degrees.
    pub fn sweep_magnitude(&self) -> f64 {
        if self.sweep_angle < 0.0 {
            -self.sweep_angle
        } else {
            self.sweep_angle
        }
    }

    /// True when nothing would be stroked.
    pub fn is_empty(&self) -> bool {
        self.sweep_angle == 0.0
    }

    /// The arc inscribed in `bounds`, angles converted to radians.
    ///
    /// The stroke straddles this path, so half the stroke width extends outside `bounds`.
    pub fn to_arc(&self, bounds: Rect) -> Arc {
        Arc::new(
            bounds.center(),
            Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
            self.start_angle.to_radians(),
            self.sweep_angle.to_radians(),
            0.0,
        )
    }

    /// Stroke style with both caps set to [`ArcSpec::cap`].
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width).with_caps(self.cap)
    }
}

/// Signed sweep for a percentage: `-(360 * percentage / 100)`.
pub fn sweep_angle(percentage: f64) -> f64 {
    -(FULL_TURN * percentage / 100.0)
}

/// Maps a percentage and stroke parameters to the arc to draw.
pub fn compute_arc(percentage: f64, start_angle: f64, stroke_width: f64, cap: Cap) -> ArcSpec {
    ArcSpec {
        start_angle,
        sweep_angle: sweep_angle(percentage),
        use_center: false,
        stroke_width,
        cap,
    }
}
