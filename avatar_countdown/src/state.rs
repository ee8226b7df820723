// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget state carried between render passes.

/// Whether the host has reported the badge size yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No measurement received; layout assumes a zero-height badge.
    #[default]
    Unmeasured,
    /// At least one measurement received. Re-entered on every later callback.
    Measured,
}

/// State that survives across render passes of one widget instance.
///
/// The only persistent value is the last observed badge height. It breaks the
/// cycle between ring inset and badge placement: a pass reads it, the host
/// reports the new height afterwards, and the next pass consumes that.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WidgetState {
    measured_badge_height: f64,
    phase: Phase,
}

impl WidgetState {
    /// Fresh, unmeasured state.
    pub const fn new() -> Self {
        Self {
            measured_badge_height: 0.0,
            phase: Phase::Unmeasured,
        }
    }

    /// Last badge height reported by the host, `0` before the first report.
    pub fn measured_badge_height(&self) -> f64 {
        self.measured_badge_height
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Records a reported badge height, replacing the previous one.
    ///
    /// Negative and non-finite heights are stored as `0`.
    /// Returns `true` when the stored height changed and another pass is needed.
    pub fn record_badge_height(&mut self, height: f64) -> bool {
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            0.0
        };
        self.phase = Phase::Measured;
        if height == self.measured_badge_height {
            return false;
        }
        self.measured_badge_height = height;
        true
    }
}
