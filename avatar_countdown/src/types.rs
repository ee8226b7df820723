// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public handle and flag types for mounted widgets.

/// Identifier for a widget mounted in a [`Compositor`](crate::Compositor).
///
/// This is a small, copyable handle that stays stable while the widget is mounted
/// and becomes invalid once it is unmounted.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On mount, a fresh slot is allocated with generation `1`.
/// - On unmount, the slot is freed; any existing `WidgetId` for that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `WidgetId`.
///
/// ### Liveness
///
/// Use [`Compositor::is_alive`](crate::Compositor::is_alive) to check whether a `WidgetId` still
/// refers to a mounted widget. Stale ids never alias a different widget because the generation
/// must match, which is what makes late measurement callbacks harmless.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Why a widget was queued for another render pass.
    ///
    /// Reasons accumulate until drained by [`Compositor::take_redraws`](crate::Compositor::take_redraws).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RedrawReason: u8 {
        /// The widget was just mounted and has never been rendered.
        const MOUNTED     = 0b0000_0001;
        /// Avatar text, caption text or percentage changed.
        const INPUTS      = 0b0000_0010;
        /// The style bundle was replaced.
        const STYLE       = 0b0000_0100;
        /// The host reported a new badge height.
        const MEASUREMENT = 0b0000_1000;
    }
}

impl Default for RedrawReason {
    fn default() -> Self {
        Self::empty()
    }
}
