// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Avatar Countdown: a Kurbo-native avatar widget with a countdown ring.
//!
//! The widget is a circular avatar with initials, wrapped in an arc-shaped
//! progress ring, with a small caption badge centered on the ring's lower edge.
//!
//! - Maps a percentage to a signed arc ([`compute_arc`]).
//! - Lays out ring, avatar and badge in a box ([`resolve`], [`compute_offsets`]).
//! - Runs render passes and owns per-widget state ([`render`], [`Compositor`]).
//!
//! ## Two-pass layout
//!
//! The ring is inset by a tenth of the badge height, and the badge is placed
//! relative to the ring. The widget breaks this cycle with an explicit state
//! slot: each pass reads the badge height the host reported after the previous
//! pass. The first pass assumes `0`; the layout settles one pass after the
//! measurement arrives, and an unchanged measurement is a fixed point.
//!
//! ## Not a renderer
//!
//! This crate does not shape text or rasterize paths. Hosts implement
//! [`TextMeasurer`] and [`Surface`], replay [`DrawCommands`] onto their canvas,
//! and call [`Compositor::on_badge_measured`] once their layout knows the caption's height.
//!
//! ## API overview
//!
//! - [`StyleConfig`]: colors, text styles, ring stroke and spacing; passed explicitly, no theme lookup.
//! - [`AvatarCountdown`]: widget inputs (initials, caption, percentage).
//! - [`WidgetState`]: last observed badge height and measurement [`Phase`].
//! - [`ArcSpec`], [`Offsets`], [`WidgetLayout`]: derived geometry for one pass.
//! - [`Compositor`]: generational registry of mounted widgets with a redraw queue.
//!
//! ### Minimal usage
//!
//! ```
//! use avatar_countdown::{AvatarCountdown, Compositor, StyleConfig, TextMeasurer, TextStyle};
//! use kurbo::Size;
//!
//! // A stand-in for the host's text shaper.
//! struct Fixed;
//! impl TextMeasurer for Fixed {
//!     fn measure_text(&mut self, text: &str, _: &TextStyle) -> Size {
//!         Size::new(8.0 * text.len() as f64, 50.0)
//!     }
//! }
//!
//! let mut compositor = Compositor::new();
//! let id = compositor.mount(AvatarCountdown::new("B.Z", "3 days", 50), StyleConfig::default());
//!
//! // First pass: badge height unknown, ring flush with the box.
//! let frame = compositor.render(id, Size::new(100.0, 100.0), &mut Fixed).unwrap();
//! assert_eq!(frame.commands.ring().unwrap().arc.sweep_angle, -180.0);
//! assert_eq!(frame.layout.offsets.ring_padding, 0.0);
//!
//! // The host reports the caption height; the widget asks for another pass.
//! assert!(compositor.on_badge_measured(id, 50.0));
//! assert_eq!(compositor.take_redraws().len(), 1);
//!
//! let frame = compositor.render(id, Size::new(100.0, 100.0), &mut Fixed).unwrap();
//! assert_eq!(frame.layout.offsets.ring_padding, 5.0);
//! assert_eq!(frame.layout.offsets.avatar_padding, 9.0);
//!
//! // Same height again: nothing left to do.
//! assert!(!compositor.on_badge_measured(id, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod commands;
mod compositor;
mod layout;
mod ring;
mod state;
mod style;
mod surface;
mod types;

pub use kurbo;
pub use peniko;

pub use commands::{AvatarCommand, BadgeCommand, DrawCommand, DrawCommands, RingCommand};
pub use compositor::{AvatarCountdown, Compositor, Frame, render};
pub use layout::{Offsets, RING_DAMPING, WidgetLayout, compute_offsets, resolve};
pub use ring::{ArcSpec, DEFAULT_START_ANGLE, compute_arc, sweep_angle};
pub use state::{Phase, WidgetState};
pub use style::{FontWeight, StyleConfig, TextAlign, TextStyle, palette};
pub use surface::{Surface, TextMeasurer};
pub use types::{RedrawReason, WidgetId};
