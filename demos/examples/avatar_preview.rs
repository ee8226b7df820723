// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Avatar preview.
//!
//! Render the "B.Z" / "3 days" / 50% widget in a 100x100 box, feed the badge
//! measurement back, and print both passes.
//!
//! Run:
//! - `cargo run -p avatar_countdown_demos --example avatar_preview`

use avatar_countdown::{AvatarCountdown, Compositor, StyleConfig};
use avatar_countdown_demos::{ApproxMeasurer, ConsoleSurface, init_logging};
use kurbo::Size;

fn main() {
    init_logging();

    let mut compositor = Compositor::new();
    let id = compositor.mount(
        AvatarCountdown::new("B.Z", "3 days", 50),
        StyleConfig::default(),
    );
    let box_size = Size::new(100.0, 100.0);

    let mut pass = 0;
    while compositor.has_pending_redraws() {
        for (widget, reason) in compositor.take_redraws() {
            pass += 1;
            println!("pass {pass} ({reason:?})");
            let frame = compositor
                .render(widget, box_size, &mut ApproxMeasurer)
                .expect("widget is mounted");
            let Ok(()) = frame.commands.replay(&mut ConsoleSurface::default());

            // Our host lays the caption out exactly as measured.
            if let Some(badge) = frame.commands.badge() {
                compositor.on_badge_measured(widget, badge.content_size.height);
            }
        }
    }
    let state = compositor.state(id).expect("widget is mounted");
    println!(
        "settled after {pass} passes, badge height {}",
        state.measured_badge_height()
    );
    assert_eq!(pass, 2, "layout should settle one pass after measurement");
}
