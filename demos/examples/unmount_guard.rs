// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unmount guard.
//!
//! A measurement callback that arrives after its widget was removed is
//! ignored, even when the freed slot already hosts a new widget.
//!
//! Run:
//! - `cargo run -p avatar_countdown_demos --example unmount_guard`

use avatar_countdown::{AvatarCountdown, Compositor, StyleConfig};
use avatar_countdown_demos::init_logging;

fn main() {
    init_logging();

    let mut compositor = Compositor::new();
    let old = compositor.mount(AvatarCountdown::new("A", "1 h", 90), StyleConfig::default());
    compositor.unmount(old);

    let new = compositor.mount(AvatarCountdown::new("K.L", "5 min", 10), StyleConfig::default());
    println!("old id: {old:?}, new id: {new:?}");

    // The host delivers the stale callback late.
    let redraw = compositor.on_badge_measured(old, 24.0);
    println!("stale callback requested redraw: {redraw}");
    assert!(!redraw);

    let height = compositor
        .state(new)
        .expect("new widget is mounted")
        .measured_badge_height();
    println!("new widget badge height: {height}");
    assert_eq!(height, 0.0, "stale callback must not leak into the new widget");
}
