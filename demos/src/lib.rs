// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host stand-ins for the demos: a rough text measurer, a surface that
//! prints what it is asked to draw, and logging setup.

use std::convert::Infallible;

use avatar_countdown::{ArcSpec, Surface, TextMeasurer, TextStyle};
use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;

/// Install a `tracing` subscriber honoring `RUST_LOG`, defaulting to debug output for the widget.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "avatar_countdown=trace".into()),
        )
        .init();
}

/// Approximates text metrics from the font size: fixed advance, 1.2 line height.
#[derive(Debug, Default)]
pub struct ApproxMeasurer;

impl TextMeasurer for ApproxMeasurer {
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * style.font_size * 0.6, style.font_size * 1.2)
    }
}

/// Prints every drawing call, indented by clip depth.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    depth: usize,
}

impl ConsoleSurface {
    fn line(&self, msg: std::fmt::Arguments<'_>) {
        println!("{:indent$}{msg}", "", indent = self.depth * 2);
    }
}

impl Surface for ConsoleSurface {
    type Error = Infallible;

    fn draw_arc(&mut self, _: Color, bounds: Rect, arc: &ArcSpec) -> Result<(), Self::Error> {
        self.line(format_args!(
            "arc in {bounds:?}: start {}°, sweep {}°, width {}, cap {:?}",
            arc.start_angle, arc.sweep_angle, arc.stroke_width, arc.cap
        ));
        Ok(())
    }

    fn push_clip(&mut self, clip: RoundedRect) -> Result<(), Self::Error> {
        self.line(format_args!("clip {:?}", clip.rect()));
        self.depth += 1;
        Ok(())
    }

    fn pop_clip(&mut self) -> Result<(), Self::Error> {
        self.depth = self.depth.saturating_sub(1);
        Ok(())
    }

    fn fill(&mut self, shape: RoundedRect, _: Color) -> Result<(), Self::Error> {
        self.line(format_args!(
            "fill {:?} (corner radius {})",
            shape.rect(),
            shape.radii().top_left
        ));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _: &TextStyle, origin: Point) -> Result<(), Self::Error> {
        self.line(format_args!("text {text:?} at {origin:?}"));
        Ok(())
    }
}
