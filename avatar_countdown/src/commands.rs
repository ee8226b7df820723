// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands produced by a render pass and their replay onto a [`Surface`].

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, RoundedRect, Size};
use peniko::Color;

use crate::ring::ArcSpec;
use crate::style::TextStyle;
use crate::surface::Surface;

/// One step of a render pass.
#[derive(Clone, Debug)]
pub enum DrawCommand {
    /// Stroke the progress ring.
    Ring(RingCommand),
    /// Paint the avatar circle and its initials.
    Avatar(AvatarCommand),
    /// Place the caption badge.
    Badge(BadgeCommand),
}

/// Progress ring stroke.
#[derive(Clone, Debug)]
pub struct RingCommand {
    /// Stroke color.
    pub color: Color,
    /// Rect the arc is inscribed in.
    pub bounds: Rect,
    /// Arc geometry and stroke.
    pub arc: ArcSpec,
}

/// Avatar circle with centered initials.
#[derive(Clone, Debug)]
pub struct AvatarCommand {
    /// Circular clip, also the filled shape.
    pub clip: RoundedRect,
    /// Fill color.
    pub background: Color,
    /// Initials.
    pub text: String,
    /// Style of the initials.
    pub text_style: TextStyle,
    /// Top-left of the text block.
    pub text_origin: Point,
}

/// Caption badge anchored at the bottom center of the widget.
///
/// Hosts report the laid out height of the caption text (excluding
/// [`StyleConfig::badge_padding`](crate::StyleConfig::badge_padding)) back through
/// [`Compositor::on_badge_measured`](crate::Compositor::on_badge_measured).
#[derive(Clone, Debug)]
pub struct BadgeCommand {
    /// Outer bounds, including padding.
    pub bounds: Rect,
    /// Rounded clip, also the filled shape.
    pub clip: RoundedRect,
    /// Fill color.
    pub background: Color,
    /// Caption.
    pub text: String,
    /// Style of the caption.
    pub text_style: TextStyle,
    /// Top-left of the caption text block.
    pub text_origin: Point,
    /// Measured size of the caption text block this pass was laid out with.
    pub content_size: Size,
}

/// Ordered list of commands for one pass.
#[derive(Clone, Debug, Default)]
pub struct DrawCommands {
    commands: Vec<DrawCommand>,
}

impl DrawCommands {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in paint order.
    pub fn iter(&self) -> core::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// The ring command, if any.
    pub fn ring(&self) -> Option<&RingCommand> {
        self.iter().find_map(|c| match c {
            DrawCommand::Ring(r) => Some(r),
            _ => None,
        })
    }

    /// The avatar command, if any.
    pub fn avatar(&self) -> Option<&AvatarCommand> {
        self.iter().find_map(|c| match c {
            DrawCommand::Avatar(a) => Some(a),
            _ => None,
        })
    }

    /// The badge command, if any.
    pub fn badge(&self) -> Option<&BadgeCommand> {
        self.iter().find_map(|c| match c {
            DrawCommand::Badge(b) => Some(b),
            _ => None,
        })
    }

    /// Issues every command to `surface` in order.
    ///
    /// Clips pushed for a command are popped before the next one starts.
    /// The first surface error aborts the replay and is returned.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        for command in &self.commands {
            match command {
                DrawCommand::Ring(ring) => {
                    surface.draw_arc(ring.color, ring.bounds, &ring.arc)?;
                }
                DrawCommand::Avatar(avatar) => {
                    surface.push_clip(avatar.clip)?;
                    surface.fill(avatar.clip, avatar.background)?;
                    surface.draw_text(&avatar.text, &avatar.text_style, avatar.text_origin)?;
                    surface.pop_clip()?;
                }
                DrawCommand::Badge(badge) => {
                    surface.push_clip(badge.clip)?;
                    surface.fill(badge.clip, badge.background)?;
                    surface.draw_text(&badge.text, &badge.text_style, badge.text_origin)?;
                    surface.pop_clip()?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DrawCommands {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
