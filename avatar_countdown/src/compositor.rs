// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render passes and the registry of mounted widgets.
//!
//! [`render`] is the pure pass: inputs, style and state in, layout and draw
//! commands out. [`Compositor`] owns the state of each mounted widget, accepts
//! the host's badge measurements and tells the host which widgets need another pass.
//!
//! ## Cycle
//!
//! 1) The host calls [`Compositor::render`] and replays the frame.
//! 2) After its own layout, the host reports the caption height with
//!    [`Compositor::on_badge_measured`].
//! 3) If the height changed, the widget shows up in [`Compositor::take_redraws`]
//!    and step 1 runs again with the new ring inset. An unchanged height is a
//!    fixed point, so the loop settles after one extra pass.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;

use crate::commands::{AvatarCommand, BadgeCommand, DrawCommand, DrawCommands, RingCommand};
use crate::layout::{WidgetLayout, resolve};
use crate::ring::compute_arc;
use crate::state::WidgetState;
use crate::style::StyleConfig;
use crate::surface::TextMeasurer;
use crate::types::{RedrawReason, WidgetId};

/// Inputs of one avatar countdown widget.
#[derive(Clone, Debug, PartialEq)]
pub struct AvatarCountdown {
    /// Initials shown in the avatar circle, ideally two or three characters.
    pub avatar_text: String,
    /// Short caption shown in the badge, such as `"3 days"`.
    pub counter_text: String,
    /// Progress, conceptually `0..=100`. Not validated.
    pub percentage: f64,
}

impl AvatarCountdown {
    /// Creates widget inputs.
    pub fn new(
        avatar_text: impl Into<String>,
        counter_text: impl Into<String>,
        percentage: impl Into<f64>,
    ) -> Self {
        Self {
            avatar_text: avatar_text.into(),
            counter_text: counter_text.into(),
            percentage: percentage.into(),
        }
    }
}

/// Output of one render pass.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Resolved rectangles.
    pub layout: WidgetLayout,
    /// Commands in paint order: ring, avatar, badge.
    pub commands: DrawCommands,
}

/// Runs one render pass.
///
/// Measures both text blocks with `measurer`, lays the widget out in `box_size`
/// using the badge height remembered in `state`, and emits the ring, avatar and
/// badge commands in that order.
pub fn render(
    inputs: &AvatarCountdown,
    style: &StyleConfig,
    state: &WidgetState,
    box_size: Size,
    measurer: &mut impl TextMeasurer,
) -> Frame {
    let avatar_text = measurer.measure_text(&inputs.avatar_text, &style.avatar_text);
    let badge_content = measurer.measure_text(&inputs.counter_text, &style.counter_text);
    let layout = resolve(
        box_size,
        avatar_text,
        badge_content,
        state.measured_badge_height(),
        style,
    );
    let arc = compute_arc(
        inputs.percentage,
        style.start_angle,
        style.stroke_width,
        style.cap,
    );

    let mut commands = DrawCommands::new();
    commands.push(DrawCommand::Ring(RingCommand {
        color: style.ring_color,
        bounds: layout.ring_bounds,
        arc,
    }));
    commands.push(DrawCommand::Avatar(AvatarCommand {
        clip: layout.avatar_clip,
        background: style.avatar_background,
        text: inputs.avatar_text.clone(),
        text_style: style.avatar_text,
        text_origin: layout.avatar_text_origin,
    }));
    commands.push(DrawCommand::Badge(BadgeCommand {
        bounds: layout.badge_bounds,
        clip: layout.badge_clip,
        background: style.counter_background,
        text: inputs.counter_text.clone(),
        text_style: style.counter_text,
        text_origin: layout.badge_text_origin,
        content_size: badge_content,
    }));

    Frame { layout, commands }
}

#[derive(Clone, Debug)]
struct Widget {
    generation: u32,
    inputs: AvatarCountdown,
    style: StyleConfig,
    state: WidgetState,
}

/// Owner of all mounted widgets and their state.
///
/// Each widget lives in a generational slot addressed by a [`WidgetId`].
/// Operations on an unmounted id are no-ops, which keeps late measurement
/// callbacks from writing into a widget that is gone.
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    widgets: Vec<Option<Widget>>, // slots
    generations: Vec<u32>,        // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    pending: Vec<(WidgetId, RedrawReason)>,
}

impl Compositor {
    /// Create an empty compositor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a widget and queues its first pass.
    pub fn mount(&mut self, inputs: AvatarCountdown, style: StyleConfig) -> WidgetId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            (idx, generation)
        } else {
            self.widgets.push(None);
            self.generations.push(1);
            (self.widgets.len() - 1, 1)
        };
        self.widgets[idx] = Some(Widget {
            generation,
            inputs,
            style,
            state: WidgetState::new(),
        });
        #[allow(
            clippy::cast_possible_truncation,
            reason = "WidgetId uses 32-bit indices by design."
        )]
        let id = WidgetId::new(idx as u32, generation);
        tracing::debug!(?id, "mounted avatar countdown");
        self.request_redraw(id, RedrawReason::MOUNTED);
        id
    }

    /// Unmounts a widget. Its id, and any callback holding it, become inert.
    pub fn unmount(&mut self, id: WidgetId) {
        if !self.is_alive(id) {
            return;
        }
        self.widgets[id.idx()] = None;
        self.free_list.push(id.idx());
        self.pending.retain(|(pending, _)| *pending != id);
        tracing::debug!(?id, "unmounted avatar countdown");
    }

    /// Returns true if `id` refers to a mounted widget.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.widgets
            .get(id.idx())
            .and_then(|w| w.as_ref())
            .map(|w| w.generation == id.generation())
            .unwrap_or(false)
    }

    /// Number of mounted widgets.
    pub fn len(&self) -> usize {
        self.widgets.iter().filter(|w| w.is_some()).count()
    }

    /// True if no widget is mounted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets
            .get(id.idx())?
            .as_ref()
            .filter(|w| w.generation == id.generation())
    }

    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets
            .get_mut(id.idx())?
            .as_mut()
            .filter(|w| w.generation == id.generation())
    }

    /// Inputs of a mounted widget.
    pub fn inputs(&self, id: WidgetId) -> Option<&AvatarCountdown> {
        self.widget(id).map(|w| &w.inputs)
    }

    /// Style of a mounted widget.
    pub fn style(&self, id: WidgetId) -> Option<&StyleConfig> {
        self.widget(id).map(|w| &w.style)
    }

    /// State of a mounted widget.
    pub fn state(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widget(id).map(|w| &w.state)
    }

    /// Replaces a widget's inputs and queues a pass. Returns false for a stale id.
    pub fn set_inputs(&mut self, id: WidgetId, inputs: AvatarCountdown) -> bool {
        let Some(widget) = self.widget_mut(id) else {
            return false;
        };
        if widget.inputs == inputs {
            return true;
        }
        widget.inputs = inputs;
        self.request_redraw(id, RedrawReason::INPUTS);
        true
    }

    /// Replaces a widget's style and queues a pass. Returns false for a stale id.
    pub fn set_style(&mut self, id: WidgetId, style: StyleConfig) -> bool {
        let Some(widget) = self.widget_mut(id) else {
            return false;
        };
        widget.style = style;
        self.request_redraw(id, RedrawReason::STYLE);
        true
    }

    /// Runs a render pass for a mounted widget.
    pub fn render(
        &self,
        id: WidgetId,
        box_size: Size,
        measurer: &mut impl TextMeasurer,
    ) -> Option<Frame> {
        let widget = self.widget(id)?;
        tracing::trace!(
            ?id,
            badge_height = widget.state.measured_badge_height(),
            "render pass"
        );
        Some(render(
            &widget.inputs,
            &widget.style,
            &widget.state,
            box_size,
            measurer,
        ))
    }

    /// Measurement callback: the host laid out the caption at `height`.
    ///
    /// Returns true when the height changed and the widget was queued for another pass.
    /// Does nothing for an unmounted widget.
    pub fn on_badge_measured(&mut self, id: WidgetId, height: f64) -> bool {
        let Some(widget) = self.widget_mut(id) else {
            tracing::trace!(?id, height, "ignoring badge measurement for unmounted widget");
            return false;
        };
        if !widget.state.record_badge_height(height) {
            return false;
        }
        tracing::debug!(
            ?id,
            badge_height = widget.state.measured_badge_height(),
            "badge height changed"
        );
        self.request_redraw(id, RedrawReason::MEASUREMENT);
        true
    }

    fn request_redraw(&mut self, id: WidgetId, reason: RedrawReason) {
        if let Some((_, reasons)) = self.pending.iter_mut().find(|(p, _)| *p == id) {
            *reasons |= reason;
        } else {
            self.pending.push((id, reason));
        }
    }

    /// Returns true if any widget waits for a pass.
    pub fn has_pending_redraws(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drains the redraw queue, one entry per widget in request order.
    pub fn take_redraws(&mut self) -> Vec<(WidgetId, RedrawReason)> {
        let mut out = core::mem::take(&mut self.pending);
        out.retain(|(id, _)| self.is_alive(*id));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use alloc::vec;
    use kurbo::{Point, Rect};

    /// Fixed-advance measurer: every character is `advance` wide, lines are `line_height` tall.
    struct Monospace {
        advance: f64,
        line_height: f64,
    }

    impl TextMeasurer for Monospace {
        fn measure_text(&mut self, text: &str, _: &crate::TextStyle) -> Size {
            #[allow(clippy::cast_precision_loss, reason = "test strings are short")]
            let chars = text.chars().count() as f64;
            Size::new(chars * self.advance, self.line_height)
        }
    }

    fn measurer() -> Monospace {
        Monospace {
            advance: 8.0,
            line_height: 50.0,
        }
    }

    fn preview() -> AvatarCountdown {
        AvatarCountdown::new("B.Z", "3 days", 50)
    }

    #[test]
    fn preview_widget_draws_half_ring() {
        let style = StyleConfig::default();
        let frame = render(
            &preview(),
            &style,
            &WidgetState::new(),
            Size::new(100.0, 100.0),
            &mut measurer(),
        );
        let ring = frame.commands.ring().unwrap();
        assert_eq!(ring.arc.sweep_angle, -180.0);
        assert_eq!(ring.arc.start_angle, 90.0);
        assert!(!ring.arc.use_center);
        assert_eq!(ring.bounds, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(frame.commands.len(), 3);
        assert!(matches!(
            frame.commands.iter().collect::<Vec<_>>()[..],
            [
                DrawCommand::Ring(_),
                DrawCommand::Avatar(_),
                DrawCommand::Badge(_)
            ]
        ));
    }

    #[test]
    fn badge_sits_bottom_center() {
        let style = StyleConfig::default();
        let frame = render(
            &preview(),
            &style,
            &WidgetState::new(),
            Size::new(100.0, 100.0),
            &mut measurer(),
        );
        let badge = frame.commands.badge().unwrap();
        // "3 days" is 6 * 8 = 48 wide, 50 tall, plus 2px padding.
        assert_eq!(badge.bounds, Rect::new(24.0, 46.0, 76.0, 100.0));
        assert_eq!(badge.text_origin, Point::new(26.0, 48.0));
        assert_eq!(badge.content_size, Size::new(48.0, 50.0));
        let avatar = frame.commands.avatar().unwrap();
        assert_eq!(avatar.text, "B.Z");
        assert_eq!(avatar.clip.rect(), Rect::new(4.0, 4.0, 96.0, 96.0));
    }

    #[test]
    fn two_pass_convergence() {
        let mut compositor = Compositor::new();
        let id = compositor.mount(preview(), StyleConfig::default());
        assert_eq!(compositor.take_redraws(), vec![(id, RedrawReason::MOUNTED)]);
        assert_eq!(compositor.state(id).unwrap().phase(), Phase::Unmeasured);

        let first = compositor
            .render(id, Size::new(100.0, 100.0), &mut measurer())
            .unwrap();
        assert_eq!(first.layout.offsets.ring_padding, 0.0);
        assert_eq!(first.layout.offsets.avatar_padding, 4.0);

        let reported = first.commands.badge().unwrap().content_size.height;
        assert!(compositor.on_badge_measured(id, reported));
        assert_eq!(compositor.take_redraws(), vec![(id, RedrawReason::MEASUREMENT)]);
        assert_eq!(compositor.state(id).unwrap().phase(), Phase::Measured);

        let second = compositor
            .render(id, Size::new(100.0, 100.0), &mut measurer())
            .unwrap();
        assert_eq!(second.layout.offsets.ring_padding, 5.0);
        assert_eq!(second.layout.offsets.avatar_padding, 9.0);
        assert_eq!(
            second.commands.ring().unwrap().bounds,
            Rect::new(5.0, 5.0, 95.0, 95.0)
        );

        let reported = second.commands.badge().unwrap().content_size.height;
        assert!(!compositor.on_badge_measured(id, reported), "fixed point");
        assert!(!compositor.has_pending_redraws());
        let third = compositor
            .render(id, Size::new(100.0, 100.0), &mut measurer())
            .unwrap();
        assert_eq!(third.layout, second.layout);
    }

    #[test]
    fn caption_change_remeasures() {
        let mut compositor = Compositor::new();
        let id = compositor.mount(preview(), StyleConfig::default());
        compositor.on_badge_measured(id, 50.0);
        compositor.take_redraws();

        assert!(compositor.set_inputs(id, AvatarCountdown::new("B.Z", "2 h", 80)));
        assert!(compositor.on_badge_measured(id, 30.0));
        let redraws = compositor.take_redraws();
        assert_eq!(
            redraws,
            vec![(id, RedrawReason::INPUTS | RedrawReason::MEASUREMENT)],
            "reasons merge per widget"
        );
        assert_eq!(compositor.state(id).unwrap().measured_badge_height(), 30.0);
    }

    #[test]
    fn unchanged_inputs_do_not_queue() {
        let mut compositor = Compositor::new();
        let id = compositor.mount(preview(), StyleConfig::default());
        compositor.take_redraws();
        assert!(compositor.set_inputs(id, preview()));
        assert!(!compositor.has_pending_redraws());
        assert!(compositor.set_style(id, StyleConfig::default().with_stroke_width(2.0)));
        assert_eq!(compositor.take_redraws(), vec![(id, RedrawReason::STYLE)]);
        assert_eq!(compositor.style(id).unwrap().stroke_width, 2.0);
    }

    #[test]
    fn callbacks_after_unmount_are_ignored() {
        let mut compositor = Compositor::new();
        let id = compositor.mount(preview(), StyleConfig::default());
        compositor.unmount(id);
        assert!(!compositor.is_alive(id));
        assert!(compositor.take_redraws().is_empty(), "pending pass dropped");

        assert!(!compositor.on_badge_measured(id, 40.0));
        assert!(!compositor.has_pending_redraws());
        assert!(compositor.state(id).is_none());
        assert!(compositor.render(id, Size::new(10.0, 10.0), &mut measurer()).is_none());
        assert!(!compositor.set_inputs(id, preview()));
        assert!(!compositor.set_style(id, StyleConfig::default()));
        compositor.unmount(id);
        assert!(compositor.is_empty());
    }

    #[test]
    fn reused_slot_gets_fresh_id_and_state() {
        let mut compositor = Compositor::new();
        let old = compositor.mount(preview(), StyleConfig::default());
        compositor.on_badge_measured(old, 40.0);
        compositor.unmount(old);

        let new = compositor.mount(AvatarCountdown::new("Q", "now", 0), StyleConfig::default());
        assert_ne!(old, new);
        assert_eq!(old.idx(), new.idx(), "slot is reused");
        assert!(!compositor.is_alive(old));
        assert!(compositor.is_alive(new));

        assert!(!compositor.on_badge_measured(old, 99.0));
        let state = compositor.state(new).unwrap();
        assert_eq!(state.measured_badge_height(), 0.0);
        assert_eq!(state.phase(), Phase::Unmeasured);
        assert_eq!(compositor.inputs(new).unwrap().avatar_text, "Q");
        assert_eq!(compositor.len(), 1);
    }

    #[test]
    fn widgets_keep_separate_state() {
        let mut compositor = Compositor::new();
        let a = compositor.mount(preview(), StyleConfig::default());
        let b = compositor.mount(preview(), StyleConfig::default());
        compositor.on_badge_measured(a, 20.0);
        assert_eq!(compositor.state(a).unwrap().measured_badge_height(), 20.0);
        assert_eq!(compositor.state(b).unwrap().measured_badge_height(), 0.0);
        let order: Vec<_> = compositor.take_redraws().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn render_is_repeatable() {
        let style = StyleConfig::default();
        let mut state = WidgetState::new();
        state.record_badge_height(17.0);
        let a = render(&preview(), &style, &state, Size::new(64.0, 64.0), &mut measurer());
        let b = render(&preview(), &style, &state, Size::new(64.0, 64.0), &mut measurer());
        assert_eq!(a.layout, b.layout);
        assert_eq!(a.commands.ring().unwrap().arc, b.commands.ring().unwrap().arc);
    }
}
