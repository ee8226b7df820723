// Copyright 2025 the Avatar Countdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use avatar_countdown::{
    AvatarCountdown, Compositor, DEFAULT_START_ANGLE, StyleConfig, TextMeasurer, TextStyle,
    WidgetState, compute_arc, compute_offsets, render,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Cap, Size};

struct Fixed;

impl TextMeasurer for Fixed {
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Size {
        Size::new(text.len() as f64 * style.font_size * 0.6, style.font_size * 1.2)
    }
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    group.bench_function("compute_arc", |b| {
        b.iter(|| compute_arc(black_box(42.0), DEFAULT_START_ANGLE, 6.0, Cap::Round));
    });
    group.bench_function("compute_offsets", |b| {
        b.iter(|| compute_offsets(black_box(16.8), black_box(4.0)));
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let inputs = AvatarCountdown::new("B.Z", "3 days", 50);
    let style = StyleConfig::default();
    let mut state = WidgetState::new();
    state.record_badge_height(16.8);

    group.bench_function("single_pass", |b| {
        b.iter(|| {
            render(
                black_box(&inputs),
                &style,
                &state,
                Size::new(100.0, 100.0),
                &mut Fixed,
            )
        });
    });

    group.bench_function("settle_100_widgets", |b| {
        b.iter_batched(
            || {
                let mut compositor = Compositor::new();
                for i in 0..100 {
                    compositor.mount(
                        AvatarCountdown::new("B.Z", "3 days", i),
                        StyleConfig::default(),
                    );
                }
                compositor
            },
            |mut compositor| {
                while compositor.has_pending_redraws() {
                    for (id, _) in compositor.take_redraws() {
                        let Some(frame) = compositor.render(id, Size::new(64.0, 64.0), &mut Fixed)
                        else {
                            continue;
                        };
                        let height = frame
                            .commands
                            .badge()
                            .map_or(0.0, |badge| badge.content_size.height);
                        compositor.on_badge_measured(id, height);
                    }
                }
                compositor
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_geometry, bench_render);
criterion_main!(benches);
