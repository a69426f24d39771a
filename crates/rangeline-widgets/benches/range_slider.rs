//! Benchmarks for range slider mapping, layout and dragging.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rangeline_core::{Event, MouseButton, Point, Rect, RecordingCanvas, Size, Widget};
use rangeline_widgets::range_slider::{GeometryMapper, LayoutEngine, SliderStyle, ValueModel};
use rangeline_widgets::RangeSlider;

fn bench_mapping(c: &mut Criterion) {
    let mapper = GeometryMapper::new(Size::new(320.0, 40.0), 0.0, 1000.0);

    c.bench_function("range_slider_value_for_x", |b| {
        b.iter(|| mapper.value_for_x(black_box(173.5), 28.0));
    });

    c.bench_function("range_slider_handle_rect", |b| {
        b.iter(|| mapper.handle_rect(black_box(421.0), Size::square(28.0)));
    });
}

fn bench_layout(c: &mut Criterion) {
    let style = SliderStyle::default();
    let engine = LayoutEngine::new(&style, Size::new(320.0, 40.0));
    let mut model = ValueModel::new();
    model.set_maximum(1000.0);
    model.set_values(Some(250.0), Some(750.0));

    c.bench_function("range_slider_layout_pass", |b| {
        b.iter(|| engine.layout(black_box(&model)));
    });
}

fn bench_drag(c: &mut Criterion) {
    c.bench_function("range_slider_drag_60_moves", |b| {
        b.iter(|| {
            let mut slider = RangeSlider::new().maximum(100.0).step(1.0);
            slider.layout(Rect::new(0.0, 0.0, 228.0, 28.0));
            slider.event(&Event::MouseDown {
                position: Point::new(14.0, 14.0),
                button: MouseButton::Left,
            });
            for i in 0..60u8 {
                slider.event(&Event::MouseMove {
                    position: Point::new(14.0 + f32::from(i) * 3.0, 14.0),
                });
            }
            slider.event(&Event::MouseUp {
                position: Point::new(194.0, 14.0),
                button: MouseButton::Left,
            });
            black_box(slider.get_low())
        });
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut slider = RangeSlider::new().low(0.25).high(0.75);
    slider.layout(Rect::new(0.0, 0.0, 320.0, 40.0));

    c.bench_function("range_slider_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            slider.paint(&mut canvas);
            black_box(canvas.command_count())
        });
    });
}

criterion_group!(benches, bench_mapping, bench_layout, bench_drag, bench_paint);
criterion_main!(benches);
