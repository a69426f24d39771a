//! Integration tests for the core public API.

use rangeline_core::{
    BoxStyle, Canvas, Color, CornerRadius, DrawCommand, EdgeInsets, Easing, Event, MouseButton,
    Point, PointerId, PointerPhase, PointerType, Rect, RecordingCanvas, Size, TouchId,
    Transform2D, Transition,
};

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_negative_insets_grow_hit_area() {
    let handle = Rect::new(50.0, 6.0, 28.0, 28.0);
    let hit = handle.inset_by(EdgeInsets::uniform(-5.0));
    assert_eq!(hit, Rect::new(45.0, 1.0, 38.0, 38.0));
    assert!(hit.contains_point(&Point::new(46.0, 20.0)));
    assert!(!handle.contains_point(&Point::new(46.0, 20.0)));
}

#[test]
fn test_integral_snaps_outward() {
    let r = Rect::new(10.4, 2.6, 5.2, 1.0).integral();
    assert_eq!(r, Rect::new(10.0, 2.0, 6.0, 2.0));
}

#[test]
fn test_rect_center_from_size() {
    let r = Rect::from_size(Size::square(28.0));
    assert_eq!(r.center(), Point::new(14.0, 14.0));
}

// =============================================================================
// Color
// =============================================================================

#[test]
fn test_hex_colors_parse_and_reject() {
    assert_eq!(Color::from_hex("#ffffff").unwrap(), Color::WHITE);
    assert!(Color::from_hex("#12").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn test_mouse_touch_and_pointer_share_phases() {
    let p = Point::new(3.0, 4.0);
    let streams = [
        Event::MouseDown {
            position: p,
            button: MouseButton::Left,
        },
        Event::TouchStart {
            id: TouchId(7),
            position: p,
        },
        Event::PointerDown {
            pointer_id: PointerId(1),
            pointer_type: PointerType::Pen,
            position: p,
        },
    ];
    for event in &streams {
        assert_eq!(event.pointer_phase(), Some(PointerPhase::Down(p)));
    }

    assert_eq!(
        Event::TouchCancel { id: TouchId(7) }.pointer_phase(),
        Some(PointerPhase::Cancel)
    );
    assert_eq!(
        Event::MouseDown {
            position: p,
            button: MouseButton::Right,
        }
        .pointer_phase(),
        None
    );
}

// =============================================================================
// Canvas
// =============================================================================

#[test]
fn test_transform_groups_flatten_in_paint_order() {
    let mut canvas = RecordingCanvas::new();
    canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
    canvas.push_transform(Transform2D::translate(10.0, 20.0));
    canvas.draw_box(
        Rect::new(0.0, 0.0, 4.0, 2.0),
        CornerRadius::uniform(1.0),
        &BoxStyle::fill(Color::RED),
    );
    canvas.draw_circle(Point::new(2.0, 2.0), 2.0, &BoxStyle::fill(Color::WHITE));
    canvas.pop_transform();

    assert_eq!(canvas.command_count(), 2);
    assert!(matches!(
        canvas.commands()[1],
        DrawCommand::Group { ref children, .. } if children.len() == 2
    ));

    let flat = canvas.flattened();
    assert_eq!(flat.len(), 3);
    assert!(matches!(flat[2], DrawCommand::Circle { radius, .. } if *radius == 2.0));
}

// =============================================================================
// Animation
// =============================================================================

#[test]
fn test_transition_retarget_starts_from_current_value() {
    let mut t = Transition::new(0.0_f64, 100.0, 1.0).with_easing(Easing::Linear);
    t.update(0.5);
    assert!((t.value() - 50.0).abs() < 1e-9);

    t.retarget(0.0, 1.0);
    assert!((t.value() - 50.0).abs() < 1e-9);
    t.update(1.0);
    assert!(t.is_complete());
    assert_eq!(*t.target(), 0.0);
    assert!(t.value().abs() < 1e-9);
}
