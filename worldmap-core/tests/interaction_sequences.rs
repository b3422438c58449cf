//! End-to-end interaction sequences against a simulated DOM host.
//!
//! The host models what a browser would report: the image layer sits at
//! the page origin with transform-origin top-left, and its bounding box
//! reflects whatever transform was last applied.

use std::cell::RefCell;
use std::rc::Rc;

use worldmap_core::{Point, Rect, Transform, ViewportController, ViewportHost};

const LAYER_WIDTH: f64 = 2000.0;
const LAYER_HEIGHT: f64 = 1000.0;

#[derive(Default)]
struct AppliedLog {
    transforms: RefCell<Vec<Transform>>,
}

struct SimHost {
    container: Rect,
    log: Rc<AppliedLog>,
}

impl SimHost {
    fn new() -> (Self, Rc<AppliedLog>) {
        let log = Rc::new(AppliedLog::default());
        (
            Self {
                container: Rect::new(0.0, 0.0, 800.0, 600.0),
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl ViewportHost for SimHost {
    fn layer_rect(&self) -> Option<Rect> {
        let t = self
            .log
            .transforms
            .borrow()
            .last()
            .copied()
            .unwrap_or_default();
        Some(Rect::new(
            t.translate_x,
            t.translate_y,
            LAYER_WIDTH * t.scale,
            LAYER_HEIGHT * t.scale,
        ))
    }

    fn container_rect(&self) -> Option<Rect> {
        Some(self.container)
    }

    fn window_center(&self) -> Point {
        self.container.center()
    }

    fn apply(&self, transform: &Transform) {
        self.log.transforms.borrow_mut().push(*transform);
    }

    fn set_grabbing(&self, _grabbing: bool) {}
}

fn controller() -> (ViewportController<SimHost>, Rc<AppliedLog>) {
    let (host, log) = SimHost::new();
    (ViewportController::new(host), log)
}

/// Screen position of a fixed layer point under a transform
/// (layer anchored at the origin, transform-origin top-left).
fn screen_pos(layer_point: Point, t: &Transform) -> Point {
    Point::new(
        t.translate_x + layer_point.x * t.scale,
        t.translate_y + layer_point.y * t.scale,
    )
}

#[test]
fn arbitrary_zoom_sequences_stay_clamped() {
    let (mut c, _) = controller();
    // A deterministic but irregular mix of ins and outs
    for i in 0..200 {
        if (i * 7) % 3 == 0 {
            c.zoom_out();
        } else {
            c.zoom_in();
        }
        let s = c.transform().scale;
        assert!((0.5..=5.0).contains(&s), "scale {s} escaped bounds at step {i}");
    }
}

#[test]
fn wheel_zoom_keeps_cursor_point_fixed() {
    let (mut c, host_log) = controller();
    let cursor = Point::new(640.0, 220.0);

    // Which layer point is under the cursor right now?
    let before = c.transform();
    let layer_point = Point::new(
        (cursor.x - before.translate_x) / before.scale,
        (cursor.y - before.translate_y) / before.scale,
    );

    c.wheel(-1.0, cursor);

    let after = c.transform();
    let pos = screen_pos(layer_point, &after);
    assert!((pos.x - cursor.x).abs() < 1e-9, "x drifted: {} vs {}", pos.x, cursor.x);
    assert!((pos.y - cursor.y).abs() < 1e-9, "y drifted: {} vs {}", pos.y, cursor.y);
    assert!(!host_log.transforms.borrow().is_empty());
}

#[test]
fn zoom_anchor_holds_across_a_mixed_session() {
    let (mut c, _) = controller();

    // Pan and zoom a few times first so the layer box is well away from
    // its initial geometry.
    c.pointer_down(0, Point::new(100.0, 100.0));
    c.pointer_move(Point::new(40.0, 170.0));
    c.pointer_up();
    c.wheel(-1.0, Point::new(300.0, 300.0));
    c.wheel(-1.0, Point::new(500.0, 100.0));

    let cursor = Point::new(123.0, 456.0);
    let before = c.transform();
    let layer_point = Point::new(
        (cursor.x - before.translate_x) / before.scale,
        (cursor.y - before.translate_y) / before.scale,
    );

    c.wheel(1.0, cursor);

    let pos = screen_pos(layer_point, &c.transform());
    assert!((pos.x - cursor.x).abs() < 1e-9);
    assert!((pos.y - cursor.y).abs() < 1e-9);
}

#[test]
fn button_zoom_anchors_at_container_center() {
    let (mut c, _) = controller();
    let center = Point::new(400.0, 300.0);
    let layer_point = Point::new(center.x, center.y); // identity transform

    c.zoom_in();

    let pos = screen_pos(layer_point, &c.transform());
    assert!((pos.x - center.x).abs() < 1e-9);
    assert!((pos.y - center.y).abs() < 1e-9);
}

#[test]
fn drag_is_linear_in_pointer_delta() {
    let (mut c, _) = controller();

    c.pointer_down(0, Point::new(100.0, 100.0));
    c.pointer_move(Point::new(150.0, 130.0));
    let t = c.transform();
    assert_eq!((t.translate_x, t.translate_y), (50.0, 30.0));

    // Back-track without a new drag start: still measured from start
    c.pointer_move(Point::new(140.0, 150.0));
    let t = c.transform();
    assert_eq!((t.translate_x, t.translate_y), (40.0, 50.0));
}

#[test]
fn drag_result_is_independent_of_move_granularity() {
    let (mut coarse, _) = controller();
    coarse.pointer_down(0, Point::new(0.0, 0.0));
    coarse.pointer_move(Point::new(200.0, -120.0));
    coarse.pointer_up();

    let (mut fine, _) = controller();
    fine.pointer_down(0, Point::new(0.0, 0.0));
    for i in 1..=100 {
        let f = f64::from(i) / 100.0;
        fine.pointer_move(Point::new(200.0 * f, -120.0 * f));
    }
    fine.pointer_up();

    assert_eq!(coarse.transform(), fine.transform());
}

#[test]
fn second_touch_hands_off_drag_to_pinch_without_a_jump() {
    let (mut c, _) = controller();

    c.touch_start(&[Point::new(100.0, 100.0)]);
    c.touch_move(&[Point::new(160.0, 140.0)]);
    let at_handoff = c.transform();

    // Second finger lands: drag ends, pinch arms off the live positions.
    c.touch_start(&[Point::new(160.0, 140.0), Point::new(260.0, 140.0)]);
    assert!(!c.is_dragging());
    assert!(c.is_pinching());
    assert_eq!(c.transform(), at_handoff, "translate jumped at the handoff");

    // An unchanged distance on the next move leaves the scale alone.
    c.touch_move(&[Point::new(170.0, 150.0), Point::new(270.0, 150.0)]);
    assert_eq!(c.transform(), at_handoff);
}

#[test]
fn pinch_midpoint_stays_fixed_while_spreading() {
    let (mut c, _) = controller();

    let a = Point::new(300.0, 300.0);
    let b = Point::new(500.0, 300.0);
    c.touch_start(&[a, b]);

    let mid = a.midpoint(&b);
    let before = c.transform();
    let layer_point = Point::new(
        (mid.x - before.translate_x) / before.scale,
        (mid.y - before.translate_y) / before.scale,
    );

    // Spread symmetrically around the same midpoint
    c.touch_move(&[Point::new(250.0, 300.0), Point::new(550.0, 300.0)]);

    let after = c.transform();
    assert!(after.scale > before.scale);
    let pos = Point::new(
        after.translate_x + layer_point.x * after.scale,
        after.translate_y + layer_point.y * after.scale,
    );
    assert!((pos.x - mid.x).abs() < 1e-9);
    assert!((pos.y - mid.y).abs() < 1e-9);
}

#[test]
fn keyboard_pan_round_trip() {
    let (mut c, _) = controller();
    assert!(c.key_down("ArrowRight"));
    assert_eq!(c.transform().translate_x, -30.0);
    assert!(c.key_down("ArrowLeft"));
    assert_eq!(c.transform().translate_x, 0.0);
}

#[test]
fn reset_after_heavy_interaction() {
    let (mut c, _) = controller();
    c.wheel(-1.0, Point::new(10.0, 10.0));
    c.touch_start(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    c.touch_move(&[Point::new(0.0, 0.0), Point::new(300.0, 0.0)]);
    c.touch_end(&[]);
    c.key_down("ArrowUp");
    c.key_down("ArrowRight");

    c.reset_view();
    assert_eq!(c.transform(), Transform::identity());

    c.reset_view();
    assert_eq!(c.transform(), Transform::identity());
}
