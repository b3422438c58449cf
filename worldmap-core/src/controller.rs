use crate::config::ViewportConfig;
use crate::gestures::{DragState, PinchState};
use crate::keys::KeyCommand;
use crate::points::{Point, Rect};
use crate::transform::Transform;

/// The controller's view of its DOM collaborators.
///
/// The widget is optional per page: when the mandatory image layer
/// cannot be resolved, `layer_rect` returns `None` and every public
/// operation on the controller degrades to a silent no-op.
///
/// `layer_rect` must report the layer's *live* rendered box — the box
/// already reflecting the currently applied transform. Zoom anchoring
/// reads it before each scale change, which is what lets the controller
/// avoid keeping any transform-history ledger of its own.
pub trait ViewportHost {
    /// Current bounding box of the image layer, or `None` when the
    /// widget is not present on the page.
    fn layer_rect(&self) -> Option<Rect>;

    /// Bounding box of the viewport container, used to center button
    /// zoom. `None` falls back to the window center.
    fn container_rect(&self) -> Option<Rect>;

    /// Center of the full window, the anchor of last resort.
    fn window_center(&self) -> Point;

    /// Render step: write the transform to the image layer's
    /// presentation and refresh the zoom readout. Synchronous, total.
    fn apply(&self, transform: &Transform);

    /// Toggle the "grabbing" visual affordance while a drag is active.
    fn set_grabbing(&self, grabbing: bool);
}

/// Maps raw pointer/touch/keyboard/wheel input to transform updates for
/// a single pan-zoom viewport.
///
/// One instance per widget; all state is owned here, nothing is
/// process-global. Every state transition happens synchronously inside
/// the input handler that triggered it, in host delivery order.
pub struct ViewportController<H: ViewportHost> {
    host: H,
    config: ViewportConfig,
    transform: Transform,
    drag: DragState,
    pinch: PinchState,
}

impl<H: ViewportHost> ViewportController<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, ViewportConfig::default())
    }

    pub fn with_config(host: H, config: ViewportConfig) -> Self {
        Self {
            host,
            config,
            transform: Transform::identity(),
            drag: DragState::default(),
            pinch: PinchState::default(),
        }
    }

    /// The current transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    fn enabled(&self) -> bool {
        self.host.layer_rect().is_some()
    }

    fn render(&self) {
        self.host.apply(&self.transform);
    }

    /// Adopt a previously saved transform, clamping the scale into
    /// bounds, and render it.
    pub fn restore(&mut self, saved: Transform) {
        if !self.enabled() {
            return;
        }
        self.transform = Transform::new(
            self.config.clamp_scale(saved.scale),
            saved.translate_x,
            saved.translate_y,
        );
        self.render();
    }

    // ---- zoom ----

    /// Zoom in one step around the container center (or the window
    /// center when the container is unresolved). No-op at max scale.
    pub fn zoom_in(&mut self) {
        self.step_zoom(self.config.zoom_step);
    }

    /// Zoom out one step around the container center. No-op at min scale.
    pub fn zoom_out(&mut self) {
        self.step_zoom(-self.config.zoom_step);
    }

    fn step_zoom(&mut self, step: f64) {
        if !self.enabled() {
            return;
        }
        let new_scale = self.config.clamp_scale(self.transform.scale + step);
        if new_scale == self.transform.scale {
            return;
        }
        let anchor = match self.host.container_rect() {
            Some(rect) => rect.center(),
            None => self.host.window_center(),
        };
        self.zoom_around(new_scale, anchor);
    }

    /// Restore the default view. Always succeeds, no preconditions.
    pub fn reset_view(&mut self) {
        if !self.enabled() {
            return;
        }
        self.transform = Transform::identity();
        self.render();
    }

    /// Scroll-to-zoom: scrolling up/away zooms in, scrolling down zooms
    /// out, anchored at the cursor. The UI layer suppresses the default
    /// scroll behaviour unconditionally.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) {
        if !self.enabled() || delta_y == 0.0 {
            return;
        }
        let step = if delta_y < 0.0 {
            self.config.zoom_step
        } else {
            -self.config.zoom_step
        };
        let new_scale = self.config.clamp_scale(self.transform.scale + step);
        if new_scale == self.transform.scale {
            return;
        }
        self.zoom_around(new_scale, cursor);
    }

    /// The single scale-changing primitive: every zoom path (buttons,
    /// wheel, pinch) funnels through here with its own anchor point.
    ///
    /// Holds the point under `anchor` visually fixed while changing
    /// scale. The layer box is read *before* the new scale applies; it
    /// already reflects all prior transforms, so each step is computed
    /// against the live rendered geometry.
    fn zoom_around(&mut self, new_scale: f64, anchor: Point) {
        let Some(rect) = self.host.layer_rect() else {
            return;
        };
        let origin = anchor.sub(&rect.origin());
        let scale_delta = new_scale / self.transform.scale;
        // The box edge must move from rect.origin to
        // anchor - origin * scale_delta for the anchored point to stay
        // put; since the box already carries the current translate, the
        // difference is added onto it.
        self.transform = Transform::new(
            new_scale,
            self.transform.translate_x + (anchor.x - (rect.left + origin.x * scale_delta)),
            self.transform.translate_y + (anchor.y - (rect.top + origin.y * scale_delta)),
        );
        self.render();
    }

    // ---- drag (pan) ----

    /// Pointer-down inside the container. Only the primary button
    /// (code 0) starts a drag; other buttons are ignored.
    pub fn pointer_down(&mut self, button: i16, pos: Point) {
        if !self.enabled() || button != 0 {
            return;
        }
        self.begin_drag(pos);
    }

    /// Pointer-move. Ignored unless a drag is active.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.enabled() || !self.drag.active {
            return;
        }
        let (tx, ty) = self.drag.translate_for(pos);
        self.transform.translate_x = tx;
        self.transform.translate_y = ty;
        self.render();
    }

    /// Pointer-up anywhere. Tolerated as a no-op with no drag active.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    fn begin_drag(&mut self, pos: Point) {
        self.drag = DragState::begin(pos, &self.transform);
        self.host.set_grabbing(true);
    }

    fn end_drag(&mut self) {
        if self.drag.active {
            self.drag.clear();
            self.host.set_grabbing(false);
        }
    }

    // ---- touch ----

    /// Touch-start with the current active touch points. Returns true
    /// when the event should have its default handling suppressed
    /// (multi-touch, or a drag is now active).
    pub fn touch_start(&mut self, touches: &[Point]) -> bool {
        if !self.enabled() {
            return false;
        }
        match touches {
            [] => false,
            [single] => {
                self.begin_drag(*single);
                true
            }
            [first, second, ..] => {
                // Pinch takes over; the baseline comes from the live
                // touch positions, so no translate jump occurs here.
                self.end_drag();
                self.pinch.begin(first.distance(second));
                true
            }
        }
    }

    /// Touch-move with the current active touch points.
    pub fn touch_move(&mut self, touches: &[Point]) -> bool {
        if !self.enabled() {
            return false;
        }
        match touches {
            [single] if self.drag.active => {
                self.pointer_move(*single);
                true
            }
            [first, second, ..] => {
                self.pinch_move(*first, *second);
                true
            }
            _ => false,
        }
    }

    /// Touch-end/cancel with the touches that remain active.
    pub fn touch_end(&mut self, remaining: &[Point]) -> bool {
        let was_active = self.drag.active || self.pinch.is_active();
        if remaining.len() < 2 {
            self.pinch.clear();
        }
        if remaining.is_empty() {
            self.end_drag();
        }
        was_active
    }

    fn pinch_move(&mut self, first: Point, second: Point) {
        let distance = first.distance(&second);
        if !self.pinch.is_active() {
            // Move without a recorded baseline (e.g. the second touch
            // landed outside the container): adopt one and wait.
            self.pinch.begin(distance);
            return;
        }
        let delta = (distance - self.pinch.last_distance) / self.config.pinch_sensitivity;
        let new_scale = self.config.clamp_scale(self.transform.scale + delta);
        if new_scale != self.transform.scale {
            self.zoom_around(new_scale, first.midpoint(&second));
        }
        self.pinch.begin(distance);
    }

    // ---- keyboard ----

    /// Global key-down. Returns true when the key was consumed, in
    /// which case the UI suppresses the browser default for it.
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.enabled() {
            return false;
        }
        let Some(command) = KeyCommand::parse(key, self.config.pan_step) else {
            return false;
        };
        match command {
            KeyCommand::ZoomIn => self.zoom_in(),
            KeyCommand::ZoomOut => self.zoom_out(),
            KeyCommand::Reset => self.reset_view(),
            KeyCommand::Pan { dx, dy } => self.pan_by(dx, dy),
        }
        true
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
        self.render();
    }
}
