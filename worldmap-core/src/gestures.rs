use crate::points::Point;
use crate::transform::Transform;

/// Drag (pan) state machine: `Idle` when `active` is false,
/// `Dragging` otherwise.
///
/// The translate is always anchored to the pointer delta since drag
/// start, never accumulated per-event, so event-rate variation cannot
/// cause drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    pub active: bool,
    /// Pointer position at drag start, in screen pixels.
    pub start: Point,
    /// Translate snapshot at drag start.
    pub origin_tx: f64,
    pub origin_ty: f64,
}

impl DragState {
    /// Enter `Dragging`, capturing the pointer position and the current
    /// translate as the drag reference.
    pub fn begin(pos: Point, transform: &Transform) -> Self {
        Self {
            active: true,
            start: pos,
            origin_tx: transform.translate_x,
            origin_ty: transform.translate_y,
        }
    }

    /// Translate for the given pointer position, measured from drag start.
    pub fn translate_for(&self, pos: Point) -> (f64, f64) {
        (
            self.origin_tx + (pos.x - self.start.x),
            self.origin_ty + (pos.y - self.start.y),
        )
    }

    /// Return to `Idle`.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Pinch state machine. `last_distance == 0.0` encodes `Inactive`;
/// a positive baseline distance encodes `Pinching`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinchState {
    pub last_distance: f64,
}

impl PinchState {
    pub fn is_active(&self) -> bool {
        self.last_distance > 0.0
    }

    /// Enter `Pinching` with the current inter-touch distance as baseline.
    pub fn begin(&mut self, distance: f64) {
        self.last_distance = distance;
    }

    /// Return to `Inactive`.
    pub fn clear(&mut self) {
        self.last_distance = 0.0;
    }
}
