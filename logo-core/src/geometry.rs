//! Pure transform math for direct manipulation.
//!
//! Every function takes a starting pose and pointer data and returns a new
//! pose. No state, no side effects; the interaction controller re-derives
//! each frame from the captured drag start rather than accumulating deltas.

use serde::{Deserialize, Serialize};

use crate::element::{Transform, MIN_ELEMENT_SIZE};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The eight resize handles around an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    /// Top edge.
    N,
    /// Top-right corner.
    Ne,
    /// Right edge.
    E,
    /// Bottom-right corner.
    Se,
    /// Bottom edge.
    S,
    /// Bottom-left corner.
    Sw,
    /// Left edge.
    W,
    /// Top-left corner.
    Nw,
}

impl ResizeHandle {
    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub fn affects_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub fn affects_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub fn affects_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub fn affects_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Translate a pose by a pointer delta.
///
/// Positions are not clamped to the canvas; elements may be dragged
/// partially or fully off-canvas.
#[must_use]
pub fn apply_move(start: Transform, dx: f32, dy: f32) -> Transform {
    Transform {
        x: start.x + dx,
        y: start.y + dy,
        ..start
    }
}

/// Resize a pose by a pointer delta projected onto the given handle.
///
/// The edge opposite the handle stays anchored, including when the size
/// clamps at [`MIN_ELEMENT_SIZE`].
#[must_use]
pub fn apply_resize(start: Transform, dx: f32, dy: f32, handle: ResizeHandle) -> Transform {
    let mut result = start;

    if handle.affects_right() {
        result.width = (start.width + dx).max(MIN_ELEMENT_SIZE);
    } else if handle.affects_left() {
        result.width = (start.width - dx).max(MIN_ELEMENT_SIZE);
        result.x = start.x + start.width - result.width;
    }

    if handle.affects_bottom() {
        result.height = (start.height + dy).max(MIN_ELEMENT_SIZE);
    } else if handle.affects_top() {
        result.height = (start.height - dy).max(MIN_ELEMENT_SIZE);
        result.y = start.y + start.height - result.height;
    }

    result
}

/// Rotate a pose from the angle swept by the pointer around the element
/// center, starting from the pose's rotation at drag start.
#[must_use]
pub fn apply_rotate(start: Transform, start_pointer: Point, current_pointer: Point) -> Transform {
    let (cx, cy) = start.center();
    let start_angle = (start_pointer.y - cy).atan2(start_pointer.x - cx);
    let current_angle = (current_pointer.y - cy).atan2(current_pointer.x - cx);
    let swept = (current_angle - start_angle).to_degrees();

    Transform {
        rotation: normalize_degrees(start.rotation + swept),
        ..start
    }
}

/// Wrap an angle in degrees to the interval (-180, 180].
#[must_use]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let mut d = degrees % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Rotate the point (`x`, `y`) around (`cx`, `cy`) by `degrees`.
#[must_use]
pub fn rotate_about(x: f32, y: f32, cx: f32, cy: f32, degrees: f32) -> (f32, f32) {
    let radians = degrees.to_radians();
    let (sin, cos) = radians.sin_cos();
    let (dx, dy) = (x - cx, y - cy);
    (cx + dx * cos - dy * sin, cy + dx * sin + dy * cos)
}
