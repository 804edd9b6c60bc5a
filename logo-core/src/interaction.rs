//! Interaction state machine for direct manipulation.
//!
//! Turns raw pointer events into move/resize/rotate transforms. The
//! controller captures a start pose per target at pointer-down and
//! re-derives every frame from that pose and the absolute pointer delta;
//! it never accumulates per-frame deltas, which is the classic source of
//! drift in drag code.
//!
//! The controller owns no canvas or history state. The editor feeds it
//! pointer events, writes the transforms it produces into the canvas as
//! live (uncommitted) updates, and commits one snapshot on pointer-up.

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, Transform};
use crate::geometry::{self, Point, ResizeHandle};

/// What kind of transform an active drag performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    /// Translate the targets.
    Move,
    /// Resize the targets from the given handle.
    Resize(ResizeHandle),
    /// Rotate the targets about their centers.
    Rotate,
}

/// An in-progress drag: the active mode plus the captured start state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragState {
    /// Active transform mode.
    pub mode: DragMode,
    /// Pointer position at press.
    pub start_pointer: Point,
    /// Start pose of every affected element, captured at press.
    pub targets: Vec<(ElementId, Transform)>,
}

/// The interaction state machine: `Idle`, or `Dragging` with captured
/// start state. Exactly one drag can be active at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionController {
    drag: Option<DragState>,
}

impl InteractionController {
    /// Create an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The active drag, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Start a drag. Returns `false` if a drag is already in progress
    /// (the new pointer-down is ignored) or if there are no targets.
    pub fn begin(
        &mut self,
        mode: DragMode,
        start_pointer: Point,
        targets: Vec<(ElementId, Transform)>,
    ) -> bool {
        if self.drag.is_some() {
            tracing::debug!("Pointer-down ignored: drag already in progress");
            return false;
        }
        if targets.is_empty() {
            return false;
        }
        tracing::debug!(?mode, target_count = targets.len(), "Drag started");
        self.drag = Some(DragState {
            mode,
            start_pointer,
            targets,
        });
        true
    }

    /// Compute the transforms for the current pointer position.
    ///
    /// Each result is derived from the captured start pose and the absolute
    /// delta from the start pointer. Returns an empty vector when idle.
    #[must_use]
    pub fn update(&self, current_pointer: Point) -> Vec<(ElementId, Transform)> {
        let Some(drag) = &self.drag else {
            return Vec::new();
        };

        let dx = current_pointer.x - drag.start_pointer.x;
        let dy = current_pointer.y - drag.start_pointer.y;

        drag.targets
            .iter()
            .map(|&(id, start)| {
                let transform = match drag.mode {
                    DragMode::Move => geometry::apply_move(start, dx, dy),
                    DragMode::Resize(handle) => geometry::apply_resize(start, dx, dy, handle),
                    DragMode::Rotate => {
                        geometry::apply_rotate(start, drag.start_pointer, current_pointer)
                    }
                };
                (id, transform)
            })
            .collect()
    }

    /// End the drag (pointer-up). Returns the finished drag state, or
    /// `None` if the controller was idle.
    pub fn end(&mut self) -> Option<DragState> {
        let drag = self.drag.take();
        if drag.is_some() {
            tracing::debug!("Drag ended");
        }
        drag
    }

    /// Abort the drag (focus loss, escape). Returns the captured start
    /// poses so the caller can restore them; nothing should be committed.
    pub fn cancel(&mut self) -> Option<Vec<(ElementId, Transform)>> {
        let drag = self.drag.take()?;
        tracing::debug!(target_count = drag.targets.len(), "Drag cancelled");
        Some(drag.targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(x: f32, y: f32) -> Transform {
        Transform {
            x,
            y,
            width: 100.0,
            height: 50.0,
            rotation: 0.0,
            z_index: 0,
        }
    }

    #[test]
    fn test_nested_pointer_down_ignored() {
        let mut controller = InteractionController::new();
        let id = ElementId::new();
        assert!(controller.begin(DragMode::Move, Point::new(0.0, 0.0), vec![(id, pose(0.0, 0.0))]));
        assert!(!controller.begin(
            DragMode::Rotate,
            Point::new(5.0, 5.0),
            vec![(id, pose(0.0, 0.0))]
        ));
        assert_eq!(
            controller.drag().map(|d| d.mode),
            Some(DragMode::Move),
            "original drag survives"
        );
    }

    #[test]
    fn test_begin_with_no_targets_stays_idle() {
        let mut controller = InteractionController::new();
        assert!(!controller.begin(DragMode::Move, Point::new(0.0, 0.0), Vec::new()));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_update_uses_absolute_deltas() {
        let mut controller = InteractionController::new();
        let id = ElementId::new();
        controller.begin(
            DragMode::Move,
            Point::new(10.0, 10.0),
            vec![(id, pose(100.0, 100.0))],
        );

        // Two consecutive moves: the second is derived from the start pose,
        // not from the first move's result.
        let _ = controller.update(Point::new(30.0, 10.0));
        let second = controller.update(Point::new(15.0, 25.0));
        assert_eq!(second.len(), 1);
        assert!((second[0].1.x - 105.0).abs() < f32::EPSILON);
        assert!((second[0].1.y - 115.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_multi_target_move() {
        let mut controller = InteractionController::new();
        let a = ElementId::new();
        let b = ElementId::new();
        controller.begin(
            DragMode::Move,
            Point::new(0.0, 0.0),
            vec![(a, pose(0.0, 0.0)), (b, pose(200.0, 0.0))],
        );

        let moved = controller.update(Point::new(10.0, 5.0));
        assert!((moved[0].1.x - 10.0).abs() < f32::EPSILON);
        assert!((moved[1].1.x - 210.0).abs() < f32::EPSILON);
        assert!((moved[1].1.y - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut controller = InteractionController::new();
        let id = ElementId::new();
        controller.begin(DragMode::Move, Point::new(0.0, 0.0), vec![(id, pose(0.0, 0.0))]);

        assert!(controller.end().is_some());
        assert!(!controller.is_dragging());
        assert!(controller.end().is_none());
    }

    #[test]
    fn test_cancel_returns_start_poses() {
        let mut controller = InteractionController::new();
        let id = ElementId::new();
        let start = pose(42.0, 7.0);
        controller.begin(DragMode::Resize(ResizeHandle::Se), Point::new(0.0, 0.0), vec![(id, start)]);

        let restored = controller.cancel().expect("was dragging");
        assert_eq!(restored, vec![(id, start)]);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_update_while_idle_is_empty() {
        let controller = InteractionController::new();
        assert!(controller.update(Point::new(1.0, 1.0)).is_empty());
    }
}
