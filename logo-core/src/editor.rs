//! The logo editor - composition root for the editing engine.
//!
//! Owns the live canvas, the selection, the history stacks, and the
//! interaction controller, and enforces the two-phase edit contract:
//! incremental updates (pointer-moves, slider drags) write straight into
//! the live canvas, and exactly one snapshot is committed per completed
//! user action.

use std::collections::HashSet;

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::element::{Element, ElementId, ElementType};
use crate::geometry::{Point, ResizeHandle};
use crate::history::History;
use crate::interaction::{DragMode, InteractionController};
use crate::selection::Selection;

/// Direct-manipulation editor over one logo canvas.
#[derive(Debug, Clone)]
pub struct LogoEditor {
    canvas: Canvas,
    selection: Selection,
    history: History<Canvas>,
    controller: InteractionController,
    template_id: Option<String>,
}

impl LogoEditor {
    /// Create an editor over a new empty canvas of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        let canvas = Canvas::new(width, height);
        let history = History::new(canvas.clone());
        Self {
            canvas,
            selection: Selection::new(),
            history,
            controller: InteractionController::new(),
            template_id: None,
        }
    }

    /// The live canvas.
    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The element the property panel should render, if any.
    #[must_use]
    pub fn primary_element(&self) -> Option<&Element> {
        self.selection
            .primary()
            .and_then(|id| self.canvas.get_element(id))
    }

    /// The last-applied template, if any.
    #[must_use]
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Whether a drag interaction is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    // -----------------------------------------------------------------------
    // Structural edits
    // -----------------------------------------------------------------------

    /// Add a new element of the given type, centered on the canvas.
    ///
    /// The new element becomes the sole selection and the addition is
    /// committed as one undoable step.
    pub fn add_element(&mut self, element_type: ElementType) -> ElementId {
        let id = self.canvas.add_centered(element_type);
        self.selection.replace(id);
        tracing::debug!(%id, ?element_type, "Element added");
        self.commit();
        id
    }

    /// Update an element's fields through a closure, live and uncommitted.
    ///
    /// A stale ID is a benign no-op (a delete can race a panel edit);
    /// callers coalesce a run of updates into history via [`Self::commit`].
    pub fn update_element<F>(&mut self, id: ElementId, f: F)
    where
        F: FnOnce(&mut Element),
    {
        if let Err(e) = self.canvas.update_element(id, f) {
            tracing::debug!("Ignoring update: {e}");
        }
    }

    /// Apply an edit to every selected element, live and uncommitted.
    ///
    /// Property panels use this for batch edits ("apply this color to the
    /// whole selection"); the selection holds IDs only, so each element is
    /// read and written in place.
    pub fn update_selected<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Element),
    {
        for id in self.selection.ids().to_vec() {
            if let Err(e) = self.canvas.update_element(id, &mut f) {
                tracing::debug!("Ignoring update: {e}");
            }
        }
    }

    /// Delete the given elements as one atomic, committed step.
    ///
    /// IDs absent from the canvas are ignored. Dangling selection entries
    /// are pruned so the selection never outlives its elements.
    pub fn delete_elements(&mut self, ids: &HashSet<ElementId>) {
        let removed = self.canvas.delete_elements(ids);
        if removed == 0 {
            tracing::debug!("Delete matched no elements");
            return;
        }
        let canvas = &self.canvas;
        self.selection.retain(|&id| canvas.contains(id));
        tracing::debug!(removed, "Elements deleted");
        self.commit();
    }

    /// Delete the entire current selection.
    pub fn delete_selected(&mut self) {
        let ids = self.selection.id_set();
        if !ids.is_empty() {
            self.delete_elements(&ids);
        }
    }

    /// Move an element to the top of the paint order and commit.
    pub fn bring_to_front(&mut self, id: ElementId) {
        match self.canvas.bring_to_front(id) {
            Ok(()) => self.commit(),
            Err(e) => tracing::debug!("Ignoring reorder: {e}"),
        }
    }

    /// Move an element to the bottom of the paint order and commit.
    pub fn send_to_back(&mut self, id: ElementId) {
        match self.canvas.send_to_back(id) {
            Ok(()) => self.commit(),
            Err(e) => tracing::debug!("Ignoring reorder: {e}"),
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select an element: replace the selection, or toggle membership when
    /// `multi` is set. A stale ID is a benign no-op.
    pub fn select(&mut self, id: ElementId, multi: bool) {
        if !self.canvas.contains(id) {
            tracing::debug!(%id, "Ignoring select of unknown element");
            return;
        }
        self.selection.select(id, multi);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    /// Commit the live canvas to history as one undoable step.
    ///
    /// Call once per logical user action - after a completed drag or a
    /// finished run of panel edits, never per intermediate mutation. A
    /// commit with no net change is skipped to keep history dense.
    pub fn commit(&mut self) {
        if self.canvas == *self.history.present() {
            tracing::debug!("Skipping no-op commit");
            return;
        }
        self.history.commit(self.canvas.clone());
    }

    /// Step back one committed state. No-op while dragging or at the
    /// beginning of history.
    pub fn undo(&mut self) -> bool {
        if self.controller.is_dragging() {
            tracing::debug!("Undo ignored mid-drag");
            return false;
        }
        if !self.history.undo() {
            return false;
        }
        self.restore_present();
        true
    }

    /// Step forward one undone state. No-op while dragging or at the end
    /// of history.
    pub fn redo(&mut self) -> bool {
        if self.controller.is_dragging() {
            tracing::debug!("Redo ignored mid-drag");
            return false;
        }
        if !self.history.redo() {
            return false;
        }
        self.restore_present();
        true
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn restore_present(&mut self) {
        self.canvas = self.history.present().clone();
        let canvas = &self.canvas;
        self.selection.retain(|&id| canvas.contains(id));
    }

    // -----------------------------------------------------------------------
    // Pointer interaction
    // -----------------------------------------------------------------------

    /// Handle pointer-down on the canvas.
    ///
    /// Hit-tests for the topmost unlocked element: a hit updates the
    /// selection (clicking inside an existing multi-selection keeps it, so
    /// the group can be dragged together) and starts a move drag for every
    /// selected element; a miss clears the selection. A multi-click that
    /// toggles the hit element *out* of the selection is a pure deselect
    /// and starts no drag. Ignored while a drag is already in progress.
    pub fn pointer_down(&mut self, point: Point, multi: bool) {
        if self.controller.is_dragging() {
            tracing::debug!("Pointer-down ignored: drag already in progress");
            return;
        }

        let Some(hit) = self.canvas.element_at(point) else {
            self.selection.clear();
            return;
        };

        if multi {
            self.selection.select(hit, true);
            if !self.selection.contains(hit) {
                // Toggled off: the element under the pointer is no longer
                // selected, so there is nothing to grab.
                return;
            }
        } else if !self.selection.contains(hit) {
            self.selection.replace(hit);
        }

        self.begin_drag(DragMode::Move, point);
    }

    /// Start a resize drag from the given handle of the current selection.
    pub fn begin_resize(&mut self, handle: ResizeHandle, point: Point) {
        self.begin_drag(DragMode::Resize(handle), point);
    }

    /// Start a rotate drag around the current selection.
    pub fn begin_rotate(&mut self, point: Point) {
        self.begin_drag(DragMode::Rotate, point);
    }

    fn begin_drag(&mut self, mode: DragMode, point: Point) {
        let targets: Vec<_> = self
            .selection
            .ids()
            .iter()
            .filter_map(|&id| self.canvas.get_element(id))
            .filter(|e| !e.locked)
            .map(|e| (e.id, e.transform))
            .collect();
        self.controller.begin(mode, point, targets);
    }

    /// Handle pointer-move: write the recomputed transforms into the live
    /// canvas, uncommitted. No-op while idle.
    pub fn pointer_move(&mut self, point: Point) {
        for (id, transform) in self.controller.update(point) {
            if let Err(e) = self.canvas.update_element(id, |element| {
                element.transform = transform;
            }) {
                tracing::debug!("Ignoring drag update: {e}");
            }
        }
    }

    /// Handle pointer-up: end the drag and commit the result as one
    /// undoable step. A click with zero net movement commits nothing.
    pub fn pointer_up(&mut self) {
        if self.controller.end().is_some() {
            self.commit();
        }
    }

    /// Abort an in-progress drag, restoring every target to its captured
    /// start pose. Nothing is committed; the gesture never happened.
    pub fn cancel_drag(&mut self) {
        let Some(starts) = self.controller.cancel() else {
            return;
        };
        for (id, transform) in starts {
            if let Err(e) = self.canvas.update_element(id, |element| {
                element.transform = transform;
            }) {
                tracing::debug!("Ignoring drag restore: {e}");
            }
        }
    }

    // -----------------------------------------------------------------------
    // External interface
    // -----------------------------------------------------------------------

    /// Install a template: replace all elements and the canvas size, and
    /// reset history to this fresh baseline (prior undo/redo is discarded).
    pub fn apply_template(&mut self, config: CanvasConfig) {
        self.controller = InteractionController::new();
        self.template_id = config.template_id.clone();
        self.canvas = config.into_canvas();
        self.selection.clear();
        self.history.reset(self.canvas.clone());
        tracing::debug!(
            template = self.template_id.as_deref().unwrap_or("none"),
            elements = self.canvas.element_count(),
            "Template applied"
        );
    }

    /// Export the committed present snapshot for persistence or download.
    ///
    /// Pure: reads the history present and never touches live state.
    #[must_use]
    pub fn export(&self) -> CanvasConfig {
        CanvasConfig::from_canvas(self.history.present(), self.template_id.clone())
    }
}

impl Default for LogoEditor {
    fn default() -> Self {
        Self::new(500.0, 300.0)
    }
}
