//! Selection tracking - which element IDs are currently targeted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// The set of currently selected element IDs, in insertion order.
///
/// Holds IDs only, never element data; elements are always read back from
/// the canvas so the selection cannot go stale. The first ID is the
/// primary target used when rendering per-type property panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    ids: Vec<ElementId>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element.
    ///
    /// With `multi` false the selection is replaced by `{id}`. With `multi`
    /// true membership of `id` is toggled, matching shift/ctrl-click.
    pub fn select(&mut self, id: ElementId, multi: bool) {
        if multi {
            if let Some(position) = self.ids.iter().position(|&eid| eid == id) {
                self.ids.remove(position);
            } else {
                self.ids.push(id);
            }
        } else {
            self.ids.clear();
            self.ids.push(id);
        }
    }

    /// Replace the selection with exactly the given ID.
    pub fn replace(&mut self, id: ElementId) {
        self.select(id, false);
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// The primary selection target (first ID in insertion order).
    #[must_use]
    pub fn primary(&self) -> Option<ElementId> {
        self.ids.first().copied()
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    /// Selected IDs as a set, for batch deletion.
    #[must_use]
    pub fn id_set(&self) -> HashSet<ElementId> {
        self.ids.iter().copied().collect()
    }

    /// Number of selected IDs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop IDs that fail the predicate.
    ///
    /// Called after deletes and history restores so the selection never
    /// references an element absent from the canvas.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&ElementId) -> bool,
    {
        self.ids.retain(f);
    }
}
