//! The canvas - an ordered store of drawable elements.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId, ElementKind, ElementType, Transform};
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::Point;

/// The editable surface holding all elements of one logo.
///
/// The element vector is insertion-ordered; paint order is determined by
/// `z_index` ascending, with insertion order breaking ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    elements: Vec<Element>,
}

impl Canvas {
    /// Create a new empty canvas of the given size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Center point of the canvas.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Append a pre-built element to the canvas.
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.elements.push(element);
        id
    }

    /// Create a new element of the given type with default styling,
    /// centered on the canvas, painting above everything else.
    pub fn add_centered(&mut self, element_type: ElementType) -> ElementId {
        let (width, height) = ElementKind::default_size(element_type);
        let center = self.center();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let z_index = self.elements.len() as i32;

        let element = Element::new(ElementKind::with_defaults(element_type)).with_transform(
            Transform {
                x: center.x - width / 2.0,
                y: center.y - height / 2.0,
                width,
                height,
                rotation: 0.0,
                z_index,
            },
        );
        self.add_element(element)
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Check whether an element with the given ID exists.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id == id)
    }

    /// Update an element using a closure.
    ///
    /// Does not record history; callers decide when a run of incremental
    /// updates becomes one undoable step.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ElementNotFound`] if the element is absent.
    pub fn update_element<F>(&mut self, id: ElementId, f: F) -> CanvasResult<()>
    where
        F: FnOnce(&mut Element),
    {
        let element = self
            .get_element_mut(id)
            .ok_or_else(|| CanvasError::ElementNotFound(id.to_string()))?;
        f(element);
        element.clamp_style();
        Ok(())
    }

    /// Remove every element whose ID appears in `ids` in a single pass.
    ///
    /// IDs with no matching element are ignored. Returns the number of
    /// elements removed.
    pub fn delete_elements(&mut self, ids: &HashSet<ElementId>) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| !ids.contains(&e.id));
        before - self.elements.len()
    }

    /// All elements in insertion order.
    #[must_use]
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Elements sorted for painting: `z_index` ascending, insertion order
    /// breaking ties.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.transform.z_index);
        ordered
    }

    /// Find the topmost unlocked element at the given canvas coordinates.
    #[must_use]
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.paint_order()
            .iter()
            .rev()
            .find(|e| !e.locked && e.contains_point(point.x, point.y))
            .map(|e| e.id)
    }

    /// Move an element to the top of the paint order, renumbering all
    /// z-indices to stay contiguous from 0.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ElementNotFound`] if the element is absent.
    pub fn bring_to_front(&mut self, id: ElementId) -> CanvasResult<()> {
        self.reorder(id, true)
    }

    /// Move an element to the bottom of the paint order, renumbering all
    /// z-indices to stay contiguous from 0.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::ElementNotFound`] if the element is absent.
    pub fn send_to_back(&mut self, id: ElementId) -> CanvasResult<()> {
        self.reorder(id, false)
    }

    fn reorder(&mut self, id: ElementId, to_front: bool) -> CanvasResult<()> {
        if !self.contains(id) {
            return Err(CanvasError::ElementNotFound(id.to_string()));
        }

        let mut order: Vec<ElementId> = self.paint_order().iter().map(|e| e.id).collect();
        order.retain(|&eid| eid != id);
        if to_front {
            order.push(id);
        } else {
            order.insert(0, id);
        }

        for (position, eid) in order.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let z_index = position as i32;
            if let Some(element) = self.get_element_mut(*eid) {
                element.transform.z_index = z_index;
            }
        }
        Ok(())
    }

    /// Number of elements on the canvas.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the canvas has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_centered_positions_and_layers() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let first = canvas.add_centered(ElementType::Text);
        let second = canvas.add_centered(ElementType::Shape);

        let text = canvas.get_element(first).expect("element exists");
        // 200x50 text centered on a 500x300 canvas sits at (150, 125).
        assert!((text.transform.x - 150.0).abs() < f32::EPSILON);
        assert!((text.transform.y - 125.0).abs() < f32::EPSILON);
        assert_eq!(text.transform.z_index, 0);

        let shape = canvas.get_element(second).expect("element exists");
        assert_eq!(shape.transform.z_index, 1);
    }

    #[test]
    fn test_update_missing_element_is_not_found() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let result = canvas.update_element(ElementId::new(), |e| e.transform.x = 10.0);
        assert!(matches!(result, Err(CanvasError::ElementNotFound(_))));
    }

    #[test]
    fn test_delete_elements_ignores_unknown_ids() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let keep = canvas.add_centered(ElementType::Text);
        let remove = canvas.add_centered(ElementType::Shape);

        let ids: HashSet<_> = [remove, ElementId::new()].into_iter().collect();
        assert_eq!(canvas.delete_elements(&ids), 1);
        assert!(canvas.contains(keep));
        assert!(!canvas.contains(remove));
    }

    #[test]
    fn test_paint_order_breaks_ties_by_insertion() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let a = canvas.add_centered(ElementType::Shape);
        let b = canvas.add_centered(ElementType::Shape);
        canvas
            .update_element(b, |e| e.transform.z_index = 0)
            .expect("update");

        let order: Vec<_> = canvas.paint_order().iter().map(|e| e.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_element_at_picks_topmost_unlocked() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let below = canvas.add_centered(ElementType::Shape);
        let above = canvas.add_centered(ElementType::Shape);

        let center = canvas.center();
        assert_eq!(canvas.element_at(center), Some(above));

        canvas
            .update_element(above, |e| e.locked = true)
            .expect("update");
        assert_eq!(canvas.element_at(center), Some(below));
    }

    #[test]
    fn test_bring_to_front_renumbers_contiguously() {
        let mut canvas = Canvas::new(500.0, 300.0);
        let a = canvas.add_centered(ElementType::Shape);
        let b = canvas.add_centered(ElementType::Shape);
        let c = canvas.add_centered(ElementType::Shape);

        fn z(canvas: &Canvas, id: ElementId) -> i32 {
            canvas.get_element(id).expect("exists").transform.z_index
        }

        canvas.bring_to_front(a).expect("reorder");
        assert_eq!(z(&canvas, b), 0);
        assert_eq!(z(&canvas, c), 1);
        assert_eq!(z(&canvas, a), 2);

        canvas.send_to_back(c).expect("reorder");
        assert_eq!(z(&canvas, c), 0);
        assert_eq!(z(&canvas, b), 1);
        assert_eq!(z(&canvas, a), 2);
    }
}
