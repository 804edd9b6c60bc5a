//! Serialized canvas configuration exchanged with the host application.
//!
//! This is the single value crossing the engine boundary: templates are
//! applied by importing one, and project saves/downloads export one.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::element::Element;
use crate::error::{CanvasError, CanvasResult};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// The persisted shape of one logo canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Full element snapshot, in paint order.
    pub elements: Vec<Element>,
    /// Canvas dimensions.
    pub canvas_size: CanvasSize,
    /// Last-applied template, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

impl CanvasConfig {
    /// Build a config from a canvas snapshot.
    ///
    /// Elements are listed in paint order (z ascending, stable), matching
    /// what a renderer would draw.
    #[must_use]
    pub fn from_canvas(canvas: &Canvas, template_id: Option<String>) -> Self {
        Self {
            elements: canvas.paint_order().into_iter().cloned().collect(),
            canvas_size: CanvasSize {
                width: canvas.width,
                height: canvas.height,
            },
            template_id,
        }
    }

    /// Materialize the config into a live canvas.
    #[must_use]
    pub fn into_canvas(self) -> Canvas {
        let mut canvas = Canvas::new(self.canvas_size.width, self.canvas_size.height);
        for element in self.elements {
            canvas.add_element(element);
        }
        canvas
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> CanvasResult<String> {
        serde_json::to_string(self).map_err(CanvasError::Serialization)
    }

    /// Deserialize from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Serialization`] if the JSON is malformed.
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        serde_json::from_str(json).map_err(CanvasError::Serialization)
    }
}
