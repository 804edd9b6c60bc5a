//! Canvas elements - the building blocks of a logo.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum width/height an element may be resized to, in pixels.
///
/// Resize operations clamp to this floor instead of rejecting the edit,
/// so interactive dragging never stalls on a degenerate size.
pub const MIN_ELEMENT_SIZE: f32 = 8.0;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which variant of element to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// A text label.
    Text,
    /// A raster or vector image.
    Image,
    /// A geometric shape.
    Shape,
}

/// Font weight for text elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Light weight.
    Light,
    /// Normal (regular) weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Align left.
    Left,
    /// Align center.
    #[default]
    Center,
    /// Align right.
    Right,
}

/// Geometric shape kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    #[default]
    Rectangle,
    /// Circle inscribed in the element bounds.
    Circle,
    /// Ellipse filling the element bounds.
    Ellipse,
    /// Isoceles triangle pointing up.
    Triangle,
}

/// The typed content of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
#[serde(rename_all_fields = "camelCase")]
pub enum ElementKind {
    /// A text label.
    Text {
        /// Text content.
        content: String,
        /// Font family name.
        font_family: String,
        /// Font size in pixels.
        font_size: f32,
        /// Font weight.
        font_weight: FontWeight,
        /// Horizontal alignment within the element bounds.
        text_align: TextAlign,
        /// Text color as hex.
        color: String,
        /// Letter spacing in pixels.
        letter_spacing: f32,
        /// Line height multiplier.
        line_height: f32,
    },

    /// An image.
    Image {
        /// Image source URI.
        src: String,
        /// Alternative text.
        alt: String,
        /// Corner radius in pixels.
        border_radius: f32,
    },

    /// A geometric shape.
    Shape {
        /// Shape kind.
        shape: ShapeKind,
        /// Fill color as hex.
        fill: String,
        /// Stroke color as hex, or `None` for no stroke.
        stroke: Option<String>,
        /// Stroke width in pixels.
        stroke_width: f32,
    },
}

impl ElementKind {
    /// Default styling for a freshly added element of the given type.
    #[must_use]
    pub fn with_defaults(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Text => Self::Text {
                content: "Your Text".to_string(),
                font_family: "Inter".to_string(),
                font_size: 24.0,
                font_weight: FontWeight::Normal,
                text_align: TextAlign::Center,
                color: "#1F2937".to_string(),
                letter_spacing: 0.0,
                line_height: 1.2,
            },
            ElementType::Image => Self::Image {
                src: String::new(),
                alt: String::new(),
                border_radius: 0.0,
            },
            ElementType::Shape => Self::Shape {
                shape: ShapeKind::Rectangle,
                fill: "#3B82F6".to_string(),
                stroke: None,
                stroke_width: 0.0,
            },
        }
    }

    /// Default width/height for a freshly added element of the given type.
    #[must_use]
    pub fn default_size(element_type: ElementType) -> (f32, f32) {
        match element_type {
            ElementType::Text => (200.0, 50.0),
            ElementType::Image => (150.0, 150.0),
            ElementType::Shape => (120.0, 120.0),
        }
    }

    /// Which variant this kind is.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text { .. } => ElementType::Text,
            Self::Image { .. } => ElementType::Image,
            Self::Shape { .. } => ElementType::Shape,
        }
    }
}

/// Position, size, rotation, and layer of an element.
///
/// `Copy` on purpose: the interaction controller captures transforms as
/// drag start poses and re-derives every frame from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// X position of the top-left corner in canvas space.
    pub x: f32,
    /// Y position of the top-left corner in canvas space.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Rotation in degrees, pivot at the element center, in (-180, 180].
    pub rotation: f32,
    /// Z-index for paint order. Higher paints later (above).
    pub z_index: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            rotation: 0.0,
            z_index: 0,
        }
    }
}

impl Transform {
    /// Center point of the element in canvas space.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A drawable element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier. Immutable for the element's lifetime.
    pub id: ElementId,
    /// Typed content and variant-specific style.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Position, size, rotation, and layer.
    #[serde(flatten)]
    pub transform: Transform,
    /// Locked elements are excluded from hit-testing and transforms.
    #[serde(default)]
    pub locked: bool,
    /// Opacity in 0..=1.
    #[serde(default = "Element::default_opacity")]
    pub opacity: f32,
}

impl Element {
    /// Create a new element with the given kind and a fresh ID.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            transform: Transform::default(),
            locked: false,
            opacity: 1.0,
        }
    }

    /// Set the transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set whether the element is locked.
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    const fn default_opacity() -> f32 {
        1.0
    }

    /// Clamp width/height to [`MIN_ELEMENT_SIZE`] and opacity to 0..=1.
    ///
    /// Called after panel-driven edits so direct field writes cannot
    /// produce degenerate geometry.
    pub fn clamp_style(&mut self) {
        self.transform.width = self.transform.width.max(MIN_ELEMENT_SIZE);
        self.transform.height = self.transform.height.max(MIN_ELEMENT_SIZE);
        self.opacity = self.opacity.clamp(0.0, 1.0);
    }

    /// Check if a point (in canvas coordinates) falls within this element,
    /// accounting for rotation about the element center.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let t = &self.transform;
        let (cx, cy) = t.center();
        let (lx, ly) = crate::geometry::rotate_about(x, y, cx, cy, -t.rotation);
        lx >= t.x && lx <= t.x + t.width && ly >= t.y && ly <= t.y + t.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_variant() {
        let text = ElementKind::with_defaults(ElementType::Text);
        assert_eq!(text.element_type(), ElementType::Text);
        if let ElementKind::Text { font_size, .. } = text {
            assert!((font_size - 24.0).abs() < f32::EPSILON);
        }

        let (w, h) = ElementKind::default_size(ElementType::Shape);
        assert!(w >= MIN_ELEMENT_SIZE && h >= MIN_ELEMENT_SIZE);
    }

    #[test]
    fn test_contains_point_axis_aligned() {
        let element = Element::new(ElementKind::with_defaults(ElementType::Shape))
            .with_transform(Transform {
                x: 100.0,
                y: 100.0,
                width: 200.0,
                height: 50.0,
                rotation: 0.0,
                z_index: 0,
            });

        assert!(element.contains_point(150.0, 125.0));
        assert!(!element.contains_point(50.0, 50.0));
    }

    #[test]
    fn test_contains_point_rotated() {
        // A 200x20 bar centered at (100, 100), rotated 90 degrees: its
        // long axis now runs vertically.
        let element = Element::new(ElementKind::with_defaults(ElementType::Shape))
            .with_transform(Transform {
                x: 0.0,
                y: 90.0,
                width: 200.0,
                height: 20.0,
                rotation: 90.0,
                z_index: 0,
            });

        assert!(element.contains_point(100.0, 190.0));
        assert!(!element.contains_point(190.0, 100.0));
    }

    #[test]
    fn test_clamp_style_floors_size() {
        let mut element = Element::new(ElementKind::with_defaults(ElementType::Text));
        element.transform.width = 0.5;
        element.transform.height = -3.0;
        element.opacity = 2.0;
        element.clamp_style();

        assert!((element.transform.width - MIN_ELEMENT_SIZE).abs() < f32::EPSILON);
        assert!((element.transform.height - MIN_ELEMENT_SIZE).abs() < f32::EPSILON);
        assert!((element.opacity - 1.0).abs() < f32::EPSILON);
    }
}
