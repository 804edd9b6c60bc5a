//! # Logo Core
//!
//! Free-form canvas editing engine for the logo builder: typed drawable
//! elements, direct-manipulation transforms, multi-element selection, and
//! snapshot-based undo/redo.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  LogoEditor                  │
//! ├──────────────────────────────────────────────┤
//! │  Canvas           │  InteractionController   │
//! │  - Elements       │  - Idle / Dragging       │
//! │  - Z-ordering     │  - Start-pose capture    │
//! │  - Hit-testing    │  - Move/resize/rotate    │
//! ├──────────────────────────────────────────────┤
//! │  Selection        │  History<Canvas>         │
//! │  - ID set         │  - past/present/future   │
//! │  - Primary target │  - Branch-discard redo   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Pointer input flows through the controller, which derives transforms
//! with the pure [`geometry`] functions and writes them live into the
//! canvas; one snapshot is committed to history per completed gesture.
//! The host exchanges a single [`CanvasConfig`] blob with the engine.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod selection;

pub use canvas::Canvas;
pub use config::{CanvasConfig, CanvasSize};
pub use editor::LogoEditor;
pub use element::{
    Element, ElementId, ElementKind, ElementType, FontWeight, ShapeKind, TextAlign, Transform,
    MIN_ELEMENT_SIZE,
};
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Point, ResizeHandle};
pub use history::History;
pub use interaction::{DragMode, DragState, InteractionController};
pub use selection::Selection;

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
