use egui::Color32;
use serde::{Deserialize, Serialize};

mod common;
mod shape;
mod text;

pub use common::{Bounds, DEFAULT_SHAPE_BOUNDS, DEFAULT_TEXT_POSITION, Position};
pub use shape::{OUTLINE_WIDTH, ShapeElement, ShapeKind, UnknownShapeKind};
pub use text::TextElement;

/// Number of characters of a text element shown in its description.
const DESCRIPTION_TEXT_LEN: usize = 20;

/// Payload of a drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    Text(TextElement),
    Shape(ShapeElement),
}

/// One drawable unit in the document.
///
/// `sequence_id` is the element's index in the store as of the last mutation.
/// It is a display aid, not a stable identity, and is only ever written by
/// the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    sequence_id: usize,
    kind: ElementKind,
}

impl Element {
    pub(crate) fn new(sequence_id: usize, kind: ElementKind) -> Self {
        Self { sequence_id, kind }
    }

    pub fn sequence_id(&self) -> usize {
        self.sequence_id
    }

    pub(crate) fn set_sequence_id(&mut self, sequence_id: usize) {
        self.sequence_id = sequence_id;
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.kind {
            ElementKind::Text(text) => Some(text),
            ElementKind::Shape(_) => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match &self.kind {
            ElementKind::Shape(shape) => Some(shape),
            ElementKind::Text(_) => None,
        }
    }

    pub fn color(&self) -> Color32 {
        match &self.kind {
            ElementKind::Text(text) => text.color,
            ElementKind::Shape(shape) => shape.color,
        }
    }

    /// Get the element type as a string
    pub fn element_type(&self) -> &'static str {
        match &self.kind {
            ElementKind::Text(_) => "text",
            ElementKind::Shape(_) => "shape",
        }
    }

    /// Short label for the element list, e.g. `Text: Hello...` or `Shape: circle`.
    pub fn describe(&self) -> String {
        match &self.kind {
            ElementKind::Text(text) => {
                let preview: String = text.text.chars().take(DESCRIPTION_TEXT_LEN).collect();
                format!("Text: {preview}...")
            }
            ElementKind::Shape(shape) => format!("Shape: {}", shape.kind),
        }
    }
}
