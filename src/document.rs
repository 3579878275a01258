use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::drawing_context::DrawingContext;
use crate::element::{
    Bounds, DEFAULT_SHAPE_BOUNDS, DEFAULT_TEXT_POSITION, Element, ElementKind, Position,
    ShapeElement, ShapeKind, TextElement,
};
use crate::error::{LogoError, Result};

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 400;
pub const DEFAULT_BACKGROUND: Color32 = Color32::WHITE;

/// Document-wide background and dimensions.
///
/// The size is fixed for the lifetime of a document; only the background can
/// be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    width: u32,
    height: u32,
    pub background: Color32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: DEFAULT_BACKGROUND,
        }
    }
}

impl CanvasState {
    /// A canvas of the standard size with the given background.
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            ..Self::default()
        }
    }

    /// A canvas of a custom size. Both dimensions must be non-zero.
    pub fn with_size(width: u32, height: u32, background: Color32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LogoError::InvalidCanvasSize { width, height });
        }
        Ok(Self {
            width,
            height,
            background,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Ordered, exclusively owned list of elements.
///
/// Order is insertion order modulo deletions and doubles as the compositing
/// order. Every operation is total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text element stamped with the context's color and font.
    pub fn add_text(
        &mut self,
        ctx: &DrawingContext,
        text: impl Into<String>,
        position: Position,
    ) -> &Element {
        let text = TextElement::new(text, position, ctx);
        self.push(ElementKind::Text(text))
    }

    /// Appends a text element at the default position.
    pub fn add_default_text(&mut self, ctx: &DrawingContext, text: impl Into<String>) -> &Element {
        self.add_text(ctx, text, DEFAULT_TEXT_POSITION)
    }

    /// Appends a filled shape in the context's color.
    pub fn add_shape(&mut self, ctx: &DrawingContext, kind: ShapeKind, bounds: Bounds) -> &Element {
        self.add_styled_shape(ctx, kind, bounds, true)
    }

    /// Appends a filled shape with the default bounding box.
    pub fn add_default_shape(&mut self, ctx: &DrawingContext, kind: ShapeKind) -> &Element {
        self.add_shape(ctx, kind, DEFAULT_SHAPE_BOUNDS)
    }

    /// Appends a shape that is either filled or drawn as an outline.
    pub fn add_styled_shape(
        &mut self,
        ctx: &DrawingContext,
        kind: ShapeKind,
        bounds: Bounds,
        filled: bool,
    ) -> &Element {
        let shape = ShapeElement::new(kind, bounds, ctx.color, filled);
        self.push(ElementKind::Shape(shape))
    }

    fn push(&mut self, kind: ElementKind) -> &Element {
        let sequence_id = self.elements.len();
        self.elements.push(Element::new(sequence_id, kind));
        log::info!("Added element {}", sequence_id);
        &self.elements[sequence_id]
    }

    /// Removes the element at `index` and renumbers the rest.
    ///
    /// Returns the removed element, or `None` (and leaves the store untouched)
    /// when `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Option<Element> {
        if index >= self.elements.len() {
            log::debug!("Ignoring delete of element {} (len {})", index, self.elements.len());
            return None;
        }
        let removed = self.elements.remove(index);
        self.renumber();
        log::info!("Deleted element {}", index);
        Some(removed)
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    fn renumber(&mut self) {
        for (index, element) in self.elements.iter_mut().enumerate() {
            element.set_sequence_id(index);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a ElementStore {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// The active logo: canvas state plus its elements.
///
/// `revision` increases on every mutation so views know when to re-render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub canvas: CanvasState,
    elements: ElementStore,
    #[serde(skip)]
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &ElementStore {
        &self.elements
    }

    /// Mutable access to the store. Counts as a mutation.
    pub fn elements_mut(&mut self) -> &mut ElementStore {
        self.touch();
        &mut self.elements
    }

    pub fn background(&self) -> Color32 {
        self.canvas.background
    }

    pub fn set_background(&mut self, color: Color32) {
        self.canvas.background = color;
        self.touch();
    }

    /// Removes every element. The background is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.touch();
        log::info!("Cleared canvas");
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_must_be_positive() {
        assert!(CanvasState::with_size(0, 10, Color32::WHITE).is_err());
        assert!(CanvasState::with_size(10, 0, Color32::WHITE).is_err());
        let canvas = CanvasState::with_size(16, 8, Color32::BLACK).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (16, 8));
    }

    #[test]
    fn test_default_canvas() {
        let canvas = CanvasState::default();
        assert_eq!((canvas.width(), canvas.height()), (400, 400));
        assert_eq!(canvas.background, Color32::WHITE);
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut doc = Document::new();
        let start = doc.revision();
        let ctx = DrawingContext::default();
        doc.elements_mut().add_default_text(&ctx, "Hi");
        doc.set_background(Color32::BLACK);
        doc.clear();
        assert_eq!(doc.revision(), start + 3);
        assert!(doc.elements().is_empty());
        assert_eq!(doc.background(), Color32::BLACK);
    }
}
