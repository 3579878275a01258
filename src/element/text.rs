use egui::Color32;
use serde::{Deserialize, Serialize};

use super::common::Position;
use crate::drawing_context::DrawingContext;

/// A run of text drawn with its top-left anchor at `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    pub position: Position,
    pub color: Color32,
    pub font_size: u32,
    pub font_family: String,
}

impl TextElement {
    /// Builds a text element from a snapshot of the ambient settings.
    pub fn new(text: impl Into<String>, position: Position, ctx: &DrawingContext) -> Self {
        Self {
            text: text.into(),
            position,
            color: ctx.color,
            font_size: ctx.font_size(),
            font_family: ctx.font_family.clone(),
        }
    }
}
