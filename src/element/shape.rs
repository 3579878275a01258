use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::common::{Bounds, Position};

/// Stroke width used when a shape is drawn as an outline.
pub const OUTLINE_WIDTH: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    /// Inscribed in the bounding box, so a non-square box gives an ellipse.
    Circle,
    /// Isosceles, apex centered on the top edge.
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }

    /// Label used on the add-shape buttons.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Circle => "Circle",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown shape name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown shape kind: {0}")]
pub struct UnknownShapeKind(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangle" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "triangle" => Ok(ShapeKind::Triangle),
            _ => Err(UnknownShapeKind(s.to_owned())),
        }
    }
}

/// A geometric shape filling or outlining its bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    pub kind: ShapeKind,
    pub bounds: Bounds,
    pub color: Color32,
    pub filled: bool,
}

impl ShapeElement {
    pub fn new(kind: ShapeKind, bounds: Bounds, color: Color32, filled: bool) -> Self {
        Self {
            kind,
            bounds,
            color,
            filled,
        }
    }

    /// Apex, bottom-left and bottom-right corners of a triangle in this box.
    ///
    /// The apex x uses integer division, so odd widths put it one pixel left
    /// of the true center.
    pub fn triangle_vertices(&self) -> [Position; 3] {
        let Bounds {
            x,
            y,
            width,
            height,
        } = self.bounds;
        [
            Position::new(x.saturating_add(width.div_euclid(2)), y),
            Position::new(x, y.saturating_add(height)),
            Position::new(x.saturating_add(width), y.saturating_add(height)),
        ]
    }
}
