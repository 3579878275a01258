use serde::{Deserialize, Serialize};

/// Default anchor for text added without an explicit position.
pub const DEFAULT_TEXT_POSITION: Position = Position { x: 50, y: 50 };

/// Default bounding box for shapes added without explicit geometry.
pub const DEFAULT_SHAPE_BOUNDS: Bounds = Bounds {
    x: 100,
    y: 100,
    width: 80,
    height: 80,
};

/// Integer offset from the canvas origin (top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box anchored at its top-left corner.
///
/// Width and height are not validated; zero or negative extents are kept and
/// simply produce a degenerate draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The far corner, `(x + width, y + height)`, saturating at the `i32` limits.
    pub fn max(&self) -> Position {
        Position::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    /// Whether the pixel at `(px, py)` falls inside the box, far edge included.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        let max = self.max();
        px >= self.x && px <= max.x && py >= self.y && py <= max.y
    }
}
