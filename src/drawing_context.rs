use egui::Color32;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Font sizes the editor offers, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=72;

pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(0x33, 0x66, 0xCC);
pub const DEFAULT_FONT_SIZE: u32 = 24;
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Ambient settings stamped onto newly created elements.
///
/// Elements copy these values when they are created. Changing the context
/// afterwards never reaches back into elements already in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingContext {
    pub color: Color32,
    font_size: u32,
    pub font_family: String,
}

impl Default for DrawingContext {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            font_size: DEFAULT_FONT_SIZE,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }
}

impl DrawingContext {
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Sets the font size, clamped to [`FONT_SIZE_RANGE`].
    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.set_font_size(size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let ctx = DrawingContext::default();
        assert_eq!(ctx.color, Color32::from_rgb(0x33, 0x66, 0xCC));
        assert_eq!(ctx.font_size(), 24);
        assert_eq!(ctx.font_family, "Arial");
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut ctx = DrawingContext::default();
        ctx.set_font_size(4);
        assert_eq!(ctx.font_size(), 12);
        ctx.set_font_size(200);
        assert_eq!(ctx.font_size(), 72);
        ctx.set_font_size(36);
        assert_eq!(ctx.font_size(), 36);
    }
}
