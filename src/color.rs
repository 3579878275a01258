//! Named color palettes and swatches offered by the editor.

use egui::Color32;

/// A named, ordered set of swatch colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [Color32; 5],
}

pub const PALETTES: [Palette; 6] = [
    Palette {
        name: "Professional",
        colors: [
            Color32::from_rgb(0x1E, 0x3A, 0x8A),
            Color32::from_rgb(0x3B, 0x82, 0xF6),
            Color32::from_rgb(0x60, 0xA5, 0xFA),
            Color32::from_rgb(0x93, 0xC5, 0xFD),
            Color32::from_rgb(0xDB, 0xEA, 0xFE),
        ],
    },
    Palette {
        name: "Vibrant",
        colors: [
            Color32::from_rgb(0xDC, 0x26, 0x26),
            Color32::from_rgb(0xEA, 0x58, 0x0C),
            Color32::from_rgb(0xF5, 0x9E, 0x0B),
            Color32::from_rgb(0x10, 0xB9, 0x81),
            Color32::from_rgb(0x3B, 0x82, 0xF6),
        ],
    },
    Palette {
        name: "Pastel",
        colors: [
            Color32::from_rgb(0xFE, 0xE2, 0xE2),
            Color32::from_rgb(0xFE, 0xF3, 0xC7),
            Color32::from_rgb(0xD1, 0xFA, 0xE5),
            Color32::from_rgb(0xDB, 0xEA, 0xFE),
            Color32::from_rgb(0xE0, 0xE7, 0xFF),
        ],
    },
    Palette {
        name: "Monochrome",
        colors: [
            Color32::from_rgb(0x00, 0x00, 0x00),
            Color32::from_rgb(0x37, 0x41, 0x51),
            Color32::from_rgb(0x6B, 0x72, 0x80),
            Color32::from_rgb(0xD1, 0xD5, 0xDB),
            Color32::from_rgb(0xFF, 0xFF, 0xFF),
        ],
    },
    Palette {
        name: "Sunset",
        colors: [
            Color32::from_rgb(0x7C, 0x2D, 0x12),
            Color32::from_rgb(0xEA, 0x58, 0x0C),
            Color32::from_rgb(0xF5, 0x9E, 0x0B),
            Color32::from_rgb(0xFD, 0xE0, 0x47),
            Color32::from_rgb(0xFE, 0xF3, 0xC7),
        ],
    },
    Palette {
        name: "Ocean",
        colors: [
            Color32::from_rgb(0x0F, 0x17, 0x2A),
            Color32::from_rgb(0x1E, 0x29, 0x3B),
            Color32::from_rgb(0x0E, 0xA5, 0xE9),
            Color32::from_rgb(0x38, 0xBD, 0xF8),
            Color32::from_rgb(0x7D, 0xD3, 0xFC),
        ],
    },
];

/// Colors offered for the canvas background.
pub const BACKGROUND_SWATCHES: [Color32; 6] = [
    Color32::from_rgb(0xFF, 0xFF, 0xFF),
    Color32::from_rgb(0xF8, 0xFA, 0xFC),
    Color32::from_rgb(0x1E, 0x29, 0x3B),
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0xFE, 0xF3, 0xC7),
    Color32::from_rgb(0xD1, 0xFA, 0xE5),
];

/// Formats an opaque color as `#RRGGBB`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let names: Vec<&str> = PALETTES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["Professional", "Vibrant", "Pastel", "Monochrome", "Sunset", "Ocean"]
        );
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(PALETTES[0].colors[0]), "#1E3A8A");
        assert_eq!(to_hex(PALETTES[5].colors[4]), "#7DD3FC");
        assert_eq!(to_hex(BACKGROUND_SWATCHES[2]), "#1E293B");
    }
}
