use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::element::TextElement;

/// Glyph coverage at or above which a pixel is painted.
const COVERAGE_THRESHOLD: f32 = 0.5;

/// Draws text with its top-left anchor at the element position.
///
/// The first line's ascender touches `position.y`; each `\n` moves down by
/// the font's line height. Pixels are overwritten, never blended.
pub(crate) fn draw_text(
    pixmap: &mut Pixmap,
    font: &FontArc,
    text: &TextElement,
    color: PremultipliedColorU8,
) {
    if text.text.is_empty() {
        return;
    }

    let scale = em_scale(font, text.font_size as f32);
    let scaled = font.as_scaled(scale);
    let line_advance = scaled.height() + scaled.line_gap();
    let mut baseline = text.position.y as f32 + scaled.ascent();

    for line in text.text.split('\n') {
        let mut caret = text.position.x as f32;
        let mut previous: Option<GlyphId> = None;

        for ch in line.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                // Whitespace and glyphs missing from the face.
                continue;
            };
            let bounds = outlined.px_bounds();
            let (origin_x, origin_y) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                if coverage >= COVERAGE_THRESHOLD {
                    put_pixel(pixmap, origin_x + gx as i32, origin_y + gy as i32, color);
                }
            });
        }

        baseline += line_advance;
    }
}

/// The `PxScale` giving `size` pixels per em.
///
/// `PxScale` measures ascent minus descent, which for most faces is larger
/// than the em square, so the size is rescaled by the face's own metrics.
fn em_scale(font: &FontArc, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(size),
    }
}

fn put_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: PremultipliedColorU8) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let index = (y * width + x) as usize;
    pixmap.pixels_mut()[index] = color;
}
