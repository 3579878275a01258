//! Rasterization of a document into a fixed-size RGBA image.

use egui::Color32;
use tiny_skia::{BlendMode, Color, ColorU8, Paint, Pixmap, PremultipliedColorU8};

mod fonts;
mod shapes;
mod text;

pub use fonts::{FontBook, FontSource, ResolvedFont, system_font_dirs};

use crate::document::{CanvasState, Document};
use crate::element::{Element, ElementKind};
use crate::error::{LogoError, Result};

/// Rendered output, straight (non-premultiplied) RGBA.
pub type Raster = image::RgbaImage;

/// Turns canvas state and an ordered element list into a raster.
///
/// Elements are painted in order with no blending: every draw overwrites the
/// pixels it touches, so later elements cover earlier ones. Rendering never
/// mutates its inputs; the only internal state is the font cache, which does
/// not affect output.
#[derive(Debug)]
pub struct Rasterizer {
    fonts: FontBook,
}

impl Rasterizer {
    /// A rasterizer resolving named fonts from the platform font directories.
    pub fn new() -> Result<Self> {
        Self::with_font_dirs(system_font_dirs())
    }

    pub fn with_font_dirs(font_dirs: Vec<std::path::PathBuf>) -> Result<Self> {
        Ok(Self {
            fonts: FontBook::new(font_dirs)?,
        })
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }

    pub fn render_document(&self, document: &Document) -> Result<Raster> {
        self.render(&document.canvas, document.elements().elements())
    }

    /// Renders `elements` over a canvas filled with its background color.
    ///
    /// Only fails if the raster itself cannot be allocated.
    pub fn render(&self, canvas: &CanvasState, elements: &[Element]) -> Result<Raster> {
        let mut pixmap = blank_pixmap(canvas)?;

        for element in elements {
            match element.kind() {
                ElementKind::Text(text) => {
                    let resolved = self.fonts.resolve(&text.font_family);
                    text::draw_text(&mut pixmap, &resolved.font, text, premultiplied(text.color));
                }
                ElementKind::Shape(shape) => {
                    shapes::draw_shape(&mut pixmap, shape, &solid_paint(shape.color));
                }
            }
        }

        Ok(to_raster(&pixmap))
    }
}

/// A raster holding only the canvas background.
pub fn blank_raster(canvas: &CanvasState) -> Result<Raster> {
    blank_pixmap(canvas).map(|pixmap| to_raster(&pixmap))
}

fn blank_pixmap(canvas: &CanvasState) -> Result<Pixmap> {
    let (width, height) = (canvas.width(), canvas.height());
    let mut pixmap = Pixmap::new(width, height).ok_or(LogoError::RasterAllocation { width, height })?;
    let [r, g, b, a] = canvas.background.to_srgba_unmultiplied();
    pixmap.fill(Color::from_rgba8(r, g, b, a));
    Ok(pixmap)
}

/// Aliased paint that replaces destination pixels outright.
fn solid_paint(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint.blend_mode = BlendMode::Source;
    paint
}

fn premultiplied(color: Color32) -> PremultipliedColorU8 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    ColorU8::from_rgba(r, g, b, a).premultiply()
}

fn to_raster(pixmap: &Pixmap) -> Raster {
    let mut raster = Raster::new(pixmap.width(), pixmap.height());
    for (dst, src) in raster.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    raster
}
