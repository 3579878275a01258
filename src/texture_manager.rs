use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::document::Document;
use crate::error::Result;
use crate::renderer::{Raster, Rasterizer};

/// Holds the preview texture and re-renders it when the document changes.
///
/// The document's revision is the cache key: any mutation bumps it, and the
/// next frame re-runs the rasterizer before drawing.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    rendered_revision: Option<u64>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cached texture is stale for `document`.
    pub fn needs_update(&self, document: &Document) -> bool {
        self.rendered_revision != Some(document.revision())
    }

    /// Returns the preview texture, re-rendering first if it is stale.
    pub fn preview(
        &mut self,
        ctx: &Context,
        rasterizer: &Rasterizer,
        document: &Document,
    ) -> Result<&TextureHandle> {
        let image = if self.handle.is_none() || self.needs_update(document) {
            let raster = rasterizer.render_document(document)?;
            log::debug!("Refreshed preview at revision {}", document.revision());
            Some(to_color_image(&raster))
        } else {
            None
        };

        let handle = match (self.handle.take(), image) {
            (Some(handle), None) => handle,
            (Some(mut handle), Some(image)) => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            (None, image) => {
                let image = image.unwrap_or_default();
                ctx.load_texture("logo_preview", image, TextureOptions::NEAREST)
            }
        };
        self.rendered_revision = Some(document.revision());

        Ok(&*self.handle.insert(handle))
    }
}

pub fn to_color_image(raster: &Raster) -> ColorImage {
    let size = [raster.width() as usize, raster.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, raster.as_raw())
}
