//! One-click starter logos.

use egui::Color32;
use std::fmt;
use std::str::FromStr;

use crate::document::Document;
use crate::drawing_context::DrawingContext;
use crate::element::{Bounds, Position, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    TechCompany,
    CreativeStudio,
    Minimalist,
}

impl Template {
    pub const ALL: [Template; 3] = [
        Template::TechCompany,
        Template::CreativeStudio,
        Template::Minimalist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Template::TechCompany => "Tech Company",
            Template::CreativeStudio => "Creative Studio",
            Template::Minimalist => "Minimalist",
        }
    }

    /// Clears the document and replays this template's script.
    ///
    /// The script works through `ctx` the same way the UI does, so the
    /// context is left holding the last color and font size it set.
    pub fn apply(&self, document: &mut Document, ctx: &mut DrawingContext) {
        document.clear();

        match self {
            Template::TechCompany => {
                document.set_background(Color32::from_rgb(0x1E, 0x29, 0x3B));
                ctx.color = Color32::from_rgb(0x3B, 0x82, 0xF6);
                document.elements_mut().add_shape(
                    ctx,
                    ShapeKind::Rectangle,
                    Bounds::new(50, 150, 300, 100),
                );
                ctx.color = Color32::WHITE;
                ctx.set_font_size(32);
                document
                    .elements_mut()
                    .add_text(ctx, "TECH CORP", Position::new(120, 175));
            }
            Template::CreativeStudio => {
                document.set_background(Color32::WHITE);
                ctx.color = Color32::from_rgb(0xEC, 0x48, 0x99);
                document.elements_mut().add_shape(
                    ctx,
                    ShapeKind::Circle,
                    Bounds::new(100, 100, 200, 200),
                );
                ctx.color = Color32::WHITE;
                ctx.set_font_size(28);
                document
                    .elements_mut()
                    .add_text(ctx, "CREATIVE", Position::new(135, 185));
            }
            Template::Minimalist => {
                document.set_background(Color32::from_rgb(0xF8, 0xFA, 0xFC));
                ctx.color = Color32::from_rgb(0x0F, 0x17, 0x2A);
                ctx.set_font_size(36);
                document
                    .elements_mut()
                    .add_text(ctx, "BRAND", Position::new(140, 180));
                ctx.color = Color32::from_rgb(0x3B, 0x82, 0xF6);
                document.elements_mut().add_shape(
                    ctx,
                    ShapeKind::Rectangle,
                    Bounds::new(130, 220, 140, 4),
                );
            }
        }

        log::info!("Applied template '{}'", self.name());
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_owned()))
    }
}
