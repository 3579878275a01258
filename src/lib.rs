#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod document;
pub mod drawing_context;
pub mod element;
pub mod error;
pub mod file_handler;
pub mod panels;
pub mod renderer;
pub mod template;
pub mod texture_manager;

pub use app::{AppSettings, LogoMakerApp};
pub use document::{CanvasState, Document, ElementStore};
pub use drawing_context::DrawingContext;
pub use element::{Bounds, Element, ElementKind, Position, ShapeElement, ShapeKind, TextElement};
pub use error::{LogoError, Result};
pub use renderer::{Raster, Rasterizer};
pub use template::Template;
