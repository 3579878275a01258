use egui::Color32;
use std::path::PathBuf;

use crate::document::Document;
use crate::drawing_context::DrawingContext;
use crate::element::{DEFAULT_SHAPE_BOUNDS, ShapeKind};
use crate::error::Result;
use crate::file_handler::{self, DEFAULT_OUTPUT_DIR};
use crate::panels;
use crate::renderer::{Rasterizer, system_font_dirs};
use crate::template::Template;
use crate::texture_manager::TextureManager;

/// Text used when "Add Text" is pressed with an empty input.
pub const PLACEHOLDER_TEXT: &str = "Sample Text";

/// User-adjustable settings, persisted with the rest of the app state.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Where saved logos go.
    pub output_dir: PathBuf,
    /// Directories searched when resolving a font family.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font_dirs: system_font_dirs(),
        }
    }
}

/// Outcome of the last save, shown until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Success(_) => "Success",
            Notice::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(message) | Notice::Error(message) => message,
        }
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct LogoMakerApp {
    document: Document,
    drawing: DrawingContext,
    text_input: String,
    outline_only: bool,
    settings: AppSettings,

    // Font cache and GPU texture are rebuilt on start
    #[serde(skip)]
    rasterizer: Option<Rasterizer>,
    #[serde(skip)]
    preview: TextureManager,
    #[serde(skip)]
    notice: Option<Notice>,
}

impl Default for LogoMakerApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl LogoMakerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        if let Err(err) = ensure_rasterizer(&mut app.rasterizer, &app.settings.font_dirs) {
            log::error!("Failed to set up rasterizer: {}", err);
        }
        log::info!(
            "Logo maker started with {} element(s)",
            app.document.elements().len()
        );
        app
    }

    /// A fresh app that does not touch eframe storage.
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            document: Document::new(),
            drawing: DrawingContext::default(),
            text_input: PLACEHOLDER_TEXT.to_owned(),
            outline_only: false,
            settings,
            rasterizer: None,
            preview: TextureManager::new(),
            notice: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn drawing(&self) -> &DrawingContext {
        &self.drawing
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn text_input_mut(&mut self) -> &mut String {
        &mut self.text_input
    }

    pub fn outline_only_mut(&mut self) -> &mut bool {
        &mut self.outline_only
    }

    pub fn font_family_mut(&mut self) -> &mut String {
        &mut self.drawing.font_family
    }

    /// Adds the input text at the default position.
    pub fn add_text(&mut self) {
        let text = if self.text_input.is_empty() {
            PLACEHOLDER_TEXT
        } else {
            self.text_input.as_str()
        };
        self.document.elements_mut().add_default_text(&self.drawing, text);
    }

    /// Adds a shape with the default bounding box.
    pub fn add_shape(&mut self, kind: ShapeKind) {
        let filled = !self.outline_only;
        self.document
            .elements_mut()
            .add_styled_shape(&self.drawing, kind, DEFAULT_SHAPE_BOUNDS, filled);
    }

    pub fn set_color(&mut self, color: Color32) {
        self.drawing.color = color;
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.drawing.set_font_size(size);
    }

    pub fn set_background(&mut self, color: Color32) {
        self.document.set_background(color);
    }

    pub fn delete_element(&mut self, index: usize) {
        self.document.elements_mut().delete(index);
    }

    pub fn clear(&mut self) {
        self.document.clear();
    }

    pub fn apply_template(&mut self, template: Template) {
        template.apply(&mut self.document, &mut self.drawing);
    }

    /// Renders and saves the logo under a timestamped name.
    ///
    /// The outcome is also recorded as a notice for the UI.
    pub fn save_logo(&mut self) -> Result<PathBuf> {
        let result = ensure_rasterizer(&mut self.rasterizer, &self.settings.font_dirs)
            .and_then(|rasterizer| rasterizer.render_document(&self.document))
            .and_then(|raster| file_handler::save_timestamped(&raster, &self.settings.output_dir));

        self.notice = Some(match &result {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Notice::Success(format!("Logo saved as {name}"))
            }
            Err(err) => {
                log::error!("Error saving logo: {}", err);
                Notice::Error(format!("Error saving logo: {err}"))
            }
        });

        result
    }

    /// The preview texture for the current document, re-rendered if stale.
    pub(crate) fn preview_texture(&mut self, ctx: &egui::Context) -> Result<egui::TextureHandle> {
        let rasterizer = ensure_rasterizer(&mut self.rasterizer, &self.settings.font_dirs)?;
        self.preview
            .preview(ctx, rasterizer, &self.document)
            .cloned()
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(notice.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message());
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_notice();
        }
    }
}

fn ensure_rasterizer<'a>(
    slot: &'a mut Option<Rasterizer>,
    font_dirs: &[PathBuf],
) -> Result<&'a Rasterizer> {
    let rasterizer = match slot.take() {
        Some(rasterizer) => rasterizer,
        None => Rasterizer::with_font_dirs(font_dirs.to_vec())?,
    };
    Ok(&*slot.insert(rasterizer))
}

impl eframe::App for LogoMakerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::palette_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.show_notice(ctx);
    }
}
