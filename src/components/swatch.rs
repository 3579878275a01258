use crate::color;

/// Round, clickable color swatch.
pub struct Swatch {
    pub color: egui::Color32,
    pub selected: bool,
    pub tooltip: String,
}

impl Swatch {
    pub const SIZE: f32 = 30.0;

    pub fn new(color: egui::Color32, selected: bool) -> Self {
        Self {
            color,
            selected,
            tooltip: color::to_hex(color),
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(Self::SIZE, Self::SIZE);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0;
            ui.painter().circle_filled(rect.center(), radius, self.color);

            // Light swatches vanish on a light panel without a rim
            let rim = if self.selected {
                egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(120))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(190))
            };
            ui.painter().circle_stroke(rect.center(), radius - rim.width / 2.0, rim);
        }

        response.on_hover_text(self.tooltip)
    }
}
