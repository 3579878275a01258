use crate::LogoMakerApp;
use crate::color::{BACKGROUND_SWATCHES, PALETTES};
use crate::components::Swatch;
use crate::element::ElementKind;

pub fn palette_panel(app: &mut LogoMakerApp, ctx: &egui::Context) {
    egui::SidePanel::right("palette_panel")
        .resizable(false)
        .exact_width(350.0)
        .show(ctx, |ui| {
            ui.strong("Color Palettes");
            egui::ScrollArea::vertical()
                .id_salt("palettes")
                .max_height(300.0)
                .show(ui, |ui| {
                    let current = app.drawing().color;
                    for palette in &PALETTES {
                        ui.label(egui::RichText::new(palette.name).size(12.0).strong());
                        ui.horizontal(|ui| {
                            for color in palette.colors {
                                if Swatch::new(color, color == current).show(ui).clicked() {
                                    app.set_color(color);
                                }
                            }
                        });
                    }
                });

            ui.separator();

            ui.strong("Background Colors");
            ui.horizontal(|ui| {
                let background = app.document().background();
                for color in BACKGROUND_SWATCHES {
                    let tooltip = format!("Background: {}", crate::color::to_hex(color));
                    let swatch = Swatch::new(color, color == background).with_tooltip(tooltip);
                    if swatch.show(ui).clicked() {
                        app.set_background(color);
                    }
                }
            });

            ui.separator();

            ui.strong("Elements");
            let mut to_delete = None;
            egui::ScrollArea::vertical()
                .id_salt("elements")
                .max_height(200.0)
                .show(ui, |ui| {
                    for element in app.document().elements() {
                        ui.horizontal(|ui| {
                            let icon = match element.kind() {
                                ElementKind::Text(_) => "T",
                                ElementKind::Shape(_) => "◼",
                            };
                            ui.label(icon);
                            ui.label(element.describe());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                                    to_delete = Some(element.sequence_id());
                                }
                            });
                        });
                    }
                });

            if let Some(index) = to_delete {
                app.delete_element(index);
            }
        });
}
