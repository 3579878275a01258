use crate::LogoMakerApp;

/// Edge length of the preview in points.
const PREVIEW_SIZE: f32 = 400.0;

pub fn central_panel(app: &mut LogoMakerApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Canvas");

        egui::Frame::group(ui.style())
            .inner_margin(10.0)
            .rounding(10.0)
            .show(ui, |ui| match app.preview_texture(ctx) {
                Ok(texture) => {
                    let sized = egui::load::SizedTexture::new(texture.id(), [PREVIEW_SIZE, PREVIEW_SIZE]);
                    ui.add(egui::Image::new(sized).rounding(5.0));
                }
                Err(err) => {
                    ui.allocate_ui(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE), |ui| {
                        ui.colored_label(egui::Color32::RED, format!("Preview unavailable: {err}"));
                    });
                }
            });

        ui.horizontal(|ui| {
            let clear = egui::Button::new(egui::RichText::new("Clear All").color(egui::Color32::RED));
            if ui.add(clear).clicked() {
                app.clear();
            }
            let save = egui::Button::new(egui::RichText::new("Save Logo").color(egui::Color32::DARK_GREEN));
            if ui.add(save).clicked() {
                // Failures land in the notice window
                app.save_logo().ok();
            }
        });
    });
}
