use crate::LogoMakerApp;
use crate::components::Swatch;
use crate::drawing_context::FONT_SIZE_RANGE;
use crate::element::ShapeKind;
use crate::template::Template;

pub fn tools_panel(app: &mut LogoMakerApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .exact_width(300.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Logo Maker");
                ui.separator();

                // Text
                ui.strong("Add Text");
                ui.add(
                    egui::TextEdit::singleline(app.text_input_mut())
                        .hint_text("Enter text")
                        .desired_width(200.0),
                );
                if ui.add_sized([200.0, 24.0], egui::Button::new("Add Text")).clicked() {
                    app.add_text();
                }

                let mut font_size = app.drawing().font_size();
                ui.label(format!("Font Size: {}px", font_size));
                if ui.add(egui::Slider::new(&mut font_size, FONT_SIZE_RANGE)).changed() {
                    app.set_font_size(font_size);
                }

                ui.horizontal(|ui| {
                    ui.label("Font:");
                    ui.add(egui::TextEdit::singleline(app.font_family_mut()).desired_width(140.0));
                });

                ui.separator();

                // Shapes
                ui.strong("Add Shapes");
                ui.horizontal(|ui| {
                    for kind in [ShapeKind::Rectangle, ShapeKind::Circle] {
                        if ui.button(kind.label()).clicked() {
                            app.add_shape(kind);
                        }
                    }
                });
                let triangle = ShapeKind::Triangle;
                if ui.add_sized([200.0, 24.0], egui::Button::new(triangle.label())).clicked() {
                    app.add_shape(triangle);
                }
                ui.checkbox(app.outline_only_mut(), "Outline only");

                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Current Color: ");
                    let current = app.drawing().color;
                    Swatch::new(current, false).show(ui);
                });

                // Templates
                ui.strong("Templates");
                for template in Template::ALL {
                    if ui.add_sized([200.0, 24.0], egui::Button::new(template.name())).clicked() {
                        log::info!("Template selected from UI: {}", template);
                        app.apply_template(template);
                    }
                }
            });
        });
}
