use egui::Color32;
use logo_maker::{Bounds, Document, DrawingContext, Position, Rasterizer, ShapeKind, Template};

fn applied(template: Template) -> (Document, DrawingContext) {
    let mut doc = Document::new();
    let mut ctx = DrawingContext::default();
    template.apply(&mut doc, &mut ctx);
    (doc, ctx)
}

#[test]
fn test_tech_company() {
    let (doc, ctx) = applied(Template::TechCompany);
    assert_eq!(doc.background(), Color32::from_rgb(0x1E, 0x29, 0x3B));
    assert_eq!(doc.elements().len(), 2);

    let shape = doc.elements().get(0).and_then(|e| e.as_shape()).unwrap();
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(shape.bounds, Bounds::new(50, 150, 300, 100));
    assert_eq!(shape.color, Color32::from_rgb(0x3B, 0x82, 0xF6));
    assert!(shape.filled);

    let text = doc.elements().get(1).and_then(|e| e.as_text()).unwrap();
    assert_eq!(text.text, "TECH CORP");
    assert_eq!(text.position, Position::new(120, 175));
    assert_eq!(text.color, Color32::WHITE);
    assert_eq!(text.font_size, 32);

    // The context keeps the last values the script set.
    assert_eq!(ctx.color, Color32::WHITE);
    assert_eq!(ctx.font_size(), 32);
}

#[test]
fn test_creative_studio() {
    let (doc, _) = applied(Template::CreativeStudio);
    assert_eq!(doc.background(), Color32::WHITE);

    let shape = doc.elements().get(0).and_then(|e| e.as_shape()).unwrap();
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.bounds, Bounds::new(100, 100, 200, 200));
    assert_eq!(shape.color, Color32::from_rgb(0xEC, 0x48, 0x99));

    let text = doc.elements().get(1).and_then(|e| e.as_text()).unwrap();
    assert_eq!(text.text, "CREATIVE");
    assert_eq!(text.position, Position::new(135, 185));
    assert_eq!(text.font_size, 28);
}

#[test]
fn test_minimalist_puts_text_first() {
    let (doc, ctx) = applied(Template::Minimalist);
    assert_eq!(doc.background(), Color32::from_rgb(0xF8, 0xFA, 0xFC));

    let text = doc.elements().get(0).and_then(|e| e.as_text()).unwrap();
    assert_eq!(text.text, "BRAND");
    assert_eq!(text.position, Position::new(140, 180));
    assert_eq!(text.color, Color32::from_rgb(0x0F, 0x17, 0x2A));
    assert_eq!(text.font_size, 36);

    let shape = doc.elements().get(1).and_then(|e| e.as_shape()).unwrap();
    assert_eq!(shape.bounds, Bounds::new(130, 220, 140, 4));
    assert_eq!(shape.color, Color32::from_rgb(0x3B, 0x82, 0xF6));

    assert_eq!(ctx.color, Color32::from_rgb(0x3B, 0x82, 0xF6));
    assert_eq!(ctx.font_size(), 36);
}

#[test]
fn test_template_replaces_existing_elements() {
    let mut doc = Document::new();
    let mut ctx = DrawingContext::default();
    for _ in 0..5 {
        doc.elements_mut().add_default_shape(&ctx, ShapeKind::Triangle);
    }

    Template::Minimalist.apply(&mut doc, &mut ctx);
    Template::TechCompany.apply(&mut doc, &mut ctx);

    assert_eq!(doc.elements().len(), 2);
    let ids: Vec<usize> = doc.elements().iter().map(|e| e.sequence_id()).collect();
    assert_eq!(ids, [0, 1]);
}

#[test]
fn test_templates_render() {
    let rasterizer = Rasterizer::with_font_dirs(Vec::new()).unwrap();
    for template in Template::ALL {
        let (doc, _) = applied(template);
        let raster = rasterizer.render_document(&doc).unwrap();
        let background = doc.background().to_srgba_unmultiplied();
        assert!(
            raster.pixels().any(|p| p.0 != background),
            "{template} rendered nothing"
        );
    }
}

#[test]
fn test_template_names() {
    let names: Vec<&str> = Template::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["Tech Company", "Creative Studio", "Minimalist"]);
    assert_eq!("creative studio".parse::<Template>(), Ok(Template::CreativeStudio));
    assert!("Retro".parse::<Template>().is_err());
}
