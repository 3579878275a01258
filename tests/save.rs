use logo_maker::file_handler::{save_png, save_timestamped};
use logo_maker::{Document, DrawingContext, LogoError, Rasterizer, Template};
use std::path::PathBuf;

fn temp_root() -> PathBuf {
    std::env::temp_dir().join(format!("logo_maker_save_{}", uuid::Uuid::new_v4()))
}

fn template_raster() -> logo_maker::Raster {
    let mut doc = Document::new();
    Template::TechCompany.apply(&mut doc, &mut DrawingContext::default());
    Rasterizer::with_font_dirs(Vec::new())
        .unwrap()
        .render_document(&doc)
        .unwrap()
}

#[test]
fn test_save_creates_missing_directory() {
    let root = temp_root();
    let dir = root.join("nested").join("logos");
    assert!(!dir.exists());

    let raster = template_raster();
    let path = save_png(&raster, &dir, "logo_test.png").unwrap();

    assert_eq!(path, dir.join("logo_test.png"));
    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (400, 400));
    assert_eq!(decoded.to_rgba8(), raster);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_save_into_existing_directory() {
    let root = temp_root();
    std::fs::create_dir_all(&root).unwrap();

    let path = save_timestamped(&template_raster(), &root).unwrap();
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("logo_"));
    assert!(name.ends_with(".png"));
    // logo_ + YYYYMMDD_HHMMSS + .png
    assert_eq!(name.len(), "logo_".len() + 15 + ".png".len());

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_save_surfaces_io_errors() {
    let root = temp_root();
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("not_a_dir");
    std::fs::write(&blocker, b"").unwrap();

    let err = save_png(&template_raster(), &blocker, "logo.png").unwrap_err();
    assert!(matches!(err, LogoError::Io { .. }), "unexpected error: {err}");

    std::fs::remove_dir_all(&root).unwrap();
}
