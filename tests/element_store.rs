use egui::Color32;
use logo_maker::element::{DEFAULT_SHAPE_BOUNDS, DEFAULT_TEXT_POSITION};
use logo_maker::{Bounds, DrawingContext, ElementStore, Position, ShapeKind};

fn store_with_texts(texts: &[&str]) -> ElementStore {
    let ctx = DrawingContext::default();
    let mut store = ElementStore::new();
    for (i, text) in texts.iter().enumerate() {
        store.add_text(&ctx, *text, Position::new(i as i32 * 10, 0));
    }
    store
}

fn texts(store: &ElementStore) -> Vec<String> {
    store
        .iter()
        .map(|e| e.as_text().map(|t| t.text.clone()).unwrap_or_default())
        .collect()
}

#[test]
fn test_add_text_uses_context_snapshot() {
    let mut ctx = DrawingContext::default()
        .with_color(Color32::from_rgb(0xDC, 0x26, 0x26))
        .with_font_size(40);
    ctx.font_family = "DejaVu Sans".to_owned();

    let mut store = ElementStore::new();
    let element = store.add_text(&ctx, "Hello", Position::new(5, 6)).clone();
    assert_eq!(element.sequence_id(), 0);

    // Later changes to the context do not reach existing elements.
    ctx.color = Color32::BLACK;
    ctx.set_font_size(12);
    ctx.font_family = "Other".to_owned();

    let text = store.get(0).and_then(|e| e.as_text()).unwrap();
    assert_eq!(text.text, "Hello");
    assert_eq!(text.position, Position::new(5, 6));
    assert_eq!(text.color, Color32::from_rgb(0xDC, 0x26, 0x26));
    assert_eq!(text.font_size, 40);
    assert_eq!(text.font_family, "DejaVu Sans");
    assert_eq!(store.get(0), Some(&element));
}

#[test]
fn test_defaults() {
    let ctx = DrawingContext::default();
    let mut store = ElementStore::new();
    store.add_default_text(&ctx, "");
    store.add_default_shape(&ctx, ShapeKind::Circle);

    let text = store.get(0).and_then(|e| e.as_text()).unwrap();
    assert_eq!(text.position, DEFAULT_TEXT_POSITION);
    assert_eq!(text.position, Position::new(50, 50));
    assert!(text.text.is_empty());

    let shape = store.get(1).and_then(|e| e.as_shape()).unwrap();
    assert_eq!(shape.bounds, DEFAULT_SHAPE_BOUNDS);
    assert_eq!(shape.bounds, Bounds::new(100, 100, 80, 80));
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.color, ctx.color);
    assert!(shape.filled);
}

#[test]
fn test_degenerate_geometry_is_accepted() {
    let ctx = DrawingContext::default();
    let mut store = ElementStore::new();
    let element = store.add_shape(&ctx, ShapeKind::Rectangle, Bounds::new(10, 10, -5, 0));
    assert_eq!(element.as_shape().unwrap().bounds, Bounds::new(10, 10, -5, 0));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_renumbers() {
    let mut store = store_with_texts(&["a", "b", "c", "d"]);

    let removed = store.delete(1).unwrap();
    assert_eq!(removed.as_text().unwrap().text, "b");

    assert_eq!(store.len(), 3);
    assert_eq!(texts(&store), ["a", "c", "d"]);
    for (index, element) in store.iter().enumerate() {
        assert_eq!(element.sequence_id(), index);
    }
}

#[test]
fn test_delete_first_and_last() {
    let mut store = store_with_texts(&["a", "b", "c"]);
    store.delete(0);
    store.delete(1);
    assert_eq!(texts(&store), ["b"]);
    assert_eq!(store.get(0).unwrap().sequence_id(), 0);
}

#[test]
fn test_delete_out_of_range_is_ignored() {
    let mut store = store_with_texts(&["a", "b"]);
    let before = store.clone();

    assert!(store.delete(2).is_none());
    assert!(store.delete(usize::MAX).is_none());
    assert_eq!(store, before);

    let mut empty = ElementStore::new();
    assert!(empty.delete(0).is_none());
    assert!(empty.is_empty());
}

#[test]
fn test_ids_stay_dense_after_mixed_operations() {
    let ctx = DrawingContext::default();
    let mut store = store_with_texts(&["a", "b", "c"]);
    store.delete(0);
    store.add_default_shape(&ctx, ShapeKind::Triangle);
    store.delete(1);
    store.add_default_text(&ctx, "e");

    let ids: Vec<usize> = store.iter().map(|e| e.sequence_id()).collect();
    assert_eq!(ids, [0, 1, 2]);
    assert_eq!(store.get(1).unwrap().describe(), "Shape: triangle");
}

#[test]
fn test_clear() {
    let mut store = store_with_texts(&["a", "b"]);
    store.clear();
    assert!(store.is_empty());
    store.clear();
    assert_eq!(store.len(), 0);
}
