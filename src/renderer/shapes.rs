use tiny_skia::{FillRule, Mask, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::element::{Bounds, OUTLINE_WIDTH, ShapeElement, ShapeKind};

/// Pixel edges of an inclusive box, `[x, x + width + 1)` on each axis.
///
/// Computed in `i64` so boxes near the `i32` limits cannot overflow.
#[derive(Debug, Clone, Copy)]
struct Edges {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Edges {
    fn of(bounds: &Bounds) -> Self {
        let (left, top) = (i64::from(bounds.x), i64::from(bounds.y));
        Self {
            left,
            top,
            right: left + i64::from(bounds.width) + 1,
            bottom: top + i64::from(bounds.height) + 1,
        }
    }

    /// Whether any part of the box, in either orientation, lands on the pixmap.
    fn touches(&self, pixmap: &Pixmap) -> bool {
        let (x0, x1) = (self.left.min(self.right - 1), self.left.max(self.right - 1));
        let (y0, y1) = (self.top.min(self.bottom - 1), self.top.max(self.bottom - 1));
        x1 >= 0 && y1 >= 0 && x0 < i64::from(pixmap.width()) && y0 < i64::from(pixmap.height())
    }
}

/// Draws a shape into the pixmap. Boxes are inclusive of their far corner.
pub(crate) fn draw_shape(pixmap: &mut Pixmap, shape: &ShapeElement, paint: &Paint<'_>) {
    let edges = Edges::of(&shape.bounds);
    if !edges.touches(pixmap) {
        return;
    }

    match shape.kind {
        ShapeKind::Rectangle => draw_rectangle(pixmap, edges, shape.filled, paint),
        ShapeKind::Circle => draw_ellipse(pixmap, edges, shape, paint),
        ShapeKind::Triangle => draw_triangle(pixmap, shape, paint),
    }
}

fn draw_rectangle(pixmap: &mut Pixmap, edges: Edges, filled: bool, paint: &Paint<'_>) {
    let Edges {
        left,
        top,
        right,
        bottom,
    } = edges;

    if filled {
        fill_box(pixmap, left, top, right, bottom, paint);
        return;
    }

    // Bands never leave the box, even when it is thinner than two outlines.
    let w = i64::from(OUTLINE_WIDTH);
    fill_box(pixmap, left, top, right, (top + w).min(bottom), paint);
    fill_box(pixmap, left, (bottom - w).max(top), right, bottom, paint);
    fill_box(pixmap, left, top, (left + w).min(right), bottom, paint);
    fill_box(pixmap, (right - w).max(left), top, right, bottom, paint);
}

fn draw_ellipse(pixmap: &mut Pixmap, edges: Edges, shape: &ShapeElement, paint: &Paint<'_>) {
    let (left, top) = (edges.left as f32, edges.top as f32);
    let (right, bottom) = (edges.right as f32, edges.bottom as f32);

    if shape.filled {
        let Some(oval) = Rect::from_ltrb(left, top, right, bottom).and_then(PathBuilder::from_oval)
        else {
            log::debug!("Skipping degenerate ellipse {:?}", shape.bounds);
            return;
        };
        pixmap.fill_path(&oval, paint, FillRule::Winding, Transform::identity(), None);
        return;
    }

    // Center the stroke half a stroke inside the box so it stays within it.
    let inset = OUTLINE_WIDTH as f32 / 2.0;
    let Some(oval) = Rect::from_ltrb(left + inset, top + inset, right - inset, bottom - inset)
        .and_then(PathBuilder::from_oval)
    else {
        log::debug!("Skipping degenerate ellipse outline {:?}", shape.bounds);
        return;
    };
    pixmap.stroke_path(&oval, paint, &outline_stroke(1.0), Transform::identity(), None);
}

fn draw_triangle(pixmap: &mut Pixmap, shape: &ShapeElement, paint: &Paint<'_>) {
    let [apex, left, right] = shape.triangle_vertices();

    // Vertices sit on pixel centers.
    let mut pb = PathBuilder::new();
    pb.move_to(apex.x as f32 + 0.5, apex.y as f32 + 0.5);
    pb.line_to(left.x as f32 + 0.5, left.y as f32 + 0.5);
    pb.line_to(right.x as f32 + 0.5, right.y as f32 + 0.5);
    pb.close();
    let Some(path) = pb.finish() else {
        log::debug!("Skipping degenerate triangle {:?}", shape.bounds);
        return;
    };

    if shape.filled {
        pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
    } else {
        stroke_inside(pixmap, &path, paint);
    }
}

/// Strokes `path` clipped to its own interior, so the outline keeps its
/// full width inside the shape and corner joins cannot poke out.
fn stroke_inside(pixmap: &mut Pixmap, path: &Path, paint: &Paint<'_>) {
    let Some(mut interior) = Mask::new(pixmap.width(), pixmap.height()) else {
        log::debug!("Skipping outline, no clip mask for {:?}", path.bounds());
        return;
    };
    interior.fill_path(path, FillRule::Winding, false, Transform::identity());
    pixmap.stroke_path(
        path,
        paint,
        &outline_stroke(2.0),
        Transform::identity(),
        Some(&interior),
    );
}

/// Fills `[left, right) x [top, bottom)`, clipped to the pixmap.
fn fill_box(pixmap: &mut Pixmap, left: i64, top: i64, right: i64, bottom: i64, paint: &Paint<'_>) {
    let (width, height) = (i64::from(pixmap.width()), i64::from(pixmap.height()));
    let (left, right) = (left.max(0), right.min(width));
    let (top, bottom) = (top.max(0), bottom.min(height));
    if right <= left || bottom <= top {
        return;
    }
    if let Some(rect) = Rect::from_ltrb(left as f32, top as f32, right as f32, bottom as f32) {
        pixmap.fill_rect(rect, paint, Transform::identity(), None);
    }
}

/// An outline stroke `factor` times the outline width.
fn outline_stroke(factor: f32) -> Stroke {
    Stroke {
        width: OUTLINE_WIDTH as f32 * factor,
        ..Stroke::default()
    }
}
