//! Canvas renderer
//! Renders shapes to an image buffer using tiny-skia for anti-aliased 2D rendering.
//!
//! Two entry points:
//! - [`render_view`]: backdrop, shapes, selection boxes and live previews
//! - [`render_export`]: white background and shapes only, for saving

use crate::canvas::{Canvas, PendingTriangle, Preview};
use crate::geometry::{self, Bounds};
use crate::model::{Point, Shape};
use crate::shape_store::ShapeStore;
use image::{Rgba, RgbaImage};
use paintcanvas_core::{Color, DocumentError, DrawingSettings};
use tiny_skia::{
    ColorU8, FillRule, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Rect,
    Stroke, StrokeDash, Transform,
};

fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(color));
    paint.anti_alias = true;
    paint
}

fn dashed_stroke() -> Stroke {
    Stroke {
        width: 1.0,
        dash: StrokeDash::new(vec![4.0, 2.0], 0.0),
        ..Default::default()
    }
}

fn selection_color() -> Color {
    Color::BLUE
}

fn rubber_band_fill() -> Color {
    Color::BLUE.with_alpha(30)
}

fn preview_fill() -> Color {
    Color::rgba(0, 255, 0, 30)
}

/// Convert a lyon path to a tiny-skia path.
fn to_skia_path(path: &lyon::path::Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => pb.move_to(at.x, at.y),
            lyon::path::Event::Line { to, .. } => pb.line_to(to.x, to.y),
            lyon::path::Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

fn bounds_path(bounds: &Bounds) -> Option<tiny_skia::Path> {
    let rect = Rect::from_ltrb(
        bounds.min_x as f32,
        bounds.min_y as f32,
        bounds.max_x as f32,
        bounds.max_y as f32,
    )?;
    Some(PathBuilder::from_rect(rect))
}

fn draw_shape(pixmap: &mut Pixmap, shape: &Shape, fill_enabled: bool) {
    let Some(path) = to_skia_path(&geometry::path_of(shape)) else {
        return;
    };

    if fill_enabled {
        pixmap.fill_path(
            &path,
            &paint_for(shape.fill_color()),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    let stroke = Stroke {
        width: shape.stroke_width() as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(
        &path,
        &paint_for(shape.stroke_color()),
        &stroke,
        Transform::identity(),
        None,
    );
}

fn draw_selection_box(pixmap: &mut Pixmap, shape: &Shape) {
    if let Some(path) = bounds_path(&geometry::bounds_of(shape)) {
        pixmap.stroke_path(
            &path,
            &paint_for(selection_color()),
            &dashed_stroke(),
            Transform::identity(),
            None,
        );
    }
}

fn draw_outlined(pixmap: &mut Pixmap, path: &tiny_skia::Path, outline: Color, fill: Color) {
    pixmap.fill_path(
        path,
        &paint_for(fill),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    pixmap.stroke_path(
        path,
        &paint_for(outline),
        &dashed_stroke(),
        Transform::identity(),
        None,
    );
}

fn draw_polyline(pixmap: &mut Pixmap, points: &[Point], color: Color) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(
            &path,
            &paint_for(color),
            &dashed_stroke(),
            Transform::identity(),
            None,
        );
    }
}

fn draw_preview(pixmap: &mut Pixmap, canvas: &Canvas, preview: &Preview) {
    match preview {
        Preview::RubberBand(rect) => {
            if let Some(path) = bounds_path(rect) {
                draw_outlined(pixmap, &path, Color::DARK_GRAY, rubber_band_fill());
            }
        }
        Preview::Box { anchor, cursor, .. } => {
            let path = canvas
                .box_shape(*anchor, *cursor)
                .and_then(|shape| to_skia_path(&geometry::path_of(&shape)));
            if let Some(path) = path {
                draw_outlined(pixmap, &path, Color::DARK_GREEN, preview_fill());
            }
        }
        Preview::Triangle { pending, cursor } => match *pending {
            PendingTriangle::One(a) => draw_polyline(pixmap, &[a, *cursor], Color::DARK_GREEN),
            PendingTriangle::Two(a, b) => {
                draw_polyline(pixmap, &[b, *cursor], Color::DARK_GREEN);
                draw_polyline(pixmap, &[a, b], Color::DARK_GREEN);
            }
        },
    }
}

fn backdrop_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let data = image
        .pixels()
        .flat_map(|&Rgba([r, g, b, a])| {
            let c = ColorU8::from_rgba(r, g, b, a).premultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    Pixmap::from_vec(data, size)
}

/// Composites the backdrop source-over onto the pixmap at the origin.
fn draw_image(pixmap: &mut Pixmap, image: &RgbaImage) {
    if let Some(src) = backdrop_pixmap(image) {
        pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}

/// Shapes only, on white, at the given size.
pub fn render_shapes(
    store: &ShapeStore,
    settings: &DrawingSettings,
    width: u32,
    height: u32,
) -> paintcanvas_core::Result<RgbaImage> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(DocumentError::InvalidDimensions { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    for shape in store.iter() {
        draw_shape(&mut pixmap, shape, settings.fill_enabled);
    }
    Ok(to_rgba_image(&pixmap))
}

/// Image saved with a document: shapes on white at the viewport size.
pub fn render_export(canvas: &Canvas) -> paintcanvas_core::Result<RgbaImage> {
    let (width, height) = canvas.viewport_size();
    render_shapes(&canvas.shape_store, canvas.settings(), width, height)
}

/// Render what the user sees: backdrop, shapes, selection boxes and the
/// live preview.
pub fn render_view(canvas: &Canvas) -> RgbaImage {
    let (width, height) = canvas.viewport_size();
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbaImage::new(width, height);
    };
    pixmap.fill(tiny_skia::Color::WHITE);
    draw_image(&mut pixmap, canvas.backdrop().image());

    let fill_enabled = canvas.settings().fill_enabled;
    for shape in canvas.shapes() {
        draw_shape(&mut pixmap, shape, fill_enabled);
        if shape.selected {
            draw_selection_box(&mut pixmap, shape);
        }
    }

    if let Some(preview) = canvas.preview() {
        draw_preview(&mut pixmap, canvas, &preview);
    }

    to_rgba_image(&pixmap)
}
