use image::Rgba;
use paintcanvas_core::{Color, DrawingSettings};
use paintcanvas_designer::document::{encode_document_png, read_document};
use paintcanvas_designer::{
    Canvas, EditorState, Modifiers, Point, PointerButton, PointerButtons, ShapeKind, Tool,
};
use tempfile::TempDir;

fn draw_rect(canvas: &mut Canvas, from: Point, to: Point) {
    canvas.set_tool(Tool::Rectangle);
    canvas.pointer_press(from, PointerButton::Left, Modifiers::NONE);
    canvas.pointer_move(to, PointerButtons::only(PointerButton::Left));
    canvas.pointer_release(to, PointerButton::Left, Modifiers::NONE);
}

fn editor_in(dir: &TempDir) -> EditorState {
    EditorState::new(Canvas::with_size(120, 90), dir.path().join("default.png"))
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drawing.png");

    let mut editor = editor_in(&dir);
    editor.canvas.set_pen_color(Color::rgb(0, 128, 0));
    draw_rect(&mut editor.canvas, Point::new(10.0, 10.0), Point::new(50.0, 40.0));
    editor.canvas.set_fill_enabled(true);
    editor.save_as(&path).unwrap();
    assert_eq!(editor.current_file_path.as_deref(), Some(path.as_path()));
    assert_eq!(editor.display_name(), "drawing.png");

    let doc = read_document(&path).unwrap();
    assert_eq!(doc.raster.dimensions(), (120, 90));
    assert!(doc.record.is_some());

    let mut restored = editor_in(&dir);
    assert_eq!(restored.load_from_file(&path).unwrap(), 1);
    let shape = restored.canvas.shapes().next().unwrap();
    assert_eq!(shape.kind(), ShapeKind::Rectangle);
    assert_eq!(shape.stroke_color(), Color::rgb(0, 128, 0));
    assert!(restored.canvas.settings().fill_enabled);
    assert_eq!(restored.canvas.settings().pen_color, Color::rgb(0, 128, 0));
}

#[test]
fn test_untitled_save_uses_default_path() {
    let dir = TempDir::new().unwrap();
    let mut editor = editor_in(&dir);
    assert_eq!(editor.display_name(), "Untitled");

    let saved = editor.save().unwrap();
    assert_eq!(saved, dir.path().join("default.png"));
    assert!(saved.exists());
}

#[test]
fn test_failed_load_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").unwrap();

    let mut editor = editor_in(&dir);
    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    editor.canvas.set_pen_width(11);

    assert!(editor.load_from_file(&garbage).is_err());
    assert!(editor.load_from_file(dir.path().join("missing.png")).is_err());
    assert_eq!(editor.canvas.shape_count(), 1);
    assert_eq!(editor.canvas.settings().pen_width, 11);
    assert!(editor.current_file_path.is_none());
}

#[test]
fn test_plain_image_becomes_backdrop() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    let photo = image::RgbaImage::from_pixel(30, 20, Rgba([0, 0, 255, 255]));
    photo.save(&path).unwrap();

    let mut editor = editor_in(&dir);
    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    editor.canvas.set_pen_width(11);

    assert_eq!(editor.load_from_file(&path).unwrap(), 0);
    assert_eq!(editor.canvas.shape_count(), 0);
    assert_eq!(*editor.canvas.settings(), DrawingSettings::default());
    assert_eq!(
        *editor.canvas.backdrop().image().get_pixel(5, 5),
        Rgba([0, 0, 255, 255])
    );
    assert!(editor.canvas.backdrop().width() >= 120);
}

#[test]
fn test_unparsable_record_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    let image = image::RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    std::fs::write(&path, encode_document_png(&image, "{oops").unwrap()).unwrap();

    let mut editor = editor_in(&dir);
    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert_eq!(editor.load_from_file(&path).unwrap(), 0);
    assert_eq!(editor.canvas.shape_count(), 0);
}

#[test]
fn test_new_document_resets_everything() {
    let dir = TempDir::new().unwrap();
    let mut editor = editor_in(&dir);
    let defaults = DrawingSettings {
        pen_width: 5,
        ..DrawingSettings::default()
    };
    editor.set_default_settings(defaults);

    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    editor.canvas.set_pen_width(12);
    editor.save_as(dir.path().join("a.png")).unwrap();

    editor.new_document();
    assert_eq!(editor.canvas.shape_count(), 0);
    assert_eq!(*editor.canvas.settings(), defaults);
    assert!(editor.current_file_path.is_none());
}

#[test]
fn test_default_document_autoload() {
    let dir = TempDir::new().unwrap();
    let mut editor = editor_in(&dir);
    assert!(!editor.load_default_document().unwrap());

    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    editor.close().unwrap();

    let mut next = editor_in(&dir);
    assert!(next.load_default_document().unwrap());
    assert_eq!(next.canvas.shape_count(), 1);
}

#[test]
fn test_close_without_autosave_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut editor = editor_in(&dir);
    editor.set_autosave_on_close(false);
    editor.close().unwrap();
    assert!(!dir.path().join("default.png").exists());
}

#[test]
fn test_failed_save_keeps_document_state() {
    let dir = TempDir::new().unwrap();
    let mut editor = editor_in(&dir);
    draw_rect(&mut editor.canvas, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    editor.canvas.set_pen_width(9);
    let settings = *editor.canvas.settings();

    assert!(editor.save_as(dir.path()).is_err());
    assert_eq!(editor.canvas.shape_count(), 1);
    assert_eq!(*editor.canvas.settings(), settings);
    assert!(editor.current_file_path.is_none());

    let saved = dir.path().join("kept.png");
    editor.save_as(&saved).unwrap();
    assert!(editor.save_as(dir.path()).is_err());
    assert_eq!(editor.current_file_path.as_deref(), Some(saved.as_path()));
    assert_eq!(editor.canvas.shape_count(), 1);
}
