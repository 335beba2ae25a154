use paintcanvas_core::{Color, DrawingSettings};
use paintcanvas_designer::serialization::{decode, encode};
use paintcanvas_designer::{Point, Shape, ShapeGeometry, ShapeKind, ShapeStore, ShapeStyle};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ShapeKind> {
    prop_oneof![
        Just(ShapeKind::Square),
        Just(ShapeKind::Rectangle),
        Just(ShapeKind::Triangle),
        Just(ShapeKind::Ellipse),
    ]
}

fn color_strategy() -> impl Strategy<Value = Color> {
    any::<[u8; 4]>().prop_map(|[r, g, b, a]| Color::rgba(r, g, b, a))
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    (
        kind_strategy(),
        prop::collection::vec((-1.0e4f64..1.0e4, -1.0e4f64..1.0e4), 3),
        -10.0f64..10.0,
        color_strategy(),
        color_strategy(),
        1u32..=15,
    )
        .prop_map(|(kind, coords, rotation, stroke, fill, width)| {
            let points: Vec<Point> = coords
                .iter()
                .take(kind.arity())
                .map(|(x, y)| Point::new(*x, *y))
                .collect();
            let geometry = ShapeGeometry::from_points(kind, &points).unwrap();
            let style = ShapeStyle {
                stroke_color: stroke,
                fill_color: fill,
                stroke_width: width,
            };
            Shape::new(geometry, style).with_rotation(rotation)
        })
}

proptest! {
    #[test]
    fn prop_encode_decode_roundtrip(
        shapes in prop::collection::vec(shape_strategy(), 0..8),
        fill_enabled: bool,
        pen_width in 1u32..=15,
    ) {
        let mut store = ShapeStore::new();
        for shape in &shapes {
            store.append(shape.clone());
        }
        let settings = DrawingSettings {
            pen_width,
            fill_enabled,
            ..DrawingSettings::default()
        };

        let text = encode(&store, &settings).unwrap();
        let mut decoded_settings = DrawingSettings::default();
        let decoded = decode(&text, &mut decoded_settings);

        prop_assert_eq!(decoded, shapes);
        prop_assert_eq!(decoded_settings, settings);
    }
}

#[test]
fn test_selection_is_not_persisted() {
    let mut store = ShapeStore::new();
    let corners = [Point::new(0.0, 0.0), Point::new(2.0, 2.0)];
    let geometry = ShapeGeometry::from_points(ShapeKind::Square, &corners).unwrap();
    store.append(Shape::new(geometry, ShapeStyle::default()));
    store.select(0, false);

    let text = encode(&store, &DrawingSettings::default()).unwrap();
    let decoded = decode(&text, &mut DrawingSettings::default());
    assert!(!decoded[0].selected);
}

#[test]
fn test_malformed_record_yields_nothing() {
    let mut settings = DrawingSettings {
        pen_width: 9,
        ..DrawingSettings::default()
    };
    assert!(decode("", &mut settings).is_empty());
    assert!(decode("{not json", &mut settings).is_empty());
    assert!(decode("[1, 2, 3]", &mut settings).is_empty());
    assert_eq!(settings.pen_width, 9);
}

#[test]
fn test_missing_globals_keep_current_values() {
    let mut settings = DrawingSettings {
        pen_width: 9,
        pen_color: Color::BLUE,
        fill_enabled: true,
        ..DrawingSettings::default()
    };
    let shapes = decode(r##"{"penColor":"#ff112233","shapes":[]}"##, &mut settings);
    assert!(shapes.is_empty());
    assert_eq!(settings.pen_color, Color::rgb(0x11, 0x22, 0x33));
    assert_eq!(settings.pen_width, 9);
    assert!(settings.fill_enabled);
}

#[test]
fn test_invalid_global_values_ignored() {
    let mut settings = DrawingSettings::default();
    decode(
        r#"{"fill":"yes","penColor":"red","fillColor":7,"penWidth":0}"#,
        &mut settings,
    );
    assert_eq!(settings, DrawingSettings::default());
}

#[test]
fn test_tolerant_shape_decoding() {
    let text = r##"{"shapes":[
        {"type":2,"points":[[0,0],"bad",[1,2,3],[10,20]],"width":4,"pen":"#ffff0000"},
        "not an object",
        {"type":9,"points":[[0,0],[1,1]]},
        {"type":3,"points":[[0,0],[1,1]]},
        {"type":3,"points":[[0,0],[4,0],[0,4]],"rotation":1.5,"fill":"#80ffffff"}
    ]}"##;
    let shapes = decode(text, &mut DrawingSettings::default());

    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].kind(), ShapeKind::Rectangle);
    assert_eq!(
        shapes[0].points(),
        vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]
    );
    assert_eq!(shapes[0].stroke_width(), 4);
    assert_eq!(shapes[0].stroke_color(), Color::rgb(255, 0, 0));

    assert_eq!(shapes[1].kind(), ShapeKind::Triangle);
    assert_eq!(shapes[1].rotation(), 1.5);
    assert_eq!(shapes[1].fill_color(), Color::rgba(255, 255, 255, 128));
}

#[test]
fn test_empty_shapes_array() {
    let mut settings = DrawingSettings::default();
    let shapes = decode(r#"{"shapes":[],"fill":true}"#, &mut settings);
    assert!(shapes.is_empty());
    assert!(settings.fill_enabled);
}
