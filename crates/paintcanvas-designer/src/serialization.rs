//! Text record of a canvas: the shape list plus the global drawing
//! settings, as compact JSON.
//!
//! ```json
//! {"fill":false,"fillColor":"#ffa0a0a4","penColor":"#ff000000","penWidth":3,
//!  "shapes":[{"fill":"#ffa0a0a4","pen":"#ff000000","points":[[10.0,10.0],[50.0,40.0]],
//!             "rotation":0.0,"type":2,"width":3}]}
//! ```
//!
//! Decoding never fails. Unusable parts of the record are skipped and the
//! rest is kept.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{Point, Shape, ShapeGeometry, ShapeKind, ShapeStyle};
use crate::shape_store::ShapeStore;
use paintcanvas_core::{Color, DocumentError, DrawingSettings, MIN_PEN_WIDTH};

/// Serialized form of a single shape.
#[derive(Debug, Clone, Serialize)]
pub struct ShapeRecord {
    pub fill: String,
    pub pen: String,
    pub points: Vec<[f64; 2]>,
    pub rotation: f64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub width: u32,
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        Self {
            fill: shape.fill_color().to_hex_argb(),
            pen: shape.stroke_color().to_hex_argb(),
            points: shape.points().iter().map(|p| [p.x, p.y]).collect(),
            rotation: shape.rotation(),
            kind: shape.kind().tag(),
            width: shape.stroke_width(),
        }
    }
}

/// Serialized form of the whole canvas.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasRecord {
    pub fill: bool,
    pub fill_color: String,
    pub pen_color: String,
    pub pen_width: u32,
    pub shapes: Vec<ShapeRecord>,
}

impl CanvasRecord {
    pub fn new(store: &ShapeStore, settings: &DrawingSettings) -> Self {
        Self {
            fill: settings.fill_enabled,
            fill_color: settings.fill_color.to_hex_argb(),
            pen_color: settings.pen_color.to_hex_argb(),
            pen_width: settings.pen_width,
            shapes: store.iter().map(ShapeRecord::from).collect(),
        }
    }
}

/// Encodes the store and settings as compact JSON.
pub fn encode(store: &ShapeStore, settings: &DrawingSettings) -> paintcanvas_core::Result<String> {
    let record = CanvasRecord::new(store, settings);
    let text = serde_json::to_string(&record).map_err(DocumentError::from)?;
    Ok(text)
}

/// Decodes a record into shapes in z-order. Global settings present in the
/// record overwrite `settings`; absent or malformed ones leave it alone.
/// Malformed records yield no shapes.
pub fn decode(text: &str, settings: &mut DrawingSettings) -> Vec<Shape> {
    let root: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Shape record is not valid JSON: {}", e);
            return Vec::new();
        }
    };
    let Some(root) = root.as_object() else {
        tracing::warn!("Shape record is not a JSON object");
        return Vec::new();
    };

    apply_settings(root, settings);

    let Some(entries) = root.get("shapes").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let shape = decode_shape(entry);
            if shape.is_none() {
                tracing::warn!("Skipping unusable shape record #{}", i);
            }
            shape
        })
        .collect()
}

fn color_field(obj: &Map<String, Value>, key: &str) -> Option<Color> {
    obj.get(key)
        .and_then(Value::as_str)
        .and_then(|text| text.parse().ok())
}

fn width_field(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|w| *w >= MIN_PEN_WIDTH as f64)
        .map(|w| w.round().min(u32::MAX as f64) as u32)
}

fn apply_settings(root: &Map<String, Value>, settings: &mut DrawingSettings) {
    if let Some(fill) = root.get("fill").and_then(Value::as_bool) {
        settings.fill_enabled = fill;
    }
    if let Some(color) = color_field(root, "penColor") {
        settings.pen_color = color;
    }
    if let Some(color) = color_field(root, "fillColor") {
        settings.fill_color = color;
    }
    if let Some(width) = width_field(root, "penWidth") {
        settings.set_pen_width(width);
    }
}

fn decode_point(value: &Value) -> Option<Point> {
    match value.as_array()?.as_slice() {
        [x, y] => Some(Point::new(x.as_f64()?, y.as_f64()?)),
        _ => None,
    }
}

fn decode_shape(value: &Value) -> Option<Shape> {
    let obj = value.as_object()?;
    let tag = obj.get("type").and_then(Value::as_f64)?;
    let kind = ShapeKind::from_tag(tag as i64)?;

    let points: Vec<Point> = obj
        .get("points")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(decode_point).collect())
        .unwrap_or_default();
    let geometry = ShapeGeometry::from_points(kind, &points)?;

    let style = ShapeStyle {
        stroke_color: color_field(obj, "pen").unwrap_or(Color::BLACK),
        fill_color: color_field(obj, "fill").unwrap_or(Color::GRAY),
        stroke_width: width_field(obj, "width").unwrap_or(MIN_PEN_WIDTH),
    };
    let rotation = obj.get("rotation").and_then(Value::as_f64).unwrap_or(0.0);

    Some(Shape::new(geometry, style).with_rotation(rotation))
}
