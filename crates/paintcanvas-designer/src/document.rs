//! PNG documents: a rendered raster with the shape record embedded in a
//! text chunk under the `shapes` keyword.

use std::io::Cursor;
use std::path::Path;

use image::RgbaImage;
use paintcanvas_core::DocumentError;

/// Text-chunk keyword holding the shape record.
pub const SHAPES_KEY: &str = "shapes";

/// A decoded document.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub raster: RgbaImage,
    /// The shape record, when the image carries one.
    pub record: Option<String>,
}

/// Encode `image` as PNG with `record` stored under [`SHAPES_KEY`].
pub fn encode_document_png(image: &RgbaImage, record: &str) -> paintcanvas_core::Result<Vec<u8>> {
    let encode_err = |e: png::EncodingError| DocumentError::ImageEncode(e.to_string());

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .add_text_chunk(SHAPES_KEY.to_string(), record.to_string())
            .map_err(encode_err)?;

        let mut writer = encoder.write_header().map_err(encode_err)?;
        writer.write_image_data(image.as_raw()).map_err(encode_err)?;
        writer.finish().map_err(encode_err)?;
    }

    Ok(png_data)
}

/// Decode an image and its shape record. The image may be any format the
/// `image` crate reads; only PNG files can carry a record.
pub fn decode_document_png(bytes: &[u8]) -> paintcanvas_core::Result<LoadedDocument> {
    let raster = image::load_from_memory(bytes)
        .map_err(|e| DocumentError::ImageDecode(e.to_string()))?
        .to_rgba8();

    Ok(LoadedDocument {
        raster,
        record: read_shape_record(bytes),
    })
}

fn read_shape_record(bytes: &[u8]) -> Option<String> {
    let reader = png::Decoder::new(Cursor::new(bytes)).read_info().ok()?;
    let info = reader.info();

    info.uncompressed_latin1_text
        .iter()
        .find(|chunk| chunk.keyword == SHAPES_KEY)
        .map(|chunk| chunk.text.clone())
        .or_else(|| {
            info.compressed_latin1_text
                .iter()
                .find(|chunk| chunk.keyword == SHAPES_KEY)
                .and_then(|chunk| chunk.get_text().ok())
        })
        .or_else(|| {
            info.utf8_text
                .iter()
                .find(|chunk| chunk.keyword == SHAPES_KEY)
                .and_then(|chunk| chunk.get_text().ok())
        })
}

pub fn read_document(path: &Path) -> paintcanvas_core::Result<LoadedDocument> {
    let bytes = std::fs::read(path)?;
    decode_document_png(&bytes)
}

pub fn write_document(
    path: &Path,
    image: &RgbaImage,
    record: &str,
) -> paintcanvas_core::Result<()> {
    let bytes = encode_document_png(image, record)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
