//! Raster backdrop behind the shapes.
//!
//! The backdrop only ever grows. When the viewport outgrows it, both axes
//! become `max(viewport + margin, current)`, the new area is white and the
//! old pixels stay at the origin.

use image::{imageops, Rgba, RgbaImage};

/// Extra pixels added past the viewport when the backdrop grows.
pub const DEFAULT_GROWTH_MARGIN: u32 = 128;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Clone)]
pub struct Backdrop {
    image: RgbaImage,
    growth_margin: u32,
}

impl Backdrop {
    /// White backdrop of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, WHITE),
            growth_margin: DEFAULT_GROWTH_MARGIN,
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image,
            growth_margin: DEFAULT_GROWTH_MARGIN,
        }
    }

    pub fn set_growth_margin(&mut self, margin: u32) {
        self.growth_margin = margin;
    }

    pub fn growth_margin(&self) -> u32 {
        self.growth_margin
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Swaps in a new raster, keeping the growth margin.
    pub fn replace(&mut self, image: RgbaImage) {
        self.image = image;
    }

    /// Grows to cover a `width` x `height` viewport. Returns whether the
    /// backdrop changed.
    pub fn grow_to(&mut self, width: u32, height: u32) -> bool {
        if width <= self.width() && height <= self.height() {
            return false;
        }

        let new_width = width.saturating_add(self.growth_margin).max(self.width());
        let new_height = height.saturating_add(self.growth_margin).max(self.height());
        let mut grown = RgbaImage::from_pixel(new_width, new_height, WHITE);
        imageops::replace(&mut grown, &self.image, 0, 0);
        self.image = grown;
        true
    }
}
