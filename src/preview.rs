use image::imageops::FilterType;

use crate::{
    assets::decode::UploadedImage,
    foundation::{core::PixelSize, error::RainbowResult},
};

/// Side length of the square preview area, in CSS pixels.
pub const PREVIEW_BOX: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewDimensions {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl PreviewDimensions {
    /// Uniform scale that fits `size` inside the preview box. Small images scale up.
    pub fn fit(size: PixelSize) -> Self {
        let w = f64::from(size.width);
        let h = f64::from(size.height);
        let scale = (PREVIEW_BOX / w).min(PREVIEW_BOX / h);
        Self {
            scale,
            width: w * scale,
            height: h * scale,
        }
    }

    /// Integer raster size for the scaled copy (rounded, at least one pixel per side).
    pub fn pixel_size(&self) -> (u32, u32) {
        fn to_px(v: f64) -> u32 {
            (v.round() as u32).max(1)
        }
        (to_px(self.width), to_px(self.height))
    }
}

/// The single active preview: dimensions plus a nearest-neighbor scaled copy.
#[derive(Clone, Debug)]
pub struct Preview {
    pub dims: PreviewDimensions,
    pub image: image::RgbaImage,
}

#[tracing::instrument(skip(upload), fields(size = %upload.size))]
pub fn render_preview(upload: &UploadedImage) -> RainbowResult<Preview> {
    let dims = PreviewDimensions::fit(upload.size);
    let (w, h) = dims.pixel_size();
    let image = image::imageops::resize(upload.pixels.as_ref(), w, h, FilterType::Nearest);
    tracing::debug!(scale = dims.scale, w, h, "scaled preview");
    Ok(Preview { dims, image })
}

#[cfg(test)]
#[path = "../tests/unit/preview/preview.rs"]
mod tests;
