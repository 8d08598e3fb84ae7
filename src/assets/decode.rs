use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::foundation::{
    core::PixelSize,
    error::{RainbowError, RainbowResult},
};

const FALLBACK_MIME: &str = "application/octet-stream";

/// A decoded upload. Immutable; a new file replaces it wholesale.
#[derive(Clone, Debug)]
pub struct UploadedImage {
    /// `data:<mime>;base64,...` of the original file bytes.
    pub data_uri: String,
    pub size: PixelSize,
    /// Straight-alpha RGBA8 pixels at natural size.
    pub pixels: Arc<image::RgbaImage>,
}

impl UploadedImage {
    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }
}

#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_upload(bytes: &[u8]) -> RainbowResult<UploadedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| RainbowError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let size = PixelSize::new(width, height)?;

    let mime = image::guess_format(bytes)
        .map(|f| f.to_mime_type())
        .unwrap_or(FALLBACK_MIME);

    tracing::debug!(%size, mime, "decoded upload");

    Ok(UploadedImage {
        data_uri: data_uri(mime, bytes),
        size,
        pixels: Arc::new(rgba),
    })
}

pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
