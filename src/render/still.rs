use anyhow::Context as _;

use crate::{
    animation::cycle::RainbowCycle,
    assets::{color::GradientColors, decode::UploadedImage},
    compose::svg::background_markup,
    foundation::{
        core::{PixelSize, Rgb8},
        error::{RainbowError, RainbowResult},
    },
};

const MAX_DIM: u32 = 16_384;

/// One moment of the rainbow animation: background fill at `t_sec` with the upload on top.
#[tracing::instrument(skip(image, colors), fields(size = %image.size))]
pub fn render_still(
    image: &UploadedImage,
    colors: &GradientColors,
    t_sec: f64,
) -> RainbowResult<image::RgbaImage> {
    let fill = RainbowCycle::new(colors).sample(t_sec);
    let mut frame = rasterize_background(image.size, fill)?;
    image::imageops::overlay(&mut frame, image.pixels.as_ref(), 0, 0);
    Ok(frame)
}

pub fn rasterize_background(size: PixelSize, fill: Rgb8) -> RainbowResult<image::RgbaImage> {
    if size.width > MAX_DIM || size.height > MAX_DIM {
        return Err(RainbowError::validation(format!(
            "still frame too large: {size} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let markup = background_markup(size, fill);
    let tree = usvg::Tree::from_str(&markup, &usvg::Options::default())
        .context("parse background svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
        .ok_or_else(|| RainbowError::validation("failed to allocate still pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut straight = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    image::RgbaImage::from_raw(size.width, size.height, straight)
        .ok_or_else(|| RainbowError::validation("still pixmap size mismatch"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/still.rs"]
mod tests;
