use std::fmt::Write as _;

use quick_xml::escape::{escape, partial_escape};

use crate::{
    animation::cycle::{CYCLE_SECONDS, RainbowCycle},
    assets::{color::GradientColors, decode::UploadedImage},
    foundation::core::{PixelSize, Rgb8},
};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

const ANIMATION_NAME: &str = "rainbowBackground";

/// Serialized SVG document: rainbow background under the uploaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedSvg {
    markup: String,
    size: PixelSize,
}

impl ComposedSvg {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Original (pre-preview-scale) image size; also the SVG viewport.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

/// Build the animated document for `image` cycling through `colors`.
#[tracing::instrument(skip_all, fields(size = %image.size))]
pub fn compose_rainbow(image: &UploadedImage, colors: &GradientColors) -> ComposedSvg {
    let cycle = RainbowCycle::new(colors);
    let animation = animation_decl();

    let mut markup = String::new();
    open_svg(&mut markup, image.size);
    let _ = write!(
        markup,
        r#"<rect width="100%" height="100%" style="{}"/>"#,
        escape(&animation)
    );
    markup.push_str("<style>");
    markup.push_str(&partial_escape(&keyframes_css(&cycle, &animation)));
    markup.push_str("</style>");
    push_image(&mut markup, image);
    markup.push_str("</svg>");

    tracing::debug!(len = markup.len(), "composed rainbow svg");
    ComposedSvg {
        markup,
        size: image.size,
    }
}

/// Background-only document with the animation frozen to `fill`.
pub fn background_markup(size: PixelSize, fill: Rgb8) -> String {
    let mut markup = String::new();
    open_svg(&mut markup, size);
    let _ = write!(
        markup,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        fill.to_hex()
    );
    markup.push_str("</svg>");
    markup
}

fn animation_decl() -> String {
    format!("animation: {ANIMATION_NAME} {CYCLE_SECONDS}s linear infinite;")
}

fn keyframes_css(cycle: &RainbowCycle, animation: &str) -> String {
    let mut css = String::new();
    let _ = writeln!(css);
    let _ = writeln!(css, "  rect {{");
    let _ = writeln!(css, "    {animation}");
    let _ = writeln!(css, "  }}");
    let _ = writeln!(css, "  @keyframes {ANIMATION_NAME} {{");
    for stop in cycle.stops() {
        let _ = writeln!(css, "    {} {{", stop.label);
        let _ = writeln!(css, "      fill: {};", stop.color.to_hex());
        let _ = writeln!(css, "    }}");
    }
    let _ = writeln!(css, "  }}");
    css
}

fn open_svg(out: &mut String, size: PixelSize) {
    let _ = write!(
        out,
        r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}" width="{}" height="{}">"#,
        size.width, size.height
    );
}

fn push_image(out: &mut String, image: &UploadedImage) {
    let _ = write!(
        out,
        r#"<image x="0" y="0" width="{}" height="{}" xlink:href="{}" style="image-rendering: pixelated;"/>"#,
        image.size.width,
        image.size.height,
        escape(&image.data_uri)
    );
}

#[cfg(test)]
#[path = "../../tests/unit/compose/svg.rs"]
mod tests;
