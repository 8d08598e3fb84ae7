use std::sync::Arc;

use super::*;

fn upload_with(img: image::RgbaImage) -> UploadedImage {
    let (w, h) = img.dimensions();
    UploadedImage {
        data_uri: String::new(),
        size: PixelSize::new(w, h).unwrap(),
        pixels: Arc::new(img),
    }
}

#[test]
fn background_is_solid_fill() {
    let size = PixelSize::new(4, 3).unwrap();
    let bg = rasterize_background(size, Rgb8::new(0, 0, 255)).unwrap();
    assert_eq!(bg.dimensions(), (4, 3));
    for px in bg.pixels() {
        assert_eq!(px.0, [0, 0, 255, 255]);
    }
}

#[test]
fn transparent_pixels_show_the_cycle_color() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(1, 0, image::Rgba([9, 9, 9, 255]));
    let upload = upload_with(img);
    let colors = GradientColors::default();

    let frame = render_still(&upload, &colors, 0.0).unwrap();
    assert_eq!(frame.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(frame.get_pixel(1, 0).0, [9, 9, 9, 255]);

    let cycle = RainbowCycle::new(&colors);
    let later = render_still(&upload, &colors, 2.0).unwrap();
    assert_eq!(later.get_pixel(0, 0).0, cycle.sample(2.0).to_rgba());
}

#[test]
fn oversized_frames_are_rejected() {
    let size = PixelSize::new(MAX_DIM + 1, 1).unwrap();
    assert!(rasterize_background(size, Rgb8::new(0, 0, 0)).is_err());
}
