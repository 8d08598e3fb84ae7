use std::{io::Cursor, sync::Arc};

use super::*;

fn upload_of(img: image::RgbaImage) -> UploadedImage {
    let (width, height) = img.dimensions();
    UploadedImage {
        data_uri: "data:image/png;base64,".to_string(),
        size: PixelSize::new(width, height).unwrap(),
        pixels: Arc::new(img),
    }
}

#[test]
fn scale_is_min_of_axis_ratios() {
    for (w, h) in [(800u32, 200u32), (100, 400), (400, 400), (37, 1000), (1, 1)] {
        let dims = PreviewDimensions::fit(PixelSize::new(w, h).unwrap());
        let expected = (400.0 / f64::from(w)).min(400.0 / f64::from(h));
        assert_eq!(dims.scale, expected);
        assert_eq!(dims.width, f64::from(w) * expected);
        assert_eq!(dims.height, f64::from(h) * expected);
        assert!(dims.width <= 400.0 + 1e-9 && dims.height <= 400.0 + 1e-9);
    }
}

#[test]
fn aspect_ratio_is_preserved() {
    let dims = PreviewDimensions::fit(PixelSize::new(800, 200).unwrap());
    assert_eq!(dims.scale, 0.5);
    assert_eq!((dims.width, dims.height), (400.0, 100.0));
    assert_eq!(dims.pixel_size(), (400, 100));
}

#[test]
fn extreme_aspect_keeps_one_pixel() {
    let dims = PreviewDimensions::fit(PixelSize::new(10_000, 1).unwrap());
    assert_eq!(dims.pixel_size(), (400, 1));
}

#[test]
fn small_images_upscale_with_hard_pixel_edges() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, image::Rgba([0, 0, 255, 255]));

    let preview = render_preview(&upload_of(img)).unwrap();
    assert_eq!(preview.dims.scale, 200.0);
    assert_eq!(preview.image.dimensions(), (400, 200));

    // Nearest-neighbor: no blended colors anywhere.
    for px in preview.image.pixels() {
        assert!(px.0 == [255, 0, 0, 255] || px.0 == [0, 0, 255, 255]);
    }
    assert_eq!(preview.image.get_pixel(0, 0).0, [255, 0, 0, 255]);
    assert_eq!(preview.image.get_pixel(399, 199).0, [0, 0, 255, 255]);
}

#[test]
fn renders_from_decoded_upload() {
    let img = image::RgbaImage::from_pixel(40, 20, image::Rgba([1, 2, 3, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let upload = crate::assets::decode::decode_upload(&buf).unwrap();

    let preview = render_preview(&upload).unwrap();
    assert_eq!(preview.image.dimensions(), (400, 200));
}
