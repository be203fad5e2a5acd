use image::{DynamicImage, Rgba, RgbaImage};

/// Creates a fully transparent canvas
pub fn transparent_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Paints an opaque rectangle; `right`/`bottom` are exclusive
pub fn fill_rect(image: &mut RgbaImage, left: u32, top: u32, right: u32, bottom: u32) {
    for y in top..bottom {
        for x in left..right {
            image.put_pixel(x, y, Rgba([200, 30, 30, 255]));
        }
    }
}

/// Wraps a buffer as a DynamicImage
pub fn to_dynamic(image: RgbaImage) -> DynamicImage {
    DynamicImage::ImageRgba8(image)
}
