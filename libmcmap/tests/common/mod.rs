use image::{Rgba, RgbaImage};

/// Stripes of palette colors with a band of noise-like colors, 300x200
pub fn striped_image() -> RgbaImage {
    RgbaImage::from_fn(300, 200, |x, y| match x / 60 {
        0 => Rgba([127, 178, 56, 255]),
        1 => Rgba([255, 255, 255, 255]),
        2 => Rgba([0, 0, 0, 255]),
        3 => Rgba([64, 64, 255, 255]),
        _ => Rgba([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 256) as u8, 255]),
    })
}
