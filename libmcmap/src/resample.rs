use crate::{error::Error, MAP_HEIGHT, MAP_WIDTH};
use image::{GenericImageView, ImageBuffer, Rgba, RgbaImage};
use tracing::{debug, instrument};

/// Scales `src` to `target_width` x `target_height` with nearest-neighbor sampling
///
/// Output pixel `(x, y)` is source pixel `(x * W / target_width, y * H / target_height)`, rounded
/// down. No blending takes place, so every output color exists in the source.
///
/// # Errors
/// This function errors if the source or the target has no pixels
#[instrument(skip(src), level = "debug")]
pub fn resample<I>(src: &I, target_width: u32, target_height: u32) -> Result<RgbaImage, Error>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = src.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    if target_width == 0 || target_height == 0 {
        return Err(Error::EmptyImage {
            width: target_width,
            height: target_height,
        });
    }
    debug!("Resampling {width}x{height} to {target_width}x{target_height}");

    let source_x: Vec<u32> = (0..target_width)
        .map(|x| nearest(x, width, target_width))
        .collect();
    let source_y: Vec<u32> = (0..target_height)
        .map(|y| nearest(y, height, target_height))
        .collect();

    Ok(ImageBuffer::from_fn(target_width, target_height, |x, y| {
        src.get_pixel(source_x[x as usize], source_y[y as usize])
    }))
}

/// Scales `src` to the size of a map item
///
/// # Errors
/// See [`resample`]
pub fn resample_to_map<I>(src: &I) -> Result<RgbaImage, Error>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    resample(src, MAP_WIDTH, MAP_HEIGHT)
}

fn nearest(target: u32, source_len: u32, target_len: u32) -> u32 {
    let scaled = u64::from(target) * u64::from(source_len) / u64::from(target_len);
    // target < target_len, so scaled < source_len
    u32::try_from(scaled).unwrap_or(source_len - 1)
}
