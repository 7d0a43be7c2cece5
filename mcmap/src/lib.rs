use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ImageEncoder, RgbaImage};
use libmcmap::{MapItem, MapMetadata, Palette, Quantizer};
use tracing::{debug, info, instrument};

fn write_png(img: &RgbaImage, output_name: &Path) -> Result<()> {
    let output = File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output_name)
        .with_context(|| format!("create {}", output_name.display()))?;

    let encoder = PngEncoder::new(BufWriter::new(output));
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// Preview path used when `mapimg` gets no output: the map file with a `png` extension
#[must_use]
pub fn default_image_output(map_file: &Path) -> PathBuf {
    map_file.with_extension("png")
}

#[instrument]
pub fn map_to_image(map_file: &Path, output_name: &Path) -> Result<()> {
    let map = MapItem::from_file(map_file)?;
    debug!("Read map from file: {:?}", map.metadata());

    let preview = map.to_preview(&Palette::minecraft());

    info!("Writing map preview to {}", output_name.display());
    write_png(&preview, output_name)?;
    info!("Successfully wrote map preview to {}", output_name.display());
    Ok(())
}

#[instrument(skip(metadata))]
pub fn image_to_map(
    image_file: &Path,
    output_dir: &Path,
    id: u32,
    preview: Option<&Path>,
    metadata: MapMetadata,
    parallel: bool,
) -> Result<PathBuf> {
    let img = image::open(image_file)
        .with_context(|| format!("Failed to open image {}", image_file.display()))?;
    debug!("Read {}x{} image", img.width(), img.height());

    let palette = Palette::minecraft();
    let quantizer = Quantizer::builder()
        .palette(&palette)
        .parallel(parallel)
        .build();
    let resampled = libmcmap::resample_to_map(&img)?;
    let grid = quantizer.quantize(&resampled);
    info!(
        "{} of {} pixels matched a map color",
        grid.resolved_count(),
        libmcmap::MAP_PIXELS
    );

    let map = MapItem::from_grid(metadata, &grid)?;
    let written = map.into_file(output_dir, id)?;

    if let Some(preview) = preview {
        info!("Writing map preview to {}", preview.display());
        write_png(&grid.to_preview(), preview)?;
    }
    Ok(written)
}
