/// Demonstrates how to create a [`MapItem`] from a png file
/// using the [`image`] crate
///
use anyhow::Context;
use libmcmap::{MapItem, MapMetadata, Palette, Quantizer};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: png_to_map <image.png> [id]")?;
    let id = std::env::args()
        .nth(2)
        .map(|id| id.parse::<u32>())
        .transpose()
        .context("map id must be a non-negative integer")?
        .unwrap_or_default();

    let img = image::open(&path).with_context(|| format!("open {path}"))?;

    let palette = Palette::minecraft();
    let quantizer = Quantizer::builder().palette(&palette).build();
    let map = MapItem::from_image(&img, &quantizer, MapMetadata::default())?;
    let written = map.into_file(".", id)?;
    println!("wrote {}", written.display());
    Ok(())
}
