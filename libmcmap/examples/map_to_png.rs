/// Demonstrates how to render a map data file to a png
/// using the [`image`] crate
///
use anyhow::Context;
use libmcmap::{MapItem, Palette, PREVIEW_FILE_NAME};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: map_to_png <map_0.dat>")?;
    let map = MapItem::from_file(&path)?;

    let preview = map.to_preview(&Palette::minecraft());
    preview.save(PREVIEW_FILE_NAME)?;
    Ok(())
}
