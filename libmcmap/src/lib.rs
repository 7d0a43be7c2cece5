//! # libmcmap
//!
//!
//! This library turns arbitrary raster images into Minecraft map items: a 128x128 grid of colors
//! taken from the fixed map palette, stored in the game's `map_<id>.dat` file format (gzip
//! compressed NBT).
//!
//! It aims to provide a small, low-level API to build upon. Each step of the conversion is
//! exposed on its own, so callers can swap the resampling or inspect the quantized grid before
//! anything is written.
//!
//! ### Pipeline
//!
//! 1. [`resample`] scales the source image to 128x128 with nearest-neighbor sampling.
//! 2. [`Quantizer`] maps every pixel to the closest [`PaletteEntry`] of a [`Palette`], using the
//!    sum of absolute RGB channel differences. Pixels that are not within
//!    [`color::MATCH_THRESHOLD`] of any entry stay unresolved and are written as color `0`
//!    (transparent).
//! 3. [`MapItem`] holds the color ids together with the map metadata and serializes them.
//!
//! ### Map color ids
//!
//! The game stores each map pixel as one byte: the base color index times four, plus a
//! [`palette::Brightness`]. This crate quantizes to the unmodified brightness only, so the id of
//! the palette record at position `p` is `(p + 1) * 4 + 2` (base index 0 is transparent).
//!
//! ### Usage
//!
//! #### Converting an image to a map file
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use libmcmap::{MapItem, MapMetadata, Palette, Quantizer};
//!
//! fn main() -> anyhow::Result<()> {
//!     let img = RgbaImage::from_pixel(300, 200, Rgba([30, 30, 30, 255]));
//!
//!     let palette = Palette::minecraft();
//!     let quantizer = Quantizer::builder().palette(&palette).build();
//!     let map = MapItem::from_image(&img, &quantizer, MapMetadata::default())?;
//!     assert!(map.colors().iter().all(|&c| c == 118));
//!
//!     let dir = std::env::temp_dir();
//!     let path = map.into_file(&dir, 7)?;
//!     assert!(path.ends_with("map_7.dat"));
//! #   std::fs::remove_file(path)?;
//!     Ok(())
//! }
//! ```
//!
//! #### Rendering a map file
//!
//! ```rust
//! use libmcmap::{MapItem, MapMetadata, Palette, MAP_PIXELS};
//!
//! fn main() -> anyhow::Result<()> {
//!     let map = MapItem::new(MapMetadata::default(), vec![34; MAP_PIXELS])?;
//!     let decoded = MapItem::from_bytes(&map.to_bytes()?)?;
//!
//!     let preview = decoded.to_preview(&Palette::minecraft());
//!     assert_eq!(preview.get_pixel(5, 5).0, [255, 255, 255, 255]);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]

/// Color type and the distance metric used for quantization
pub mod color;
mod error;
/// Map data file types
pub mod map;
/// Map palette types
pub mod palette;
mod quantize;
mod resample;

pub use color::{distance, Color, Similarity};
pub use error::Error;
pub use map::{Dimension, MapItem, MapMetadata};
pub use palette::{Palette, PaletteEntry};
pub use quantize::{Coordinate, QuantizedGrid, Quantizer};
pub use resample::{resample, resample_to_map};

/// Width of a map item in pixels
pub const MAP_WIDTH: u32 = 128;
/// Height of a map item in pixels
pub const MAP_HEIGHT: u32 = 128;
/// Number of pixels (and color bytes) of a map item
pub const MAP_PIXELS: usize = (MAP_WIDTH * MAP_HEIGHT) as usize;
/// `DataVersion` written to map files unless overridden in [`MapMetadata`]
pub const DATA_VERSION: i32 = 3955;
/// Default file name of a rendered map preview
pub const PREVIEW_FILE_NAME: &str = "image-map.png";
