#![allow(clippy::module_name_repetitions)]

mod nbt;

use crate::{
    error::Error,
    palette::Palette,
    quantize::{QuantizedGrid, Quantizer},
    resample::resample_to_map,
    DATA_VERSION, MAP_HEIGHT, MAP_PIXELS, MAP_WIDTH,
};
use anyhow::{Context, Result};
use bon::Builder;
use fastnbt::ByteArray;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use image::{GenericImageView, Rgba, RgbaImage};
use nbt::{MapData, MapFile};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use strum::{AsRefStr, Display, EnumString};
use tracing::{debug, info, instrument, trace};

/// A typed representation of a map data file (`map_<id>.dat`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapItem {
    metadata: MapMetadata,
    colors: Vec<u8>,
}

/// Fixed fields stored next to the colors of a map
///
/// The defaults describe a locked, unscaled map centered on the origin of the overworld, which is
/// what the game expects for map art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[non_exhaustive]
pub struct MapMetadata {
    /// Record identifier: `DataVersion`
    ///
    /// Data version of the game that wrote the file
    #[builder(default = DATA_VERSION)]
    pub data_version: i32,
    /// Record identifier: `xCenter`
    #[builder(default)]
    pub x_center: i32,
    /// Record identifier: `zCenter`
    #[builder(default)]
    pub z_center: i32,
    /// Record identifier: `scale`
    ///
    /// Zoom level, 0 means one block per pixel
    #[builder(default)]
    pub scale: i8,
    /// Record identifier: `locked`
    ///
    /// A locked map is never redrawn from the world
    #[builder(default = true)]
    pub locked: bool,
    /// Record identifier: `trackingPosition`
    #[builder(default)]
    pub tracking_position: bool,
    /// Record identifier: `unlimitedTracking`
    #[builder(default)]
    pub unlimited_tracking: bool,
    /// Record identifier: `dimension`
    #[builder(default)]
    pub dimension: Dimension,
}

/// The dimension a map belongs to
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
pub enum Dimension {
    /// `minecraft:overworld`
    #[default]
    #[strum(serialize = "minecraft:overworld")]
    Overworld,
    /// `minecraft:the_nether`
    #[strum(serialize = "minecraft:the_nether")]
    Nether,
    /// `minecraft:the_end`
    #[strum(serialize = "minecraft:the_end")]
    End,
}

impl Default for MapMetadata {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MapItem {
    /// Creates a new [`MapItem`]
    ///
    /// # Errors
    /// This function errors if `colors` does not hold exactly [`MAP_PIXELS`] bytes
    pub fn new(metadata: MapMetadata, colors: Vec<u8>) -> Result<Self, Error> {
        if colors.len() != MAP_PIXELS {
            return Err(Error::MismatchColorCount {
                expected: MAP_PIXELS,
                actual: colors.len(),
            });
        }
        Ok(Self { metadata, colors })
    }

    /// Creates a new [`MapItem`] from a quantized map-sized grid
    ///
    /// Unresolved pixels are stored as color `0`.
    ///
    /// # Errors
    /// This function errors if the grid is not [`MAP_WIDTH`] x [`MAP_HEIGHT`]
    pub fn from_grid(metadata: MapMetadata, grid: &QuantizedGrid<'_>) -> Result<Self, Error> {
        let actual = (grid.width(), grid.height());
        if actual != (MAP_WIDTH, MAP_HEIGHT) {
            return Err(Error::MismatchGridSize {
                expected: (MAP_WIDTH, MAP_HEIGHT),
                actual,
            });
        }
        Self::new(metadata, grid.color_ids())
    }

    /// Resamples and quantizes an image of any size into a [`MapItem`]
    ///
    /// # Errors
    /// This function errors if the image has no pixels
    #[instrument(skip_all)]
    pub fn from_image<I>(
        image: &I,
        quantizer: &Quantizer<'_>,
        metadata: MapMetadata,
    ) -> Result<Self, Error>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let resampled = resample_to_map(image)?;
        let grid = quantizer.quantize(&resampled);
        Self::from_grid(metadata, &grid)
    }

    /// Returns a reference to the [`MapMetadata`]
    #[must_use]
    pub const fn metadata(&self) -> &MapMetadata {
        &self.metadata
    }

    /// Returns the map color ids in row-major order
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.colors
    }

    /// File name the game expects for the map with the given id
    #[must_use]
    pub fn file_name(id: u32) -> String {
        format!("map_{id}.dat")
    }

    fn to_nbt(&self) -> MapFile {
        let m = &self.metadata;
        MapFile {
            data_version: m.data_version,
            data: MapData {
                z_center: m.z_center,
                unlimited_tracking: i8::from(m.unlimited_tracking),
                tracking_position: i8::from(m.tracking_position),
                frames: Vec::new(),
                scale: m.scale,
                locked: i8::from(m.locked),
                dimension: m.dimension.to_string(),
                banners: Vec::new(),
                x_center: m.x_center,
                colors: ByteArray::new(
                    self.colors
                        .iter()
                        .map(|&c| i8::from_ne_bytes([c]))
                        .collect(),
                ),
            },
        }
    }

    fn from_nbt(file: MapFile) -> Result<Self, Error> {
        let MapFile { data_version, data } = file;
        let dimension: Dimension = data
            .dimension
            .parse()
            .map_err(|_| Error::UnknownDimension(data.dimension.clone()))?;
        let metadata = MapMetadata {
            data_version,
            x_center: data.x_center,
            z_center: data.z_center,
            scale: data.scale,
            locked: data.locked != 0,
            tracking_position: data.tracking_position != 0,
            unlimited_tracking: data.unlimited_tracking != 0,
            dimension,
        };
        let colors = data
            .colors
            .into_inner()
            .into_iter()
            .map(|c| c.to_ne_bytes()[0])
            .collect();
        Self::new(metadata, colors)
    }

    /// Serializes [`Self`] as gzip-compressed NBT into `w`
    ///
    /// # Errors
    /// This function errors if serialization or writing fails
    pub fn to_writer(&self, w: impl Write) -> Result<(), Error> {
        let nbt = fastnbt::to_bytes(&self.to_nbt())?;
        trace!("Serialized {} bytes of nbt", nbt.len());
        let mut encoder = GzEncoder::new(w, Compression::default());
        encoder.write_all(&nbt)?;
        encoder.finish()?.flush()?;
        Ok(())
    }

    /// Serializes [`Self`] as gzip-compressed NBT
    ///
    /// # Errors
    /// See [`Self::to_writer`]
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        Ok(buf)
    }

    /// Tries to read [`Self`] from gzip-compressed NBT
    ///
    /// # Errors
    /// This function errors if the data is not gzip, is not a map data document, holds the wrong
    /// number of colors or names an unknown dimension
    pub fn from_reader(r: impl Read) -> Result<Self, Error> {
        let mut nbt = Vec::new();
        GzDecoder::new(r).read_to_end(&mut nbt)?;
        debug!("Decompressed {} bytes of nbt", nbt.len());
        Self::from_nbt(fastnbt::from_bytes(&nbt)?)
    }

    /// Tries to read [`Self`] from gzip-compressed NBT bytes
    ///
    /// # Errors
    /// See [`Self::from_reader`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_reader(bytes)
    }

    /// Tries to read [`Self`] from a provided file path
    ///
    /// # Errors
    ///
    /// This function will error if the file cannot be opened or if the file contains invalid data.
    /// See [`Self::from_reader`] for potential errors
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Self> {
        let filename = filename.as_ref();
        let file = File::open(filename).with_context(|| format!("open {}", filename.display()))?;
        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("read map from {}", filename.display()))
    }

    /// Saves [`Self`] as `map_<id>.dat` inside `dir` and returns the written path
    ///
    /// The document is fully encoded before the file is created, so a failed encode never
    /// leaves a partial file behind.
    ///
    /// # Errors
    ///
    /// This will error if encoding fails or if unable to open and/or write the file
    pub fn into_file(&self, dir: impl AsRef<Path>, id: u32) -> Result<PathBuf> {
        let path = dir.as_ref().join(Self::file_name(id));
        let bytes = self.to_bytes().context("Encode map document")?;
        let f = File::options()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("create {}", path.display()))?;
        let mut f = BufWriter::new(f);
        f.write_all(&bytes).context("Write map document")?;
        f.flush()?;
        info!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path)
    }

    /// Renders the map as the game would, unknown and transparent colors stay transparent black
    #[must_use]
    pub fn to_preview(&self, palette: &Palette) -> RgbaImage {
        RgbaImage::from_fn(MAP_WIDTH, MAP_HEIGHT, |x, y| {
            let id = self.colors[(y * MAP_WIDTH + x) as usize];
            palette.resolve(id).map_or(Rgba([0; 4]), Rgba::from)
        })
    }
}
