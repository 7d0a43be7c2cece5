use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
/// Possible `libmcmap` errors
pub enum Error {
    /// Error returned if a palette table record cannot be parsed
    #[error("invalid palette record on line {line}: {reason}")]
    InvalidPalette {
        /// 1-based line number of the offending record
        line: usize,
        /// what was wrong with the record
        reason: String,
    },
    /// Error returned if a palette table holds no records
    #[error("palette table is empty")]
    EmptyPalette,
    /// Error returned if two palette records share the same map color id
    #[error("palette id {id} is used by both {first} and {second}")]
    DuplicateId {
        /// the shared id
        id: u8,
        /// name of the first record using the id
        first: String,
        /// name of the second record using the id
        second: String,
    },
    /// Error returned if a palette record uses an id of the transparent base (`0..=3`)
    #[error("palette id {id} of {name} is reserved for transparent pixels")]
    TransparentId {
        /// the reserved id
        id: u8,
        /// name of the record using it
        name: String,
    },
    /// Error returned if an image without pixels is resampled
    #[error("cannot resample an empty image ({width}x{height})")]
    EmptyImage {
        /// image width
        width: u32,
        /// image height
        height: u32,
    },
    /// Error returned if the number of map colors is not `MAP_PIXELS`
    #[error("map must hold {expected} colors, got {actual}")]
    MismatchColorCount {
        /// required color count
        expected: usize,
        /// provided color count
        actual: usize,
    },
    /// Error returned if a quantized grid is not the size of a map
    #[error("grid must be {expected:?}, got {actual:?}")]
    MismatchGridSize {
        /// required width/height
        expected: (u32, u32),
        /// provided width/height
        actual: (u32, u32),
    },
    /// Error returned if a map file names a dimension this crate does not know
    #[error("unknown dimension {0:?}")]
    UnknownDimension(String),
    /// Image decode/encode error
    #[error("image error")]
    Image(#[from] image::ImageError),
    /// NBT serialization error
    #[error("nbt error")]
    Nbt(#[from] fastnbt::error::Error),
    /// I/O error
    #[error("i/o error")]
    Io(#[from] std::io::Error),
}
