use image::Rgba;
use std::fmt::Display;

/// Scores at or above this value are never considered a match
pub const MATCH_THRESHOLD: u32 = 550;

/// An 8-bit RGBA color
///
/// Alpha is carried through the pipeline but ignored by [`distance`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// red channel
    pub r: u8,
    /// green channel
    pub g: u8,
    /// blue channel
    pub b: u8,
    /// alpha channel
    pub a: u8,
}

/// Result of comparing two colors with [`distance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Similarity {
    /// `true` if [`Self::score`] is below [`MATCH_THRESHOLD`]
    pub is_match: bool,
    /// Sum of the absolute per-channel differences of red, green and blue
    pub score: u32,
}

impl Color {
    /// Creates a new [`Color`]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque [`Color`]
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Composites the color over transparent black
    ///
    /// Each channel is scaled by `a / 255`, so a fully transparent pixel becomes black no matter
    /// which color it stores. Alpha is kept.
    #[must_use]
    pub fn premultiplied(self) -> Self {
        let scale =
            |c: u8| u8::try_from(u16::from(c) * u16::from(self.a) / 255).unwrap_or(u8::MAX);
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }
}

/// Compares two colors using the sum of absolute channel differences (alpha excluded)
#[must_use]
pub fn distance(a: Color, b: Color) -> Similarity {
    let channel = |x: u8, y: u8| (i32::from(x) - i32::from(y)).unsigned_abs();
    let score = channel(a.r, b.r) + channel(a.g, b.g) + channel(a.b, b.b);
    Similarity {
        is_match: score < MATCH_THRESHOLD,
        score,
    }
}

impl From<Rgba<u8>> for Color {
    fn from(Rgba([r, g, b, a]): Rgba<u8>) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for Rgba<u8> {
    fn from(value: Color) -> Self {
        Self(value.into())
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}
