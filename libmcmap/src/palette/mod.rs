#![allow(clippy::module_name_repetitions)]

mod parse;
pub(crate) mod table;

use crate::{color::Color, error::Error};
use std::{collections::HashMap, fmt::Display, ops::Index};
use strum::FromRepr;
use table::MAP_COLORS;
use tracing::debug;

/// A single allowed map color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    id: u8,
    name: String,
    color: Color,
    material: String,
}

/// Brightness variant encoded in the two low bits of a map color id
///
/// Only [`Brightness::High`] is the unmodified base color; the others are rendered by
/// scaling the base color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Brightness {
    /// Channels multiplied by 180/255
    Low = 0,
    /// Channels multiplied by 220/255
    Normal = 1,
    /// Channels kept as is
    High = 2,
    /// Channels multiplied by 135/255
    Lowest = 3,
}

/// An ordered, immutable set of [`PaletteEntry`]
///
/// Build the canonical map palette with [`Palette::minecraft`], or parse a delimited table with
/// [`str::parse`]:
///
/// ```rust
/// use libmcmap::Palette;
///
/// let palette: Palette = "GRASS|127, 178, 56, 255|Grass Block\n\
///                         SAND|247, 233, 163, 255|Sand"
///     .parse()
///     .unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette[1].id(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

/// Map color id of the palette record at `position` (0-based)
///
/// Base indexes start at 1 since base 0 is the transparent "none" color, and records are stored
/// with [`Brightness::High`].
#[must_use]
pub const fn id_for_position(position: usize) -> Option<u8> {
    let id = (position + 1) * 4 + Brightness::High as usize;
    if id > u8::MAX as usize {
        None
    } else {
        Some(id as u8)
    }
}

impl PaletteEntry {
    /// Creates a new [`PaletteEntry`]
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, color: Color, material: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            material: material.into(),
        }
    }

    /// Map color id written to map files
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Symbolic name, e.g. `COLOR_BLACK`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color rendered for [`Self::id`]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Display name of a block producing this color, e.g. `Black Wool`
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }
}

impl Display for PaletteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}|{}", self.id, self.name, self.color, self.material)
    }
}

impl Brightness {
    /// Channel multiplier out of 255
    #[must_use]
    pub const fn multiplier(self) -> u16 {
        match self {
            Self::Low => 180,
            Self::Normal => 220,
            Self::High => 255,
            Self::Lowest => 135,
        }
    }

    /// Brightness encoded in a map color id
    #[must_use]
    pub fn of_id(id: u8) -> Self {
        // two bits can only hold the four variants
        Self::from_repr(id & 0b11).unwrap_or(Self::High)
    }

    fn apply(self, color: Color) -> Color {
        let scale = |c: u8| u8::try_from(u16::from(c) * self.multiplier() / 255).unwrap_or(u8::MAX);
        Color::new(scale(color.r), scale(color.g), scale(color.b), color.a)
    }
}

impl Palette {
    /// Creates a new [`Palette`]
    ///
    /// # Errors
    /// This function errors if `entries` is empty, if an entry uses an id of the transparent base
    /// or if two entries share an id
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, Error> {
        if entries.is_empty() {
            return Err(Error::EmptyPalette);
        }
        let mut seen: HashMap<u8, &str> = HashMap::with_capacity(entries.len());
        for entry in &entries {
            if entry.id >> 2 == 0 {
                return Err(Error::TransparentId {
                    id: entry.id,
                    name: entry.name.clone(),
                });
            }
            if let Some(first) = seen.insert(entry.id, &entry.name) {
                return Err(Error::DuplicateId {
                    id: entry.id,
                    first: first.to_owned(),
                    second: entry.name.clone(),
                });
            }
        }
        debug!("Built palette with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// The 61 base colors of the map item
    #[must_use]
    pub fn minecraft() -> Self {
        let entries = MAP_COLORS
            .iter()
            .enumerate()
            .map(|(position, &(name, color, material))| {
                // the table is short enough that every position has an id
                let id = id_for_position(position).unwrap_or_default();
                PaletteEntry::new(id, name, color.into(), material)
            })
            .collect();
        Self { entries }
    }

    /// Returns the entries in palette order
    #[must_use]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries in palette order
    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a constructed palette
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry stored with exactly this map color id
    #[must_use]
    pub fn get(&self, id: u8) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the entry with the given symbolic name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Color a map renders for any id, shaded by its [`Brightness`]
    ///
    /// Returns [`None`] for the transparent base (ids `0..=3`) and for bases missing from the
    /// palette.
    #[must_use]
    pub fn resolve(&self, id: u8) -> Option<Color> {
        let base = id >> 2;
        if base == 0 {
            return None;
        }
        let entry = self.entries.iter().find(|e| e.id >> 2 == base)?;
        let stored = Brightness::of_id(entry.id);
        let wanted = Brightness::of_id(id);
        if stored == wanted {
            Some(entry.color)
        } else {
            Some(wanted.apply(entry.color))
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::minecraft()
    }
}

impl Index<usize> for Palette {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minecraft_palette_has_61_entries() {
        let palette = Palette::minecraft();
        assert_eq!(palette.len(), 61);
        assert_eq!(palette[0].name(), "GRASS");
        assert_eq!(palette[60].name(), "GLOW_LICHEN");
    }

    #[test]
    fn ids_follow_table_position() {
        let palette = Palette::minecraft();
        for (position, entry) in palette.iter().enumerate() {
            assert_eq!(usize::from(entry.id()), (position + 1) * 4 + 2);
        }
        assert_eq!(palette.by_name("GRASS").map(PaletteEntry::id), Some(6));
        assert_eq!(palette.by_name("COLOR_BLACK").map(PaletteEntry::id), Some(118));
        assert_eq!(palette.by_name("GLOW_LICHEN").map(PaletteEntry::id), Some(246));
    }

    #[test]
    fn minecraft_palette_is_valid() {
        let palette = Palette::minecraft();
        assert_eq!(Palette::new(palette.entries().to_vec()).unwrap(), palette);
    }

    #[test]
    fn id_for_position_overflows() {
        assert_eq!(id_for_position(0), Some(6));
        assert_eq!(id_for_position(62), Some(254));
        assert_eq!(id_for_position(63), None);
    }

    #[test]
    fn get_by_id() {
        let palette = Palette::minecraft();
        let snow = palette.get(34).unwrap();
        assert_eq!(snow.name(), "SNOW");
        assert_eq!(snow.material(), "White Wool");
        assert_eq!(snow.color(), Color::opaque(255, 255, 255));
        assert!(palette.get(35).is_none());
        assert!(palette.get(0).is_none());
    }

    #[test]
    fn resolve_applies_brightness() {
        let palette = Palette::minecraft();
        // GRASS base index 1
        assert_eq!(palette.resolve(6), Some(Color::opaque(127, 178, 56)));
        assert_eq!(palette.resolve(4), Some(Color::opaque(89, 125, 39)));
        assert_eq!(palette.resolve(5), Some(Color::opaque(109, 153, 48)));
        assert_eq!(palette.resolve(7), Some(Color::opaque(67, 94, 29)));
    }

    #[test]
    fn resolve_transparent_and_unknown() {
        let palette = Palette::minecraft();
        for id in 0..4 {
            assert_eq!(palette.resolve(id), None);
        }
        // base 62 is past the end of the table
        assert_eq!(palette.resolve(62 * 4 + 2), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let entries = vec![
            PaletteEntry::new(6, "A", Color::opaque(0, 0, 0), "a"),
            PaletteEntry::new(6, "B", Color::opaque(1, 1, 1), "b"),
        ];
        assert!(matches!(
            Palette::new(entries),
            Err(Error::DuplicateId { id: 6, .. })
        ));
    }

    #[test]
    fn rejects_transparent_ids() {
        for id in 0..4 {
            let entries = vec![PaletteEntry::new(id, "CLEAR", Color::opaque(0, 0, 0), "air")];
            assert!(matches!(
                Palette::new(entries),
                Err(Error::TransparentId { id: i, .. }) if i == id
            ));
        }
        let entries = vec![PaletteEntry::new(4, "GRASS", Color::opaque(0, 0, 0), "grass")];
        assert!(Palette::new(entries).is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Palette::new(vec![]), Err(Error::EmptyPalette)));
    }
}
