use crate::{
    color::{distance, Color},
    palette::{Palette, PaletteEntry},
};
use bon::Builder;
use image::{Rgba, RgbaImage};
use itertools::iproduct;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Maps true colors to the closest [`PaletteEntry`]
///
/// ```rust
/// use libmcmap::{Color, Palette, Quantizer};
///
/// let palette = Palette::minecraft();
/// let quantizer = Quantizer::builder().palette(&palette).build();
/// let entry = quantizer.nearest(Color::opaque(0, 0, 0)).unwrap();
/// assert_eq!(entry.name(), "COLOR_BLACK");
/// ```
#[derive(Debug, Clone, Copy, Builder)]
pub struct Quantizer<'p> {
    /// Allowed output colors
    palette: &'p Palette,
    /// Quantize pixels on the rayon thread pool
    #[builder(default)]
    parallel: bool,
}

/// Grid position, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// column
    pub x: u32,
    /// row
    pub y: u32,
}

/// Row-major grid of quantized pixels
///
/// A pixel without any matching palette entry holds [`None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedGrid<'p> {
    width: u32,
    height: u32,
    cells: Vec<Option<&'p PaletteEntry>>,
}

impl<'p> Quantizer<'p> {
    /// Returns the palette entry closest to `color`
    ///
    /// `color` is first composited over transparent black (see [`Color::premultiplied`]), so
    /// transparent pixels match dark entries. Only entries that match `color` (see [`crate::color::distance`]) are candidates. The
    /// candidate with the lowest score wins, ties go to the entry earliest in the palette.
    #[must_use]
    pub fn nearest(&self, color: Color) -> Option<&'p PaletteEntry> {
        let color = color.premultiplied();
        let mut best: Option<(&'p PaletteEntry, u32)> = None;
        for entry in self.palette {
            let similarity = distance(color, entry.color());
            if !similarity.is_match {
                continue;
            }
            match best {
                Some((_, score)) if score <= similarity.score => {}
                _ => best = Some((entry, similarity.score)),
            }
        }
        best.map(|(entry, _)| entry)
    }

    /// Quantizes every pixel of `image`
    #[instrument(skip_all, fields(width = image.width(), height = image.height(), parallel = self.parallel))]
    pub fn quantize(&self, image: &RgbaImage) -> QuantizedGrid<'p> {
        let cells: Vec<_> = if self.parallel {
            image
                .as_raw()
                .par_chunks_exact(4)
                .map(|p| self.nearest(Color::new(p[0], p[1], p[2], p[3])))
                .collect()
        } else {
            image.pixels().map(|p| self.nearest(Color::from(*p))).collect()
        };
        let grid = QuantizedGrid {
            width: image.width(),
            height: image.height(),
            cells,
        };
        debug!(
            "Resolved {} of {} pixels",
            grid.resolved_count(),
            grid.cells.len()
        );
        grid
    }

    /// Returns the palette this quantizer maps to
    #[must_use]
    pub const fn palette(&self) -> &'p Palette {
        self.palette
    }
}

impl<'p> QuantizedGrid<'p> {
    /// Returns the grid width
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the entry at `(x, y)`, [`None`] if out of bounds or unresolved
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&'p PaletteEntry> {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize]
        } else {
            None
        }
    }

    /// Iterates the grid row by row (y outer, x inner)
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Option<&'p PaletteEntry>)> + '_ {
        iproduct!(0..self.height, 0..self.width)
            .zip(self.cells.iter())
            .map(|((y, x), cell)| (Coordinate { x, y }, *cell))
    }

    /// Number of pixels that matched a palette entry
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Map color ids in row-major order, `0` for unresolved pixels
    #[must_use]
    pub fn color_ids(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, PaletteEntry::id))
            .collect()
    }

    /// Renders the grid with the palette colors, unresolved pixels stay transparent black
    #[must_use]
    pub fn to_preview(&self) -> RgbaImage {
        let mut preview = RgbaImage::new(self.width, self.height);
        for (Coordinate { x, y }, cell) in self.iter() {
            if let Some(entry) = cell {
                preview.put_pixel(x, y, Rgba::from(entry.color()));
            }
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::MATCH_THRESHOLD, MAP_HEIGHT, MAP_WIDTH};

    fn map_sized(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(MAP_WIDTH, MAP_HEIGHT, Rgba(color))
    }

    #[test]
    fn exact_palette_color_everywhere() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        for entry in &palette {
            let grid = quantizer.quantize(&map_sized(entry.color().into()));
            assert_eq!(grid.resolved_count(), 16_384);
            assert!(grid.iter().all(|(_, cell)| cell == Some(entry)), "{entry}");
        }
    }

    #[test]
    fn black_picks_color_black() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        let black = Color::opaque(0, 0, 0);
        let entry = quantizer.nearest(black).unwrap();
        assert_eq!(entry.name(), "COLOR_BLACK");
        assert_eq!(distance(black, entry.color()).score, 75);
        // TERRACOTTA_BLACK scores 75 as well but comes later in the palette
        let terracotta = palette.by_name("TERRACOTTA_BLACK").unwrap();
        assert_eq!(distance(black, terracotta.color()).score, 75);
    }

    #[test]
    fn white_picks_snow() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        let entry = quantizer.nearest(Color::opaque(255, 255, 255)).unwrap();
        assert_eq!(entry.name(), "SNOW");
        assert_eq!(entry.id(), 34);

        let reversed = Palette::new(palette.iter().rev().cloned().collect()).unwrap();
        let quantizer = Quantizer::builder().palette(&reversed).build();
        let entry = quantizer.nearest(Color::opaque(255, 255, 255)).unwrap();
        assert_eq!(entry.name(), "SNOW");
    }

    #[test]
    fn transparent_pixels_are_composited_over_black() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();

        let clear = quantizer.nearest(Color::new(255, 255, 255, 0)).unwrap();
        assert_eq!(clear.name(), "COLOR_BLACK");
        assert_eq!(clear.id(), 118);

        let half = quantizer.nearest(Color::new(255, 255, 255, 128)).unwrap();
        assert_eq!(Some(half), quantizer.nearest(Color::opaque(128, 128, 128)));
        assert_ne!(half.name(), "SNOW");
    }

    #[test]
    fn transparent_image_quantizes_to_black() {
        let palette = Palette::minecraft();
        let image = map_sized([255, 255, 255, 0]);
        let sequential = Quantizer::builder().palette(&palette).build().quantize(&image);
        let parallel = Quantizer::builder()
            .palette(&palette)
            .parallel(true)
            .build()
            .quantize(&image);
        assert!(sequential.color_ids().iter().all(|&id| id == 118));
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn ties_go_to_first_entry() {
        let palette = Palette::new(vec![
            PaletteEntry::new(6, "FIRST", Color::opaque(10, 0, 0), "a"),
            PaletteEntry::new(10, "SECOND", Color::opaque(0, 10, 0), "b"),
        ])
        .unwrap();
        let quantizer = Quantizer::builder().palette(&palette).build();
        let entry = quantizer.nearest(Color::opaque(0, 0, 0)).unwrap();
        assert_eq!(entry.name(), "FIRST");
    }

    #[test]
    fn no_candidate_is_unresolved() {
        let palette: Palette = "SNOW|255, 255, 255, 255|White Wool".parse().unwrap();
        let quantizer = Quantizer::builder().palette(&palette).build();
        assert!(quantizer.nearest(Color::opaque(0, 0, 0)).is_none());

        let grid = quantizer.quantize(&map_sized([0, 0, 0, 255]));
        assert_eq!(grid.resolved_count(), 0);
        assert!(grid.color_ids().iter().all(|&id| id == 0));
        assert!(grid.to_preview().pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn result_is_minimal_among_matches() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let color = Color::opaque(r, g, b);
                    let best = quantizer.nearest(color).unwrap();
                    assert!(palette.get(best.id()).is_some());
                    let best_score = distance(color, best.color()).score;
                    assert!(best_score < MATCH_THRESHOLD);
                    for other in &palette {
                        let s = distance(color, other.color());
                        if s.is_match {
                            assert!(best_score <= s.score, "{color}: {best} vs {other}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn grid_is_row_major() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        let grass = palette.by_name("GRASS").unwrap();
        let snow = palette.by_name("SNOW").unwrap();
        let mut image = map_sized(snow.color().into());
        image.put_pixel(3, 1, Rgba::from(grass.color()));

        let grid = quantizer.quantize(&image);
        assert_eq!(grid.get(3, 1), Some(grass));
        assert_eq!(grid.get(1, 3), Some(snow));
        assert_eq!(grid.get(MAP_WIDTH, 0), None);

        let ids = grid.color_ids();
        assert_eq!(ids.len(), 16_384);
        assert_eq!(ids[128 + 3], grass.id());
        assert_eq!(
            grid.iter().nth(128 + 3).map(|(c, _)| c),
            Some(Coordinate { x: 3, y: 1 })
        );
    }

    #[test]
    fn parallel_matches_sequential() {
        let palette = Palette::minecraft();
        let image = RgbaImage::from_fn(MAP_WIDTH, MAP_HEIGHT, |x, y| {
            Rgba([(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8, 255])
        });
        let sequential = Quantizer::builder().palette(&palette).build().quantize(&image);
        let parallel = Quantizer::builder()
            .palette(&palette)
            .parallel(true)
            .build()
            .quantize(&image);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn preview_uses_entry_colors() {
        let palette = Palette::minecraft();
        let quantizer = Quantizer::builder().palette(&palette).build();
        let grid = quantizer.quantize(&map_sized([254, 254, 254, 255]));
        let preview = grid.to_preview();
        assert!(preview.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }
}
