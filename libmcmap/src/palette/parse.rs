use std::str::FromStr;

use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, pair},
    IResult,
};
use tracing::trace;

use super::{id_for_position, Palette, PaletteEntry};
use crate::{color::Color, error::Error};

const FIELD_DELIMITER: char = '|';

fn channel(input: &str) -> IResult<&str, u8> {
    map_res(digit1, str::parse::<u8>)(input)
}

fn channels(input: &str) -> IResult<&str, Vec<u8>> {
    all_consuming(delimited(
        space0,
        separated_list1(pair(char(','), space0), channel),
        space0,
    ))(input)
}

fn invalid(line: usize, reason: impl Into<String>) -> Error {
    Error::InvalidPalette {
        line: line + 1,
        reason: reason.into(),
    }
}

/// Parses one `[code|]NAME|r, g, b, a|Material` record
fn parse_record(line: usize, position: usize, record: &str) -> Result<PaletteEntry, Error> {
    let fields: Vec<_> = record.split(FIELD_DELIMITER).map(str::trim).collect();
    let (id, name, color, material) = match fields.as_slice() {
        [code, name, color, material] => {
            let id = code
                .parse::<u8>()
                .map_err(|e| invalid(line, format!("bad code {code:?}: {e}")))?;
            (id, *name, *color, *material)
        }
        [name, color, material] => {
            let id = id_for_position(position)
                .ok_or_else(|| invalid(line, format!("no map id left for position {position}")))?;
            (id, *name, *color, *material)
        }
        other => {
            return Err(invalid(
                line,
                format!("expected 3 or 4 fields, found {}", other.len()),
            ))
        }
    };
    if name.is_empty() {
        return Err(invalid(line, "missing name"));
    }
    let (_, rgba) = channels(color).map_err(|e| invalid(line, format!("bad color {color:?}: {e}")))?;
    let rgba: [u8; 4] = rgba
        .try_into()
        .map_err(|v: Vec<u8>| invalid(line, format!("expected 4 channels, found {}", v.len())))?;
    trace!("Parsed palette record {name} with id {id}");
    Ok(PaletteEntry::new(id, name, Color::from(rgba), material))
}

impl FromStr for Palette {
    type Err = Error;

    /// Parses a delimited palette table, one record per line
    ///
    /// Blank lines are skipped. A record with 4 fields carries its own map color id, one with 3
    /// fields gets the id of its position (see [`id_for_position`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .enumerate()
            .map(|(position, (line, record))| parse_record(line, position, record))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: &str = "6|GRASS|127, 178, 56, 255|Grass Block
10|SAND|247, 233, 163, 255|Sand
118|COLOR_BLACK|25, 25, 25, 255|Black Wool";

    #[test]
    fn parses_explicit_codes() {
        let palette: Palette = COMPACT.parse().unwrap();
        assert_eq!(palette.len(), 3);
        let black = &palette[2];
        assert_eq!(black.id(), 118);
        assert_eq!(black.name(), "COLOR_BLACK");
        assert_eq!(black.color(), Color::opaque(25, 25, 25));
        assert_eq!(black.material(), "Black Wool");
    }

    #[test]
    fn derives_missing_codes_from_position() {
        let palette: Palette = "GRASS|127,178,56,255|Grass Block\n\nSAND|247, 233, 163, 255|Sand"
            .parse()
            .unwrap();
        assert_eq!(palette[0].id(), 6);
        assert_eq!(palette[1].id(), 10);
    }

    #[test]
    fn display_round_trips() {
        let palette = Palette::minecraft();
        let table = palette
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(table.parse::<Palette>().unwrap(), palette);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = "6|GRASS|127, 178, 56, 255|Grass Block\nSAND|Sand"
            .parse::<Palette>()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPalette { line: 2, .. }), "{err}");
    }

    #[test]
    fn rejects_non_numeric_channel() {
        let err = "GRASS|127, green, 56, 255|Grass Block"
            .parse::<Palette>()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPalette { line: 1, .. }), "{err}");
    }

    #[test]
    fn rejects_out_of_range_channel() {
        assert!("GRASS|127, 300, 56, 255|Grass Block".parse::<Palette>().is_err());
    }

    #[test]
    fn rejects_wrong_channel_count() {
        assert!("GRASS|127, 178, 56|Grass Block".parse::<Palette>().is_err());
        assert!("GRASS|127, 178, 56, 255, 1|Grass Block".parse::<Palette>().is_err());
    }

    #[test]
    fn rejects_bad_code() {
        assert!("-6|GRASS|127, 178, 56, 255|Grass Block".parse::<Palette>().is_err());
        assert!("256|GRASS|127, 178, 56, 255|Grass Block".parse::<Palette>().is_err());
    }

    #[test]
    fn rejects_transparent_code() {
        assert!(matches!(
            "2|CLEAR|0, 0, 0, 0|Air".parse::<Palette>(),
            Err(Error::TransparentId { id: 2, .. })
        ));
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!("\n \n".parse::<Palette>(), Err(Error::EmptyPalette)));
    }
}
