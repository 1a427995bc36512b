//! Compact chord notation
//!
//! One character per string, lowest string first: `X` mutes the string,
//! `O` leaves it open, a digit is the fret of a dot and the first `-` starts
//! an open barre at fret 1. "X32010" is an open C major chord.

use crate::converters::errors::CompactError;
use crate::models::{FretDiagram, FretDotType, FretMarkerType};

/// Highest fret shown without shifting the diagram down the neck
const VISIBLE_SPAN: i32 = 3;

/// Build a diagram from compact notation.
///
/// The string count is the length of `s` and the fret count is 4. When a
/// digit is above 3 the whole shape is moved up with a fret offset so it
/// still fits. Characters outside the notation are ignored.
pub fn from_string(s: &str) -> FretDiagram {
    let mut fd = FretDiagram::new();
    let strings = s.chars().count() as i32;
    fd.set_strings(strings);
    fd.set_frets(4);

    let mut offset = 0;
    let mut barre_string = -1;
    let mut dots: Vec<(i32, i32)> = Vec::new();

    for (i, c) in s.chars().enumerate() {
        let string = i as i32;
        match c {
            'X' => fd.set_marker(string, FretMarkerType::Cross),
            'O' => fd.set_marker(string, FretMarkerType::Circle),
            '-' if barre_string == -1 => barre_string = string,
            _ => {
                if let Some(fret) = c.to_digit(10) {
                    let fret = fret as i32;
                    offset = offset.max(fret - VISIBLE_SPAN);
                    dots.push((string, fret));
                }
            }
        }
    }

    if offset > 0 {
        fd.set_fret_offset(offset);
    }

    for (string, fret) in dots {
        if fret > 0 {
            fd.set_dot(string, fret - offset, true, FretDotType::Normal);
        }
    }

    // barre goes to the end
    if barre_string >= 0 {
        fd.set_barre(barre_string, -1, 1);
    }

    log::debug!("compact '{}': {} strings, offset {}", s, strings, offset);
    fd
}

/// Like [`from_string`], but rejects characters outside the notation.
pub fn parse_compact_strict(s: &str) -> Result<FretDiagram, CompactError> {
    if s.is_empty() {
        return Err(CompactError::Empty);
    }

    if let Some((position, ch)) = s
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, 'X' | 'O' | '-') && !c.is_ascii_digit())
    {
        return Err(CompactError::InvalidCharacter { ch, position });
    }

    Ok(from_string(s))
}
