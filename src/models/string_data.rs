//! Instrument tuning used to seed a diagram from a chord.

use serde::{Deserialize, Serialize};

/// Open-string pitches (MIDI numbers) in diagram column order, lowest
/// string first, and the number of frets on the neck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StringData {
    pub open_pitches: Vec<i32>,
    pub frets: i32,
}

impl StringData {
    pub fn new(open_pitches: Vec<i32>, frets: i32) -> Self {
        Self { open_pitches, frets }
    }

    /// Standard six-string guitar tuning, E2 A2 D3 G3 B3 E4.
    pub fn guitar() -> Self {
        Self::new(vec![40, 45, 50, 55, 59, 64], 19)
    }

    pub fn strings(&self) -> i32 {
        self.open_pitches.len() as i32
    }

    /// Find the string and fret that play `pitch`.
    ///
    /// Strings are tried from the highest column down, so the lowest fret
    /// that fits the neck wins.
    pub fn convert_pitch(&self, pitch: i32) -> Option<(i32, i32)> {
        self.open_pitches
            .iter()
            .enumerate()
            .rev()
            .find_map(|(string, &open)| {
                let fret = pitch - open;
                (0..=self.frets).contains(&fret).then_some((string as i32, fret))
            })
    }
}
