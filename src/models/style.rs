//! Style settings for fret diagrams
//!
//! These are the score-wide defaults the host passes in. Diagram properties
//! that are not set explicitly fall back to them, and the layout engine reads
//! its size ratios from here.

use serde::{Deserialize, Serialize};

/// Reference staff space the font point size is expressed against.
pub const SPATIUM20: f64 = 24.8;

/// Points per spatium at [`SPATIUM20`].
pub const POINTS_PER_SPATIUM20: f64 = 5.0;

/// Vertical placement of the diagram relative to its staff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Above,
    Below,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FretStyle {
    /// Staff space in layout units
    pub spatium: f64,
    pub fret_mag: f64,
    pub fret_num_mag: f64,
    /// 0 = fret number on the left, 1 = on the right
    pub fret_num_pos: i32,
    pub fret_placement: Placement,
    pub fret_strings: i32,
    pub fret_frets: i32,
    pub fret_offset: i32,
    /// Distance from the staff, in spatium
    pub fret_y: f64,
    /// Autoplace clearance, in spatium
    pub fret_min_distance: f64,
    pub barre_line_width: f64,
    /// Label font size in points at [`SPATIUM20`]
    pub font_point_size: f64,
}

impl Default for FretStyle {
    fn default() -> Self {
        Self {
            spatium: SPATIUM20,
            fret_mag: 1.0,
            fret_num_mag: 2.0,
            fret_num_pos: 0,
            fret_placement: Placement::Above,
            fret_strings: 6,
            fret_frets: 4,
            fret_offset: 0,
            fret_y: 2.0,
            fret_min_distance: 0.5,
            barre_line_width: 1.0,
            font_point_size: 4.0,
        }
    }
}

impl FretStyle {
    /// Parse a style from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn fret_y_distance(&self) -> f64 {
        self.fret_y * self.spatium
    }

    pub fn min_distance(&self) -> f64 {
        self.fret_min_distance * self.spatium
    }
}
