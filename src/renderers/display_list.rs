//! Display list for fret diagram rendering
//!
//! This module defines the output of the fret layout engine. The display list
//! carries every position, size and text a painter needs, so the JavaScript
//! side draws lines, circles and glyphs without doing any layout itself.
//!
//! Coordinates are in layout units with the origin at the left end of the top
//! (nut) line; y grows downward.

use serde::{Deserialize, Serialize};

use crate::models::FretDotType;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left corner plus size
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height * 0.5
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Whether the horizontal extents of the two rectangles overlap.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Flat,
    Round,
}

/// A stroked line segment
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub cap: LineCap,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A positioned dot
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderDot {
    pub string: i32,
    pub fret: i32,
    /// Centre of the dot
    pub cx: f64,
    pub cy: f64,
    pub diameter: f64,
    pub shape: FretDotType,
}

/// A marker glyph ("X" or "O") above a string
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderMarker {
    pub string: i32,
    pub glyph: char,
    /// Horizontal centre of the glyph
    pub x: f64,
    /// Top of the glyph box
    pub y: f64,
    pub font_size: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderBarre {
    pub fret: i32,
    pub start_string: i32,
    /// Last covered string with the open-ended sentinel resolved
    pub end_string: i32,
    pub line: LineSegment,
}

/// Number of the topmost visible fret, drawn beside the diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderFretNumber {
    pub text: String,
    /// Anchor x; the text ends here when right-aligned, starts here when left-aligned
    pub x: f64,
    /// Vertical centre of the first fret row
    pub y: f64,
    pub align: TextAlign,
    pub font_size: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderHarmony {
    pub text: String,
    /// Text box in diagram coordinates after autoplace
    pub bbox: Rect,
    /// Vertical shift applied by autoplace (0 when none was needed)
    pub autoplace_shift: f64,
}

/// Complete geometry of one fret diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FretDisplayList {
    /// Bounding box relative to the diagram origin
    pub bbox: Rect,
    /// Position of the origin relative to the parent segment
    pub pos: Point,
    pub string_dist: f64,
    pub fret_dist: f64,
    /// Thickness of strings and frets
    pub line_width: f64,
    /// Thickness of the top line (nut when the diagram starts at fret 1)
    pub nut_width: f64,
    pub dot_diameter: f64,
    pub nut: LineSegment,
    pub strings: Vec<LineSegment>,
    pub frets: Vec<LineSegment>,
    pub dots: Vec<RenderDot>,
    pub markers: Vec<RenderMarker>,
    pub barres: Vec<RenderBarre>,
    pub fret_number: Option<RenderFretNumber>,
    pub harmony: Option<RenderHarmony>,
}

/// What a pointer position inside the diagram refers to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HitTarget {
    /// The marker row above the top line
    Marker { string: i32 },
    /// A fret cell on a string
    Dot { string: i32, fret: i32 },
}

impl FretDisplayList {
    /// Map a point in diagram coordinates to a string and fret using the
    /// same spacing the diagram was drawn with.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitTarget> {
        let strings = self.strings.len() as i32;
        let frets = self.frets.len() as i32;
        if strings == 0 || self.string_dist <= 0.0 || self.fret_dist <= 0.0 {
            return None;
        }
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let string = (x / self.string_dist).round() as i32;
        if !(0..strings).contains(&string) {
            return None;
        }

        if y < 0.0 {
            return (y >= self.bbox.y).then_some(HitTarget::Marker { string });
        }

        let fret = (y / self.fret_dist).floor() as i32 + 1;
        (fret <= frets).then_some(HitTarget::Dot { string, fret })
    }
}
