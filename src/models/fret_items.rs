//! Fret diagram primitives
//!
//! Dots, markers and barres are small value records. Each one has a
//! "does-not-exist" form so that lookups on empty positions can return a
//! value instead of failing; callers check `exists()`.

use serde::{Deserialize, Serialize};

/// Shape drawn for a fretted dot.
///
/// Kept in this order, the numeric values are persisted by the JS side.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum FretDotType {
    #[default]
    Normal = 0,
    Cross = 1,
    Square = 2,
    Triangle = 3,
}

/// Glyph shown above a string instead of a fretted dot.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum FretMarkerType {
    #[default]
    None = 0,
    /// Open string ("O")
    Circle = 1,
    /// Muted string ("X")
    Cross = 2,
}

/// A finger-spanning bar across a range of strings.
///
/// `end_string == -1` means the barre is open-ended and runs to the last string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barre {
    pub start_string: i32,
    pub end_string: i32,
}

impl Barre {
    pub fn new(start_string: i32, end_string: i32) -> Self {
        Self { start_string, end_string }
    }

    pub fn exists(&self) -> bool {
        self.start_string > -1
    }

    pub fn is_open_ended(&self) -> bool {
        self.end_string == -1
    }

    /// Last string covered, resolving the open-ended sentinel against `strings`.
    pub fn resolved_end(&self, strings: i32) -> i32 {
        if self.is_open_ended() {
            strings - 1
        } else {
            self.end_string
        }
    }

    /// Whether the barre's span reaches `string`.
    pub fn covers(&self, string: i32) -> bool {
        self.exists() && self.start_string <= string && (self.is_open_ended() || self.end_string >= string)
    }
}

impl Default for Barre {
    fn default() -> Self {
        Self { start_string: -1, end_string: -1 }
    }
}

/// A fretted position on one string. Frets are 1-based; 0 means no dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dot {
    pub fret: i32,
    #[serde(rename = "type")]
    pub dtype: FretDotType,
}

impl Dot {
    pub fn new(fret: i32) -> Self {
        Self { fret, dtype: FretDotType::Normal }
    }

    pub fn with_type(fret: i32, dtype: FretDotType) -> Self {
        Self { fret, dtype }
    }

    pub fn exists(&self) -> bool {
        self.fret > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Marker {
    #[serde(rename = "type")]
    pub mtype: FretMarkerType,
}

impl Marker {
    pub fn new(mtype: FretMarkerType) -> Self {
        Self { mtype }
    }

    pub fn exists(&self) -> bool {
        self.mtype != FretMarkerType::None
    }
}

// ============================================================================
// Name tables
// ============================================================================

const MARKER_TYPE_NAMES: &[(FretMarkerType, &str)] = &[
    (FretMarkerType::Circle, "circle"),
    (FretMarkerType::Cross, "cross"),
    (FretMarkerType::None, "none"),
];

const DOT_TYPE_NAMES: &[(FretDotType, &str)] = &[
    (FretDotType::Normal, "normal"),
    (FretDotType::Cross, "cross"),
    (FretDotType::Square, "square"),
    (FretDotType::Triangle, "triangle"),
];

impl FretMarkerType {
    /// Persisted name of this marker type.
    ///
    /// # Panics
    /// If the name table no longer covers every variant. That can only come
    /// from editing the table, never from input data.
    pub fn name(self) -> &'static str {
        match MARKER_TYPE_NAMES.iter().find(|(t, _)| *t == self) {
            Some((_, name)) => name,
            None => {
                log::error!("Unrecognised FretMarkerType {:?}", self);
                panic!("Unrecognised FretMarkerType {:?}", self);
            }
        }
    }

    /// Look up a marker type by its persisted name, falling back to `None`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        MARKER_TYPE_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(t, _)| *t)
            .unwrap_or_else(|| {
                log::warn!("Unrecognised marker name '{}'", name);
                FretMarkerType::None
            })
    }

    /// Glyph drawn for this marker, `None` for the empty marker.
    pub fn glyph(self) -> Option<char> {
        match self {
            FretMarkerType::Circle => Some('O'),
            FretMarkerType::Cross => Some('X'),
            FretMarkerType::None => None,
        }
    }
}

impl FretDotType {
    /// Persisted name of this dot type.
    ///
    /// # Panics
    /// If the name table no longer covers every variant.
    pub fn name(self) -> &'static str {
        match DOT_TYPE_NAMES.iter().find(|(t, _)| *t == self) {
            Some((_, name)) => name,
            None => {
                log::error!("Unrecognised FretDotType {:?}", self);
                panic!("Unrecognised FretDotType {:?}", self);
            }
        }
    }

    /// Look up a dot type by its persisted name, falling back to `Normal`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        DOT_TYPE_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(t, _)| *t)
            .unwrap_or_else(|| {
                log::warn!("Unrecognised dot name '{}'", name);
                FretDotType::Normal
            })
    }
}
