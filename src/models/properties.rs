//! Typed property access for fret diagrams
//!
//! The inspector edits diagrams through these properties rather than the
//! individual setters, so one code path covers reading, writing and
//! resetting a value to its style default.

use serde::{Deserialize, Serialize};

use super::fret_diagram::FretDiagram;
use super::style::FretStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FretProperty {
    Mag,
    Strings,
    Frets,
    FretOffset,
    NumPos,
    ShowNut,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Real(f64),
}

impl PropertyValue {
    pub fn to_int(self) -> i32 {
        match self {
            PropertyValue::Int(v) => v,
            PropertyValue::Real(v) => v.round() as i32,
            PropertyValue::Bool(v) => v as i32,
        }
    }

    pub fn to_real(self) -> f64 {
        match self {
            PropertyValue::Int(v) => v as f64,
            PropertyValue::Real(v) => v,
            PropertyValue::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }

    pub fn to_bool(self) -> bool {
        match self {
            PropertyValue::Bool(v) => v,
            PropertyValue::Int(v) => v != 0,
            PropertyValue::Real(v) => v != 0.0,
        }
    }
}

impl FretDiagram {
    pub fn get_property(&self, property: FretProperty) -> PropertyValue {
        match property {
            FretProperty::Mag => PropertyValue::Real(self.user_mag()),
            FretProperty::Strings => PropertyValue::Int(self.strings()),
            FretProperty::Frets => PropertyValue::Int(self.frets()),
            FretProperty::FretOffset => PropertyValue::Int(self.fret_offset()),
            FretProperty::NumPos => PropertyValue::Int(self.num_pos()),
            FretProperty::ShowNut => PropertyValue::Bool(self.show_nut()),
        }
    }

    /// Apply a property value through the matching setter.
    pub fn set_property(&mut self, property: FretProperty, value: PropertyValue) {
        match property {
            FretProperty::Mag => self.set_user_mag(value.to_real()),
            FretProperty::Strings => self.set_strings(value.to_int()),
            FretProperty::Frets => self.set_frets(value.to_int()),
            FretProperty::FretOffset => self.set_fret_offset(value.to_int()),
            FretProperty::NumPos => self.set_num_pos(value.to_int()),
            FretProperty::ShowNut => self.set_show_nut(value.to_bool()),
        }
    }

    pub fn property_default(property: FretProperty, style: &FretStyle) -> PropertyValue {
        match property {
            FretProperty::Mag => PropertyValue::Real(1.0),
            FretProperty::Strings => PropertyValue::Int(style.fret_strings),
            FretProperty::Frets => PropertyValue::Int(style.fret_frets),
            FretProperty::FretOffset => PropertyValue::Int(style.fret_offset),
            FretProperty::NumPos => PropertyValue::Int(style.fret_num_pos),
            FretProperty::ShowNut => PropertyValue::Bool(true),
        }
    }

    /// Reset a property to its style default.
    pub fn reset_property(&mut self, property: FretProperty, style: &FretStyle) {
        self.set_property(property, Self::property_default(property, style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fret_items::FretDotType;

    #[test]
    fn test_get_set_round_trip() {
        let mut fd = FretDiagram::new();
        fd.set_property(FretProperty::Frets, PropertyValue::Int(5));
        fd.set_property(FretProperty::FretOffset, PropertyValue::Int(2));
        fd.set_property(FretProperty::Mag, PropertyValue::Real(1.25));
        fd.set_property(FretProperty::ShowNut, PropertyValue::Bool(false));
        fd.set_property(FretProperty::NumPos, PropertyValue::Int(1));

        assert_eq!(fd.get_property(FretProperty::Frets), PropertyValue::Int(5));
        assert_eq!(fd.get_property(FretProperty::FretOffset), PropertyValue::Int(2));
        assert_eq!(fd.get_property(FretProperty::Mag), PropertyValue::Real(1.25));
        assert_eq!(fd.get_property(FretProperty::ShowNut), PropertyValue::Bool(false));
        assert_eq!(fd.get_property(FretProperty::NumPos), PropertyValue::Int(1));
    }

    #[test]
    fn test_strings_property_shifts_content() {
        let mut fd = FretDiagram::new();
        fd.set_dot(0, 1, false, FretDotType::Normal);
        fd.set_property(FretProperty::Strings, PropertyValue::Int(7));
        assert!(fd.has_dot(1));
        assert!(!fd.has_dot(0));
    }

    #[test]
    fn test_reset_uses_style() {
        let style = FretStyle { fret_frets: 5, ..Default::default() };
        let mut fd = FretDiagram::new();
        fd.reset_property(FretProperty::Frets, &style);
        assert_eq!(fd.frets(), 5);
    }

    #[test]
    fn test_value_coercions() {
        assert_eq!(PropertyValue::Real(2.6).to_int(), 3);
        assert_eq!(PropertyValue::Int(0).to_bool(), false);
        assert_eq!(PropertyValue::Bool(true).to_real(), 1.0);
    }
}
