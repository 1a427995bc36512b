//! Models module for fret diagrams
//!
//! This module contains the data model of a chord diagram and the
//! small value types and settings it is built from.

pub mod fret_items;
pub mod fret_diagram;
pub mod harmony;
pub mod properties;
pub mod string_data;
pub mod style;

// Re-export commonly used types
pub use fret_items::{Barre, Dot, FretDotType, FretMarkerType, Marker};
pub use fret_diagram::{BarreMap, DotMap, FretDiagram, MarkerMap};
pub use harmony::{DiagramElement, Harmony};
pub use properties::{FretProperty, PropertyValue};
pub use string_data::StringData;
pub use style::{FretStyle, Placement};
