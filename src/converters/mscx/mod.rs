//! Native score-file format for fret diagrams
//!
//! Two layouts of the `<FretDiagram>` element exist. Version 1 stores one dot
//! and one marker character per string and a single "has barre" flag;
//! version 2 stores typed dots, named markers and explicit barres. Both are
//! read into the same `FretDiagram`; only version 2 is written.

pub mod legacy;
pub mod reader;
pub mod writer;

pub use reader::{read_fret_diagram, read_fret_diagram_node};
pub use writer::{write_fret_diagram, write_fret_diagram_into};

/// Element name of a fret diagram
pub const FRET_DIAGRAM_TAG: &str = "FretDiagram";

/// Version written by [`write_fret_diagram`]
pub const CURRENT_VERSION: i32 = 2;
