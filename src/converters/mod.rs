//! Format converters
//!
//! Fret diagrams are read from and written to the native score format
//! (`mscx`), MusicXML `<frame>` elements and the compact chord notation.

pub mod compact;
pub mod errors;
pub mod mscx;
pub mod musicxml_frame;

// Re-export for convenience
pub use compact::{from_string, parse_compact_strict};
pub use errors::{CompactError, ReadError, WriteError};
pub use mscx::{read_fret_diagram, write_fret_diagram};
pub use musicxml_frame::{read_frame, write_frame};
