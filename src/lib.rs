//! Fret Diagram WASM Module
//!
//! Chord diagram model, file formats and layout for the notation editor.
//! The core (`models`, `converters`, `renderers`, `undo`, `edit`) is plain
//! Rust; `api` exposes it to JavaScript.

pub mod models;
pub mod converters;
pub mod renderers;
pub mod undo;
pub mod edit;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use converters::{from_string, parse_compact_strict, read_fret_diagram, write_fret_diagram};
pub use converters::{CompactError, ReadError, WriteError};
pub use edit::FretDiagramEditor;
pub use renderers::{FretDisplayList, FretLayoutConfig, FretLayoutEngine};

use std::path::Path;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        // a logger may already be installed by the host page
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            log::warn!("console_log not installed: {}", e);
        }
    }

    log::info!("Fret diagram WASM module initialized");
}

/// Read a `<FretDiagram>` document from disk.
pub fn load_fret_diagram_file(path: impl AsRef<Path>) -> Result<FretDiagram, ReadError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|e| ReadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    read_fret_diagram(&xml)
}
