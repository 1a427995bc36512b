//! Fret diagram WASM API
//!
//! This module provides the JavaScript-facing API for the chord diagram
//! editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation and error handling
//! - `diagram`: Loading, editing, undo, export and layout of the current diagram

pub mod helpers;
pub mod diagram;

// Re-export all public functions to keep the API flat
pub use diagram::*;
