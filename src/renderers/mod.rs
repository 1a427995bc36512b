//! Renderers module for fret diagrams
//!
//! This module turns a diagram into positioned geometry; painting the
//! result is left to the JavaScript side.

pub mod layout_engine;
pub mod display_list;
pub mod font_metrics;
pub mod skyline;

// Re-export commonly used types
pub use layout_engine::{autoplace_shift, AttachContext, FretLayoutConfig, FretLayoutEngine};
pub use display_list::{
    FretDisplayList, HitTarget, LineCap, LineSegment, Point, Rect, RenderBarre, RenderDot, RenderFretNumber,
    RenderHarmony, RenderMarker, TextAlign,
};
pub use font_metrics::FontMetrics;
pub use skyline::Skyline;
