//! Chord symbol attached to a fret diagram
//!
//! A diagram owns at most one chord symbol. Anything else dropped onto a
//! diagram is refused.

use serde::{Deserialize, Serialize};

use crate::renderers::display_list::Rect;
use crate::renderers::font_metrics::FontMetrics;

/// Chord-symbol annotation (e.g. "Am7").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harmony {
    /// Display text
    pub name: String,
    /// Root as a tonal pitch class, when known
    pub root_tpc: Option<i32>,
    pub visible: bool,
    pub autoplace: bool,
    /// Vertical offset applied by the user, in layout units
    pub offset_y: f64,
    /// Text box relative to the harmony's origin, filled by `layout`
    #[serde(skip)]
    pub bbox: Rect,
}

impl Harmony {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root_tpc: None,
            visible: true,
            autoplace: true,
            offset_y: 0.0,
            bbox: Rect::default(),
        }
    }

    /// Compute the text box. The origin sits on the baseline at the left edge.
    pub fn layout(&mut self, metrics: &FontMetrics, font_size: f64) {
        let width = metrics.text_width(&self.name, font_size);
        let ascent = metrics.ascent(font_size);
        let height = metrics.height(font_size);
        self.bbox = Rect::new(0.0, -ascent, width, height);
    }
}

/// Element handed to a diagram through `add` or a drop.
#[derive(Clone, Debug, PartialEq)]
pub enum DiagramElement {
    Harmony(Harmony),
    /// Any other score element, identified by its type name
    Other(String),
}

impl DiagramElement {
    pub fn name(&self) -> &str {
        match self {
            DiagramElement::Harmony(_) => "Harmony",
            DiagramElement::Other(name) => name,
        }
    }

    pub fn is_harmony(&self) -> bool {
        matches!(self, DiagramElement::Harmony(_))
    }
}
