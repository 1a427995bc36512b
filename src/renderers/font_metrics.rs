//! Font metrics for diagram labels
//!
//! The browser measures the label font once and passes the ratios in; every
//! value here is per unit of font size so one set of metrics serves all
//! magnifications.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FontMetrics {
    /// Font family the ratios were measured for
    pub family: String,
    /// Ascent / font size
    pub ascent: f64,
    /// Line height / font size
    pub height: f64,
    /// Advance of an average glyph / font size, used when no width is known
    pub average_char_width: f64,
    /// Measured advances per character / font size
    pub char_widths: Vec<(char, f64)>,
}

impl Default for FontMetrics {
    /// Approximate FreeSans metrics.
    fn default() -> Self {
        Self {
            family: "FreeSans".to_string(),
            ascent: 0.9,
            height: 1.15,
            average_char_width: 0.56,
            char_widths: Vec::new(),
        }
    }
}

impl FontMetrics {
    pub fn ascent(&self, font_size: f64) -> f64 {
        self.ascent * font_size
    }

    pub fn height(&self, font_size: f64) -> f64 {
        self.height * font_size
    }

    pub fn char_width(&self, c: char, font_size: f64) -> f64 {
        let ratio = self
            .char_widths
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, w)| *w)
            .unwrap_or(self.average_char_width);
        ratio * font_size
    }

    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().map(|c| self.char_width(c, font_size)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_scale_with_font_size() {
        let m = FontMetrics::default();
        assert_eq!(m.ascent(10.0), 9.0);
        assert_eq!(m.height(2.0), 2.3);
    }

    #[test]
    fn test_measured_widths_override_average() {
        let m = FontMetrics { char_widths: vec![('1', 0.5)], ..Default::default() };
        assert_eq!(m.text_width("11", 10.0), 10.0);
        assert!((m.text_width("X", 10.0) - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_partial_json() {
        let m: FontMetrics = serde_json::from_str(r#"{"ascent": 0.8}"#).unwrap();
        assert_eq!(m.ascent, 0.8);
        assert_eq!(m.height, 1.15);
    }
}
