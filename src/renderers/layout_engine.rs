//! Fret Layout Engine - Computes diagram geometry and generates a FretDisplayList
//!
//! This module takes a fret diagram and the style/font measurements supplied
//! by JavaScript, performs every size and position calculation, and returns
//! a complete display list ready for painting. The engine holds no state:
//! the same inputs always give the same output, so it is simply re-run after
//! each edit or style change.

use serde::{Deserialize, Serialize};

use crate::models::style::POINTS_PER_SPATIUM20;
use crate::models::{FretDiagram, FretStyle, Placement};
use super::display_list::*;
use super::font_metrics::FontMetrics;
use super::skyline::Skyline;

/// Line thickness of strings and frets, in scaled spatium
const LINE_WIDTH_SP: f64 = 0.08;
/// Thickness of the nut, in scaled spatium
const NUT_WIDTH_SP: f64 = 0.2;
const STRING_DIST_SP: f64 = 0.7;
const FRET_DIST_SP: f64 = 0.8;
/// Dot diameter relative to string distance
const DOT_RATIO: f64 = 0.6;
/// Barre thickness relative to dot diameter, before the style ratio
const BARRE_RATIO: f64 = 0.8;
/// How far strings poke above the top line of a floating fragment, in scaled spatium
const STRING_OVERHANG_SP: f64 = 0.2;
/// Chord symbol font size, in scaled spatium
const HARMONY_FONT_SP: f64 = 2.0;

/// Where the diagram sits when it is attached to a line of music
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttachContext {
    /// Position of the parent segment in skyline coordinates
    pub origin: Point,
    /// Staff content already placed around the segment
    pub skyline: Skyline,
}

/// Configuration for fret layout calculations
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FretLayoutConfig {
    pub style: FretStyle,

    /// Label font measured by JavaScript
    pub metrics: FontMetrics,

    /// `None` for a diagram standing alone (palette, frame)
    pub attached: Option<AttachContext>,
}

/// Main layout engine for fret diagrams
#[derive(Debug, Default, Clone, Copy)]
pub struct FretLayoutEngine;

impl FretLayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the complete geometry of a diagram.
    pub fn compute_layout(&self, diagram: &FretDiagram, config: &FretLayoutConfig) -> FretDisplayList {
        let style = &config.style;
        let sp = style.spatium * diagram.user_mag() * style.fret_mag;

        let line_width = sp * LINE_WIDTH_SP;
        // A thick top line only when the diagram really starts at the nut
        let nut_width = if diagram.fret_offset() > 0 || !diagram.show_nut() {
            line_width
        } else {
            sp * NUT_WIDTH_SP
        };
        let string_dist = sp * STRING_DIST_SP;
        let fret_dist = sp * FRET_DIST_SP;
        let dot_diameter = string_dist * DOT_RATIO;

        let strings = diagram.strings().max(0);
        let frets = diagram.frets().max(0);
        let right_x = string_dist * (strings - 1).max(0) as f64;

        let font_size = style.font_point_size / POINTS_PER_SPATIUM20 * sp;
        let ascent = config.metrics.ascent(font_size);

        let bbox = self.bounding_box(right_x, frets, fret_dist, dot_diameter, line_width, &config.metrics, font_size);

        let pos = if config.attached.is_some() {
            Point::new(-sp, -bbox.height - style.fret_y_distance() + sp)
        } else {
            Point::default()
        };

        let nut = LineSegment {
            x1: -line_width * 0.5,
            y1: 0.0,
            x2: right_x + line_width * 0.5,
            y2: 0.0,
            width: nut_width,
            cap: LineCap::Flat,
        };

        let string_top = if diagram.fret_offset() > 0 { -sp * STRING_OVERHANG_SP } else { 0.0 };
        let string_bottom = (frets + 1) as f64 * fret_dist - fret_dist * 0.5;
        let string_lines = (0..strings)
            .map(|i| {
                let x = string_dist * i as f64;
                LineSegment { x1: x, y1: string_top, x2: x, y2: string_bottom, width: line_width, cap: LineCap::Flat }
            })
            .collect();

        let fret_lines = (1..=frets)
            .map(|i| {
                let y = fret_dist * i as f64;
                LineSegment { x1: 0.0, y1: y, x2: right_x, y2: y, width: line_width, cap: LineCap::Flat }
            })
            .collect();

        let dots = diagram
            .dots()
            .iter()
            .flat_map(|(&string, list)| list.iter().map(move |d| (string, *d)))
            .filter(|(_, d)| d.exists())
            .map(|(string, d)| RenderDot {
                string,
                fret: d.fret,
                cx: string_dist * string as f64,
                cy: row_center(d.fret, fret_dist),
                diameter: dot_diameter,
                shape: d.dtype,
            })
            .collect();

        let markers = diagram
            .markers()
            .iter()
            .filter_map(|(&string, marker)| {
                marker.mtype.glyph().map(|glyph| RenderMarker {
                    string,
                    glyph,
                    x: string_dist * string as f64,
                    y: -fret_dist * 0.3 - ascent,
                    font_size,
                })
            })
            .collect();

        let barre_width = dot_diameter * BARRE_RATIO * style.barre_line_width;
        let barres = diagram
            .barres()
            .iter()
            .filter(|(_, b)| b.exists())
            .map(|(&fret, b)| {
                let y = row_center(fret, fret_dist);
                let end_x = if b.is_open_ended() { right_x } else { string_dist * b.end_string as f64 };
                RenderBarre {
                    fret,
                    start_string: b.start_string,
                    end_string: b.resolved_end(strings),
                    line: LineSegment {
                        x1: string_dist * b.start_string as f64,
                        y1: y,
                        x2: end_x,
                        y2: y,
                        width: barre_width,
                        cap: LineCap::Round,
                    },
                }
            })
            .collect();

        let fret_number = (diagram.fret_offset() > 0).then(|| {
            let (x, align) = if diagram.num_pos() == 0 {
                (-string_dist * 0.4, TextAlign::Right)
            } else {
                (right_x + string_dist * 0.4, TextAlign::Left)
            };
            RenderFretNumber {
                text: (diagram.fret_offset() + 1).to_string(),
                x,
                y: fret_dist * 0.5,
                align,
                font_size: font_size * style.fret_num_mag,
            }
        });

        let harmony = self.layout_harmony(diagram, config, sp, right_x, &bbox, pos);

        FretDisplayList {
            bbox,
            pos,
            string_dist,
            fret_dist,
            line_width,
            nut_width,
            dot_diameter,
            nut,
            strings: string_lines,
            frets: fret_lines,
            dots,
            markers,
            barres,
            fret_number,
            harmony,
        }
    }

    /// Box around the grid plus room for the marker row above it.
    #[allow(clippy::too_many_arguments)]
    fn bounding_box(
        &self,
        right_x: f64,
        frets: i32,
        fret_dist: f64,
        dot_diameter: f64,
        line_width: f64,
        metrics: &FontMetrics,
        font_size: f64,
    ) -> Rect {
        let x = -((dot_diameter + line_width) * 0.5);
        let width = right_x + dot_diameter + line_width;

        let y = -(fret_dist * 0.1 + metrics.height(font_size));
        let height = frets as f64 * fret_dist + fret_dist * 0.5 - y;

        Rect::new(x, y, width, height)
    }

    /// Place the chord symbol centred above the diagram and, when attached,
    /// push it clear of the staff content.
    fn layout_harmony(
        &self,
        diagram: &FretDiagram,
        config: &FretLayoutConfig,
        sp: f64,
        right_x: f64,
        bbox: &Rect,
        pos: Point,
    ) -> Option<RenderHarmony> {
        let source = diagram.harmony()?;
        if !source.visible {
            return None;
        }

        let mut harmony = source.clone();
        harmony.layout(&config.metrics, sp * HARMONY_FONT_SP);

        let fret_dist = sp * FRET_DIST_SP;
        let origin_x = (right_x - harmony.bbox.width) * 0.5;
        let baseline = bbox.y - fret_dist * 0.2 + harmony.offset_y;
        let mut placed = harmony.bbox.translated(origin_x, baseline);

        let mut shift = 0.0;
        if let Some(attached) = config.attached.as_ref().filter(|_| harmony.autoplace) {
            let in_staff = placed.translated(attached.origin.x + pos.x, attached.origin.y + pos.y);
            shift = autoplace_shift(&in_staff, &attached.skyline, config.style.fret_placement, config.style.min_distance());
            placed = placed.translated(0.0, shift);
        }

        Some(RenderHarmony { text: harmony.name, bbox: placed, autoplace_shift: shift })
    }
}

/// Vertical centre of a fret row.
fn row_center(fret: i32, fret_dist: f64) -> f64 {
    fret_dist * (fret - 1) as f64 + fret_dist * 0.5
}

/// Vertical shift that keeps `r` at least `min_distance` away from the
/// skyline: upward when the diagram sits above the staff, downward when it
/// sits below. Zero when the clearance is already there.
pub fn autoplace_shift(r: &Rect, skyline: &Skyline, placement: Placement, min_distance: f64) -> f64 {
    match placement {
        Placement::Above => match skyline.min_distance_below(r) {
            Some(d) if d > -min_distance => -(d + min_distance),
            _ => 0.0,
        },
        Placement::Below => match skyline.min_distance_above(r) {
            Some(d) if d > -min_distance => d + min_distance,
            _ => 0.0,
        },
    }
}
