//! Fret diagram model
//!
//! A `FretDiagram` holds the symbolic content of one chord diagram: dots per
//! string, at most one marker per string and at most one barre per fret, plus
//! the scalar settings that control what part of the neck is shown.
//!
//! Strings are zero-indexed columns, frets are one-indexed rows. All edit
//! operations ignore out-of-range strings instead of reporting them; callers
//! validate against `strings()` and `frets()` first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::fret_items::{Barre, Dot, FretDotType, FretMarkerType, Marker};
use super::harmony::{DiagramElement, Harmony};
use super::string_data::StringData;
use super::style::FretStyle;

/// Barres keyed by fret
pub type BarreMap = BTreeMap<i32, Barre>;
/// Markers keyed by string
pub type MarkerMap = BTreeMap<i32, Marker>;
/// Dots keyed by string, in insertion order
pub type DotMap = BTreeMap<i32, Vec<Dot>>;

pub const MIN_USER_MAG: f64 = 0.1;
pub const MAX_USER_MAG: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretDiagram {
    strings: i32,
    frets: i32,
    fret_offset: i32,
    max_frets: i32,
    show_nut: bool,
    user_mag: f64,
    /// 0 = fret number on the left, 1 = on the right
    num_pos: i32,
    barres: BarreMap,
    dots: DotMap,
    markers: MarkerMap,
    harmony: Option<Harmony>,
}

impl Default for FretDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl FretDiagram {
    /// Empty six-string, four-fret diagram starting at the nut.
    pub fn new() -> Self {
        Self {
            strings: 6,
            frets: 4,
            fret_offset: 0,
            max_frets: 24,
            show_nut: true,
            user_mag: 1.0,
            num_pos: 0,
            barres: BarreMap::new(),
            dots: DotMap::new(),
            markers: MarkerMap::new(),
            harmony: None,
        }
    }

    /// Empty diagram using the style's default string/fret settings.
    pub fn with_style(style: &FretStyle) -> Self {
        let mut diagram = Self::new();
        if style.fret_strings > 0 {
            diagram.strings = style.fret_strings;
        }
        diagram.frets = style.fret_frets.max(1);
        diagram.fret_offset = style.fret_offset.max(0);
        diagram.num_pos = style.fret_num_pos;
        diagram
    }

    // ------------------------------------------------------------------
    // Scalar settings
    // ------------------------------------------------------------------

    pub fn strings(&self) -> i32 {
        self.strings
    }

    pub fn frets(&self) -> i32 {
        self.frets
    }

    /// Existing dots and barres are not checked against the new count.
    pub fn set_frets(&mut self, n: i32) {
        self.frets = n;
    }

    pub fn fret_offset(&self) -> i32 {
        self.fret_offset
    }

    /// Only moves the visible window; dot fret numbers are unchanged.
    pub fn set_fret_offset(&mut self, offset: i32) {
        self.fret_offset = offset;
    }

    pub fn max_frets(&self) -> i32 {
        self.max_frets
    }

    pub fn set_max_frets(&mut self, max_frets: i32) {
        self.max_frets = max_frets;
    }

    pub fn show_nut(&self) -> bool {
        self.show_nut
    }

    pub fn set_show_nut(&mut self, show_nut: bool) {
        self.show_nut = show_nut;
    }

    pub fn user_mag(&self) -> f64 {
        self.user_mag
    }

    pub fn set_user_mag(&mut self, mag: f64) {
        self.user_mag = mag.clamp(MIN_USER_MAG, MAX_USER_MAG);
    }

    pub fn num_pos(&self) -> i32 {
        self.num_pos
    }

    pub fn set_num_pos(&mut self, pos: i32) {
        self.num_pos = pos;
    }

    fn is_valid_string(&self, string: i32) -> bool {
        (0..self.strings).contains(&string)
    }

    /// Change the number of strings.
    ///
    /// Strings are added or removed on the left, so every existing dot,
    /// marker and barre moves by the difference. Dots and markers pushed
    /// below string 0 are dropped, as is any barre whose start would land
    /// at or below string 0.
    pub fn set_strings(&mut self, n: i32) {
        let difference = n - self.strings;
        if difference == 0 || n <= 0 {
            return;
        }

        let mut dots = DotMap::new();
        let mut markers = MarkerMap::new();

        for string in 0..self.strings {
            let shifted = string + difference;
            if shifted < 0 {
                continue;
            }

            let existing: Vec<Dot> = self
                .dots
                .get(&string)
                .map(|list| list.iter().filter(|d| d.exists()).copied().collect())
                .unwrap_or_default();
            if !existing.is_empty() {
                dots.insert(shifted, existing);
            }

            let marker = self.marker(string);
            if marker.exists() {
                markers.insert(shifted, marker);
            }
        }

        self.dots = dots;
        self.markers = markers;

        self.barres = std::mem::take(&mut self.barres)
            .into_iter()
            .filter(|(_, barre)| barre.exists() && barre.start_string + difference > 0)
            .map(|(fret, barre)| {
                let end = if barre.is_open_ended() { -1 } else { barre.end_string + difference };
                (fret, Barre::new(barre.start_string + difference, end))
            })
            .collect();

        self.strings = n;
    }

    // ------------------------------------------------------------------
    // Dots
    // ------------------------------------------------------------------

    /// Place a dot. A fret of 0 removes the dots on `string` instead.
    ///
    /// Without `add` any dots already on the string are replaced. Placing a
    /// dot clears the string's marker.
    pub fn set_dot(&mut self, string: i32, fret: i32, add: bool, dtype: FretDotType) {
        if fret == 0 {
            self.remove_dot(string, fret);
        } else if self.is_valid_string(string) {
            let list = self.dots.entry(string).or_default();
            if !add {
                list.clear();
            }
            list.push(Dot::with_type(fret, dtype));

            self.set_marker(string, FretMarkerType::None);
        }
    }

    /// Remove the dots on `string` at `fret`, or all of them when `fret` is 0.
    pub fn remove_dot(&mut self, string: i32, fret: i32) {
        if fret > 0 {
            if let Some(list) = self.dots.get_mut(&string) {
                list.retain(|d| d.fret != fret);
                if list.is_empty() {
                    self.dots.remove(&string);
                }
            }
        } else {
            self.dots.remove(&string);
        }
    }

    /// Dots on `string`, or only the one at `fret` when `fret` is non-zero.
    ///
    /// Returns a single non-existent dot when nothing matches.
    pub fn dot(&self, string: i32, fret: i32) -> Vec<Dot> {
        if let Some(list) = self.dots.get(&string) {
            if fret != 0 {
                if let Some(d) = list.iter().find(|d| d.fret == fret) {
                    return vec![*d];
                }
            } else if !list.is_empty() {
                return list.clone();
            }
        }
        vec![Dot::default()]
    }

    /// Whether `string` carries any existing dot.
    pub fn has_dot(&self, string: i32) -> bool {
        self.dots
            .get(&string)
            .map_or(false, |list| list.iter().any(|d| d.exists()))
    }

    // ------------------------------------------------------------------
    // Markers
    // ------------------------------------------------------------------

    /// Set the marker above `string`. A marker other than `None` also removes
    /// the string's dots and every barre crossing it.
    pub fn set_marker(&mut self, string: i32, mtype: FretMarkerType) {
        if !self.is_valid_string(string) {
            return;
        }

        if mtype == FretMarkerType::None {
            self.markers.remove(&string);
            return;
        }

        self.markers.insert(string, Marker::new(mtype));
        self.remove_dot(string, 0);
        self.remove_barres(string, 0);
    }

    pub fn remove_marker(&mut self, string: i32) {
        self.markers.remove(&string);
    }

    pub fn marker(&self, string: i32) -> Marker {
        self.markers.get(&string).copied().unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Barres
    // ------------------------------------------------------------------

    /// Set the barre on `fret`.
    ///
    /// A start string of -1 removes the barre; an end string of -1 makes it
    /// run to the last string.
    pub fn set_barre(&mut self, start_string: i32, end_string: i32, fret: i32) {
        if start_string == -1 {
            self.remove_barre(fret);
        } else if start_string >= 0
            && end_string >= -1
            && start_string < self.strings
            && end_string < self.strings
        {
            self.barres.insert(fret, Barre::new(start_string, end_string));
        }
    }

    /// Click-driven barre editing on `fret`.
    ///
    /// 1. No barre yet: start an open-ended barre at `string` (unless it is
    ///    the last string), clearing dots and markers it crosses, and put a
    ///    dot on `string`.
    /// 2. Open-ended barre starting left of `string`: end it at `string`.
    /// 3. Anything else: clear the dots and markers under the barre and
    ///    delete it.
    pub fn toggle_barre(&mut self, string: i32, fret: i32) {
        if !self.is_valid_string(string) {
            return;
        }

        let barre = self.barre(fret);

        if !barre.exists() {
            if string < self.strings - 1 {
                self.barres.insert(fret, Barre::new(string, -1));
                self.remove_dots_markers(string, -1, fret);
                self.set_dot(string, fret, false, FretDotType::Normal);
            }
        } else if barre.is_open_ended() && barre.start_string < string {
            self.barres.insert(fret, Barre::new(barre.start_string, string));
            self.set_dot(string, fret, false, FretDotType::Normal);
        } else {
            self.remove_dots_markers(barre.start_string, barre.end_string, fret);
            self.remove_barre(fret);
        }
    }

    pub fn remove_barre(&mut self, fret: i32) {
        self.barres.remove(&fret);
    }

    /// Remove barres crossing `string`, on every fret or only on `fret` when
    /// it is non-zero.
    pub fn remove_barres(&mut self, string: i32, fret: i32) {
        self.barres
            .retain(|&bfret, barre| !(barre.covers(string) && (fret <= 0 || fret == bfret)));
    }

    pub fn barre(&self, fret: i32) -> Barre {
        self.barres.get(&fret).copied().unwrap_or_default()
    }

    /// Remove markers on strings `start..=end` and their dots at `fret`.
    /// An end of -1 means the last string.
    pub fn remove_dots_markers(&mut self, start_string: i32, end_string: i32, fret: i32) {
        if start_string == -1 {
            return;
        }

        let end = if end_string == -1 { self.strings - 1 } else { end_string };
        for string in start_string..=end {
            self.remove_dot(string, fret);
            self.remove_marker(string);
        }
    }

    // ------------------------------------------------------------------
    // Bulk access, for snapshot-based undo
    // ------------------------------------------------------------------

    pub fn barres(&self) -> BarreMap {
        self.barres.clone()
    }

    pub fn dots(&self) -> DotMap {
        self.dots.clone()
    }

    pub fn markers(&self) -> MarkerMap {
        self.markers.clone()
    }

    /// Replaces the barres wholesale without any checks. Undo only.
    pub fn set_barres(&mut self, barres: BarreMap) {
        self.barres = barres;
    }

    /// Replaces the dots wholesale without any checks. Undo only.
    pub fn set_dots(&mut self, dots: DotMap) {
        self.dots = dots;
    }

    /// Replaces the markers wholesale without any checks. Undo only.
    pub fn set_markers(&mut self, markers: MarkerMap) {
        self.markers = markers;
    }

    // ------------------------------------------------------------------
    // Chord symbol
    // ------------------------------------------------------------------

    pub fn harmony(&self) -> Option<&Harmony> {
        self.harmony.as_ref()
    }

    pub fn harmony_mut(&mut self) -> Option<&mut Harmony> {
        self.harmony.as_mut()
    }

    /// Attach a child element. Only chord symbols are accepted.
    pub fn add(&mut self, element: DiagramElement) {
        match element {
            DiagramElement::Harmony(harmony) => self.harmony = Some(harmony),
            other => log::warn!("FretDiagram: cannot add <{}>", other.name()),
        }
    }

    /// Detach and return the chord symbol.
    pub fn remove_harmony(&mut self) -> Option<Harmony> {
        self.harmony.take()
    }

    pub fn accept_drop(&self, element: &DiagramElement) -> bool {
        element.is_harmony()
    }

    // ------------------------------------------------------------------
    // Initialization from a chord
    // ------------------------------------------------------------------

    /// Seed the diagram from chord pitches played on `string_data`.
    ///
    /// Every string starts muted; each pitch that fits the neck becomes a dot,
    /// or an open-string marker when it is the open pitch.
    pub fn init(&mut self, string_data: Option<&StringData>, pitches: &[i32]) {
        let Some(string_data) = string_data else {
            self.set_strings(6);
            self.max_frets = 6;
            return;
        };

        self.set_strings(string_data.strings());
        for string in 0..self.strings {
            self.set_marker(string, FretMarkerType::Cross);
        }

        for &pitch in pitches {
            match string_data.convert_pitch(pitch) {
                Some((string, 0)) => self.set_marker(string, FretMarkerType::Circle),
                Some((string, fret)) => self.set_dot(string, fret, false, FretDotType::Normal),
                None => log::debug!("pitch {} does not fit on the neck", pitch),
            }
        }

        self.max_frets = string_data.frets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot_frets(diagram: &FretDiagram, string: i32) -> Vec<i32> {
        diagram
            .dot(string, 0)
            .into_iter()
            .filter(|d| d.exists())
            .map(|d| d.fret)
            .collect()
    }

    #[test]
    fn test_new_diagram_is_empty() {
        let fd = FretDiagram::new();
        assert_eq!(fd.strings(), 6);
        assert_eq!(fd.frets(), 4);
        assert_eq!(fd.fret_offset(), 0);
        assert!(fd.dots().is_empty());
        assert!(fd.markers().is_empty());
        assert!(fd.barres().is_empty());
        assert!(!fd.barre(1).exists());
        assert!(!fd.marker(0).exists());
        assert_eq!(fd.dot(0, 0), vec![Dot::default()]);
    }

    #[test]
    fn test_set_dot_replaces_unless_adding() {
        let mut fd = FretDiagram::new();
        fd.set_dot(1, 2, false, FretDotType::Normal);
        fd.set_dot(1, 3, false, FretDotType::Normal);
        assert_eq!(dot_frets(&fd, 1), vec![3]);

        fd.set_dot(1, 1, true, FretDotType::Square);
        assert_eq!(dot_frets(&fd, 1), vec![3, 1]);
        assert_eq!(fd.dot(1, 1)[0].dtype, FretDotType::Square);
    }

    #[test]
    fn test_set_dot_zero_fret_removes_all() {
        let mut fd = FretDiagram::new();
        fd.set_dot(2, 1, true, FretDotType::Normal);
        fd.set_dot(2, 3, true, FretDotType::Normal);
        fd.set_dot(2, 0, false, FretDotType::Normal);
        assert!(!fd.has_dot(2));
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut fd = FretDiagram::new();
        fd.set_dot(6, 1, false, FretDotType::Normal);
        fd.set_dot(-1, 1, false, FretDotType::Normal);
        fd.set_marker(7, FretMarkerType::Cross);
        fd.set_barre(0, 6, 1);
        fd.set_barre(6, -1, 1);
        fd.toggle_barre(9, 2);
        assert_eq!(fd, FretDiagram::new());
    }

    #[test]
    fn test_marker_and_dot_are_exclusive() {
        let mut fd = FretDiagram::new();
        for string in 0..fd.strings() {
            fd.set_dot(string, 2, true, FretDotType::Normal);
            fd.set_dot(string, 3, true, FretDotType::Normal);
            fd.set_marker(string, FretMarkerType::Circle);
            for fret in 0..=fd.frets() {
                assert!(fd.dot(string, fret).iter().all(|d| !d.exists()));
            }

            fd.set_dot(string, 1, false, FretDotType::Normal);
            assert_eq!(fd.marker(string).mtype, FretMarkerType::None);
        }
    }

    #[test]
    fn test_marker_removes_crossing_barres() {
        let mut fd = FretDiagram::new();
        fd.set_barre(1, 3, 1);
        fd.set_barre(0, -1, 2);
        fd.set_barre(4, 5, 3);
        fd.set_marker(2, FretMarkerType::Cross);
        assert!(!fd.barre(1).exists());
        assert!(!fd.barre(2).exists());
        assert!(fd.barre(3).exists());
    }

    #[test]
    fn test_marker_none_does_not_cascade() {
        let mut fd = FretDiagram::new();
        fd.set_barre(0, -1, 1);
        fd.set_dot(2, 1, false, FretDotType::Normal);
        fd.set_marker(2, FretMarkerType::None);
        assert!(fd.barre(1).exists());
        assert!(fd.has_dot(2));
    }

    #[test]
    fn test_remove_dot_keeps_order_of_others() {
        let mut fd = FretDiagram::new();
        for fret in [4, 2, 3] {
            fd.set_dot(0, fret, true, FretDotType::Normal);
        }
        fd.remove_dot(0, 2);
        assert_eq!(dot_frets(&fd, 0), vec![4, 3]);
        fd.remove_dot(0, 0);
        assert!(!fd.has_dot(0));
    }

    #[test]
    fn test_set_barre_start_minus_one_deletes() {
        let mut fd = FretDiagram::new();
        fd.set_barre(1, -1, 2);
        assert_eq!(fd.barre(2), Barre::new(1, -1));
        fd.set_barre(-1, -1, 2);
        assert!(!fd.barre(2).exists());
        // deleting again is harmless
        fd.remove_barre(2);
    }

    #[test]
    fn test_toggle_barre_state_machine() {
        let mut fd = FretDiagram::new();

        fd.toggle_barre(1, 3);
        assert_eq!(fd.barre(3), Barre::new(1, -1));
        assert_eq!(dot_frets(&fd, 1), vec![3]);

        fd.toggle_barre(4, 3);
        assert_eq!(fd.barre(3), Barre::new(1, 4));
        assert_eq!(dot_frets(&fd, 4), vec![3]);

        fd.toggle_barre(5, 3);
        assert!(!fd.barre(3).exists());
        assert!(!fd.has_dot(1));
        assert!(!fd.has_dot(4));
    }

    #[test]
    fn test_toggle_barre_on_last_string_does_nothing() {
        let mut fd = FretDiagram::new();
        fd.toggle_barre(5, 1);
        assert!(!fd.barre(1).exists());
        assert!(!fd.has_dot(5));
    }

    #[test]
    fn test_toggle_barre_clears_markers_in_span() {
        let mut fd = FretDiagram::new();
        fd.set_marker(0, FretMarkerType::Cross);
        fd.set_marker(3, FretMarkerType::Circle);
        fd.set_dot(4, 2, false, FretDotType::Normal);
        fd.set_dot(5, 1, false, FretDotType::Normal);

        fd.toggle_barre(2, 1);
        assert!(fd.marker(0).exists());
        assert!(!fd.marker(3).exists());
        assert_eq!(dot_frets(&fd, 4), vec![2]);
        assert!(!fd.has_dot(5));
    }

    #[test]
    fn test_toggle_barre_click_left_of_open_start_deletes() {
        let mut fd = FretDiagram::new();
        fd.toggle_barre(3, 2);
        fd.toggle_barre(1, 2);
        assert!(!fd.barre(2).exists());
    }

    #[test]
    fn test_remove_barres_restricted_to_fret() {
        let mut fd = FretDiagram::new();
        fd.set_barre(0, 3, 1);
        fd.set_barre(1, -1, 2);
        fd.remove_barres(2, 2);
        assert!(fd.barre(1).exists());
        assert!(!fd.barre(2).exists());
        fd.remove_barres(2, 0);
        assert!(!fd.barre(1).exists());
    }

    #[test]
    fn test_remove_dots_markers_open_end_reaches_last_string() {
        let mut fd = FretDiagram::new();
        for string in 0..6 {
            fd.set_dot(string, 2, false, FretDotType::Normal);
        }
        fd.set_marker(1, FretMarkerType::Cross);
        fd.remove_dots_markers(2, -1, 2);
        assert!(fd.has_dot(0));
        assert!(fd.marker(1).exists());
        for string in 2..6 {
            assert!(!fd.has_dot(string));
        }

        fd.remove_dots_markers(-1, -1, 2);
        assert!(fd.has_dot(0));
    }

    #[test]
    fn test_set_strings_adds_on_the_left() {
        let mut fd = FretDiagram::new();
        fd.set_dot(0, 1, false, FretDotType::Normal);
        fd.set_marker(5, FretMarkerType::Circle);
        fd.set_barre(1, 3, 2);
        fd.set_barre(2, -1, 3);

        fd.set_strings(8);
        assert_eq!(fd.strings(), 8);
        assert_eq!(dot_frets(&fd, 2), vec![1]);
        assert!(!fd.has_dot(0));
        assert_eq!(fd.marker(7).mtype, FretMarkerType::Circle);
        assert_eq!(fd.barre(2), Barre::new(3, 5));
        assert_eq!(fd.barre(3), Barre::new(4, -1));
    }

    #[test]
    fn test_set_strings_round_trip() {
        let mut fd = FretDiagram::new();
        fd.set_dot(0, 1, false, FretDotType::Normal);
        fd.set_dot(3, 2, true, FretDotType::Normal);
        fd.set_dot(3, 4, true, FretDotType::Normal);
        fd.set_marker(5, FretMarkerType::Cross);
        fd.set_barre(1, -1, 3);
        let original = fd.clone();

        fd.set_strings(9);
        fd.set_strings(6);
        assert_eq!(fd, original);
    }

    #[test]
    fn test_set_strings_decrease_drops_shifted_out() {
        let mut fd = FretDiagram::new();
        fd.set_dot(0, 1, false, FretDotType::Normal);
        fd.set_dot(2, 2, false, FretDotType::Normal);
        fd.set_marker(1, FretMarkerType::Cross);
        fd.set_barre(2, 4, 3);
        fd.set_barre(3, -1, 4);

        fd.set_strings(4);
        assert_eq!(dot_frets(&fd, 0), vec![2]);
        assert!(!fd.marker(0).exists());
        assert_eq!(fd.markers().len(), 0);
        // start would land on string 0
        assert!(!fd.barre(3).exists());
        assert_eq!(fd.barre(4), Barre::new(1, -1));
    }

    #[test]
    fn test_set_strings_ignores_non_positive() {
        let mut fd = FretDiagram::new();
        fd.set_dot(1, 1, false, FretDotType::Normal);
        fd.set_strings(0);
        fd.set_strings(-3);
        assert_eq!(fd.strings(), 6);
        assert!(fd.has_dot(1));
    }

    #[test]
    fn test_set_frets_does_not_validate() {
        let mut fd = FretDiagram::new();
        fd.set_dot(0, 4, false, FretDotType::Normal);
        fd.set_barre(0, -1, 4);
        fd.set_frets(2);
        assert_eq!(fd.frets(), 2);
        assert!(fd.has_dot(0));
        assert!(fd.barre(4).exists());
    }

    #[test]
    fn test_user_mag_is_clamped() {
        let mut fd = FretDiagram::new();
        fd.set_user_mag(0.01);
        assert_eq!(fd.user_mag(), MIN_USER_MAG);
        fd.set_user_mag(50.0);
        assert_eq!(fd.user_mag(), MAX_USER_MAG);
        fd.set_user_mag(1.5);
        assert_eq!(fd.user_mag(), 1.5);
    }

    #[test]
    fn test_bulk_maps_restore_state() {
        let mut fd = FretDiagram::new();
        fd.set_dot(1, 2, false, FretDotType::Normal);
        fd.set_marker(0, FretMarkerType::Cross);
        fd.set_barre(2, -1, 1);
        let (dots, markers, barres) = (fd.dots(), fd.markers(), fd.barres());

        fd.toggle_barre(3, 2);
        fd.set_marker(1, FretMarkerType::Circle);

        fd.set_dots(dots);
        fd.set_markers(markers);
        fd.set_barres(barres);
        assert_eq!(dot_frets(&fd, 1), vec![2]);
        assert_eq!(fd.marker(0).mtype, FretMarkerType::Cross);
        assert_eq!(fd.barre(1), Barre::new(2, -1));
        assert!(!fd.barre(2).exists());
    }

    #[test]
    fn test_only_harmony_can_be_added() {
        let mut fd = FretDiagram::new();
        let text = DiagramElement::Other("StaffText".to_string());
        assert!(!fd.accept_drop(&text));
        fd.add(text);
        assert!(fd.harmony().is_none());

        let chord = DiagramElement::Harmony(Harmony::new("G"));
        assert!(fd.accept_drop(&chord));
        fd.add(chord);
        assert_eq!(fd.harmony().map(|h| h.name.as_str()), Some("G"));

        let copy = fd.clone();
        assert_eq!(fd.remove_harmony().map(|h| h.name), Some("G".to_string()));
        assert!(fd.harmony().is_none());
        assert!(copy.harmony().is_some());
    }

    #[test]
    fn test_init_from_chord() {
        let mut fd = FretDiagram::new();
        // C major: C3 E3 G3 C4 E4
        fd.init(Some(&StringData::guitar()), &[48, 52, 55, 60, 64]);
        assert_eq!(fd.max_frets(), 19);
        assert_eq!(fd.marker(0).mtype, FretMarkerType::Cross);
        assert_eq!(dot_frets(&fd, 1), vec![3]);
        assert_eq!(dot_frets(&fd, 2), vec![2]);
        assert_eq!(fd.marker(3).mtype, FretMarkerType::Circle);
        assert_eq!(dot_frets(&fd, 4), vec![1]);
        assert_eq!(fd.marker(5).mtype, FretMarkerType::Circle);
    }

    #[test]
    fn test_init_without_string_data() {
        let mut fd = FretDiagram::new();
        fd.set_strings(4);
        fd.init(None, &[60]);
        assert_eq!(fd.strings(), 6);
        assert_eq!(fd.max_frets(), 6);
    }

    #[test]
    fn test_with_style_uses_defaults() {
        let style = FretStyle { fret_strings: 4, fret_frets: 5, fret_num_pos: 1, ..Default::default() };
        let fd = FretDiagram::with_style(&style);
        assert_eq!(fd.strings(), 4);
        assert_eq!(fd.frets(), 5);
        assert_eq!(fd.num_pos(), 1);
    }
}
