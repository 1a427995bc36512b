//! Interactive editing of a fret diagram
//!
//! The editor owns one diagram together with its undo history and the layout
//! settings it is displayed with. Every gesture snapshots the dot, marker and
//! barre maps before and after the change and records the pair as a single
//! undo step.

use crate::models::{FretDiagram, FretDotType, FretMarkerType, FretProperty, PropertyValue};
use crate::renderers::{FretDisplayList, FretLayoutConfig, FretLayoutEngine, HitTarget};
use crate::undo::{Command, FretDataSnapshot, UndoStack};

#[derive(Debug, Clone)]
pub struct FretDiagramEditor {
    diagram: FretDiagram,
    undo_stack: UndoStack,
    config: FretLayoutConfig,
    engine: FretLayoutEngine,
    /// Shape placed by dot clicks
    dot_type: FretDotType,
}

impl FretDiagramEditor {
    pub fn new(diagram: FretDiagram) -> Self {
        Self::with_config(diagram, FretLayoutConfig::default())
    }

    pub fn with_config(diagram: FretDiagram, config: FretLayoutConfig) -> Self {
        Self {
            diagram,
            undo_stack: UndoStack::default(),
            config,
            engine: FretLayoutEngine::new(),
            dot_type: FretDotType::Normal,
        }
    }

    pub fn diagram(&self) -> &FretDiagram {
        &self.diagram
    }

    /// Swap in another diagram; its history starts empty.
    pub fn replace(&mut self, diagram: FretDiagram) {
        self.diagram = diagram;
        self.undo_stack.clear();
    }

    pub fn config(&self) -> &FretLayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FretLayoutConfig) {
        self.config = config;
    }

    pub fn dot_type(&self) -> FretDotType {
        self.dot_type
    }

    pub fn set_dot_type(&mut self, dtype: FretDotType) {
        self.dot_type = dtype;
    }

    pub fn layout(&self) -> FretDisplayList {
        self.engine.compute_layout(&self.diagram, &self.config)
    }

    /// Map a point in diagram coordinates to the marker row or a fret cell.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitTarget> {
        self.layout().hit_test(x, y)
    }

    /// Apply a pointer click at `(x, y)`.
    ///
    /// In the marker row the marker cycles none, circle, cross. On a fret
    /// cell `barre` runs the barre toggle; otherwise the dot there is
    /// removed, or placed (keeping the string's other dots when `add` is
    /// set). Returns what was hit.
    pub fn click(&mut self, x: f64, y: f64, add: bool, barre: bool) -> Option<HitTarget> {
        let target = self.hit_test(x, y)?;
        log::debug!("click at ({:.2}, {:.2}) hit {:?}", x, y, target);

        match target {
            HitTarget::Marker { string } => self.cycle_marker(string),
            HitTarget::Dot { string, fret } if barre => self.toggle_barre(string, fret),
            HitTarget::Dot { string, fret } => self.toggle_dot(string, fret, add),
        }

        Some(target)
    }

    pub fn cycle_marker(&mut self, string: i32) {
        let next = match self.diagram.marker(string).mtype {
            FretMarkerType::None => FretMarkerType::Circle,
            FretMarkerType::Circle => FretMarkerType::Cross,
            FretMarkerType::Cross => FretMarkerType::None,
        };
        self.set_marker(string, next);
    }

    pub fn toggle_dot(&mut self, string: i32, fret: i32, add: bool) {
        let dtype = self.dot_type;
        self.record(|fd| {
            let existing = fd.dot(string, fret)[0];
            if existing.exists() && existing.dtype == dtype {
                fd.remove_dot(string, fret);
            } else {
                fd.remove_dot(string, fret);
                fd.set_dot(string, fret, add, dtype);
            }
        });
    }

    pub fn set_dot(&mut self, string: i32, fret: i32, add: bool, dtype: FretDotType) {
        self.record(|fd| fd.set_dot(string, fret, add, dtype));
    }

    pub fn set_marker(&mut self, string: i32, mtype: FretMarkerType) {
        self.record(|fd| fd.set_marker(string, mtype));
    }

    pub fn set_barre(&mut self, start_string: i32, end_string: i32, fret: i32) {
        self.record(|fd| fd.set_barre(start_string, end_string, fret));
    }

    pub fn toggle_barre(&mut self, string: i32, fret: i32) {
        self.record(|fd| fd.toggle_barre(string, fret));
    }

    /// Change a scalar property as one undo step.
    pub fn set_property(&mut self, property: FretProperty, value: PropertyValue) {
        if property == FretProperty::Strings {
            // moves dots, markers and barres too
            self.record(|fd| fd.set_property(property, value));
            return;
        }

        let old = self.diagram.get_property(property);
        self.diagram.set_property(property, value);
        let new = self.diagram.get_property(property);
        self.undo_stack.push(Command::Property { property, old, new });
    }

    pub fn undo(&mut self) -> Result<(), String> {
        self.undo_stack.undo(&mut self.diagram)
    }

    pub fn redo(&mut self) -> Result<(), String> {
        self.undo_stack.redo(&mut self.diagram)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn record<F: FnOnce(&mut FretDiagram)>(&mut self, edit: F) {
        let before = FretDataSnapshot::capture(&self.diagram);
        edit(&mut self.diagram);
        let after = FretDataSnapshot::capture(&self.diagram);
        self.undo_stack.push(Command::FretData { before, after });
    }
}

impl Default for FretDiagramEditor {
    fn default() -> Self {
        Self::new(FretDiagram::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Barre, FretStyle};

    /// Editor with spatium 10: string distance 7, fret distance 8.
    fn editor() -> FretDiagramEditor {
        let config = FretLayoutConfig {
            style: FretStyle {
                spatium: 10.0,
                ..FretStyle::default()
            },
            ..FretLayoutConfig::default()
        };
        FretDiagramEditor::with_config(FretDiagram::new(), config)
    }

    #[test]
    fn test_marker_row_cycles() {
        let mut ed = editor();

        ed.click(7.0, -2.0, false, false);
        assert_eq!(ed.diagram().marker(1).mtype, FretMarkerType::Circle);
        ed.click(7.0, -2.0, false, false);
        assert_eq!(ed.diagram().marker(1).mtype, FretMarkerType::Cross);
        ed.click(7.0, -2.0, false, false);
        assert!(!ed.diagram().marker(1).exists());
    }

    #[test]
    fn test_dot_click_toggles() {
        let mut ed = editor();

        // string 2, fret 2
        assert_eq!(ed.click(14.0, 12.0, false, false), Some(HitTarget::Dot { string: 2, fret: 2 }));
        assert_eq!(ed.diagram().dot(2, 2)[0].fret, 2);

        ed.click(14.0, 12.0, false, false);
        assert!(!ed.diagram().has_dot(2));
    }

    #[test]
    fn test_add_mode_keeps_other_dots() {
        let mut ed = editor();
        ed.click(14.0, 4.0, false, false);
        ed.click(14.0, 20.0, true, false);
        assert_eq!(ed.diagram().dot(2, 0).len(), 2);

        ed.click(14.0, 12.0, false, false);
        assert_eq!(ed.diagram().dot(2, 0).len(), 1);
    }

    #[test]
    fn test_barre_click_runs_toggle() {
        let mut ed = editor();
        ed.click(7.0, 4.0, false, true);
        assert_eq!(ed.diagram().barre(1), Barre::new(1, -1));
        ed.click(28.0, 4.0, false, true);
        assert_eq!(ed.diagram().barre(1), Barre::new(1, 4));
        ed.click(28.0, 4.0, false, true);
        assert!(!ed.diagram().barre(1).exists());
    }

    #[test]
    fn test_each_click_is_one_undo_step() {
        let mut ed = editor();
        ed.click(7.0, 4.0, false, true);
        ed.click(14.0, 12.0, false, false);

        ed.undo().unwrap();
        assert!(!ed.diagram().has_dot(2));
        assert_eq!(ed.diagram().barre(1), Barre::new(1, -1));

        ed.undo().unwrap();
        assert!(ed.diagram().barres().is_empty());
        assert!(!ed.diagram().has_dot(1));
        assert!(!ed.can_undo());

        ed.redo().unwrap();
        assert_eq!(ed.diagram().barre(1), Barre::new(1, -1));
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut ed = editor();
        assert_eq!(ed.click(-20.0, 4.0, false, false), None);
        assert_eq!(ed.click(7.0, 500.0, false, false), None);
        assert!(!ed.can_undo());
    }

    #[test]
    fn test_property_changes_are_undoable() {
        let mut ed = editor();
        ed.set_dot(0, 1, false, FretDotType::Normal);
        ed.set_property(FretProperty::Strings, PropertyValue::Int(4));
        assert_eq!(ed.diagram().strings(), 4);
        assert!(!ed.diagram().has_dot(0));

        ed.undo().unwrap();
        assert_eq!(ed.diagram().strings(), 6);
        assert_eq!(ed.diagram().dot(0, 1)[0].fret, 1);

        ed.set_property(FretProperty::FretOffset, PropertyValue::Int(3));
        ed.undo().unwrap();
        assert_eq!(ed.diagram().fret_offset(), 0);
    }
}
