//! WASM API for fret diagram editing
//!
//! JavaScript works on one diagram at a time. The editor (diagram, undo
//! history and layout settings) lives here; every call returns the data the
//! page needs to redraw.

use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, dot_type_from_u8, js_error, marker_type_from_u8, serialize};
use crate::converters::{from_string, musicxml_frame, read_fret_diagram, write_fret_diagram};
use crate::edit::FretDiagramEditor;
use crate::models::{FretDiagram, FretProperty, PropertyValue};
use crate::renderers::FretLayoutConfig;

// WASM-owned editor storage (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<FretDiagramEditor>> = Mutex::new(None);
}

/// Run `f` on the loaded editor.
fn with_editor<T>(f: impl FnOnce(&mut FretDiagramEditor) -> T) -> Result<T, JsValue> {
    let mut guard = EDITOR
        .lock()
        .map_err(|e| js_error(format!("Editor lock poisoned: {}", e)))?;
    let editor = guard
        .as_mut()
        .ok_or_else(|| js_error("No fret diagram loaded"))?;
    Ok(f(editor))
}

/// Install `diagram` in the editor, keeping the current layout settings.
fn install(diagram: FretDiagram) -> Result<JsValue, JsValue> {
    let mut guard = EDITOR
        .lock()
        .map_err(|e| js_error(format!("Editor lock poisoned: {}", e)))?;
    match guard.as_mut() {
        Some(editor) => editor.replace(diagram),
        None => *guard = Some(FretDiagramEditor::new(diagram)),
    }
    let editor = guard.as_ref().ok_or_else(|| js_error("No fret diagram loaded"))?;
    serialize(editor.diagram(), "Failed to serialize fret diagram")
}

fn snapshot(editor: &FretDiagramEditor) -> Result<JsValue, JsValue> {
    serialize(editor.diagram(), "Failed to serialize fret diagram")
}

/// Load a `<FretDiagram>` document (version 1 or 2)
#[wasm_bindgen(js_name = loadFretDiagram)]
pub fn load_fret_diagram(xml: &str) -> Result<JsValue, JsValue> {
    let diagram = read_fret_diagram(xml).map_err(|e| js_error(e.to_string()))?;
    log::info!("loaded fret diagram: {} strings, {} frets", diagram.strings(), diagram.frets());
    install(diagram)
}

/// Replace the diagram with one built from compact notation ("X32010")
#[wasm_bindgen(js_name = fretDiagramFromString)]
pub fn fret_diagram_from_string(notation: &str) -> Result<JsValue, JsValue> {
    install(from_string(notation))
}

/// Create an empty diagram
#[wasm_bindgen(js_name = newFretDiagram)]
pub fn new_fret_diagram() -> Result<JsValue, JsValue> {
    install(FretDiagram::new())
}

#[wasm_bindgen(js_name = getFretDiagram)]
pub fn get_fret_diagram() -> Result<JsValue, JsValue> {
    with_editor(|editor| snapshot(editor))?
}

/// Serialize the diagram as a version 2 `<FretDiagram>` element
#[wasm_bindgen(js_name = exportFretDiagram)]
pub fn export_fret_diagram() -> Result<String, JsValue> {
    with_editor(|editor| write_fret_diagram(editor.diagram()))?.map_err(|e| js_error(e.to_string()))
}

/// Serialize the diagram as a MusicXML `<frame>`
#[wasm_bindgen(js_name = exportFretDiagramMusicXml)]
pub fn export_fret_diagram_musicxml() -> Result<String, JsValue> {
    with_editor(|editor| musicxml_frame::write_frame(editor.diagram()))?.map_err(|e| js_error(e.to_string()))
}

/// Load the first `<frame>` of a MusicXML fragment
#[wasm_bindgen(js_name = importFretDiagramMusicXml)]
pub fn import_fret_diagram_musicxml(xml: &str) -> Result<JsValue, JsValue> {
    let diagram = musicxml_frame::read_frame(xml).map_err(|e| js_error(e.to_string()))?;
    install(diagram)
}

/// Apply a pointer click in diagram coordinates
///
/// Returns `{ target, diagram }`; `target` is null when the click missed.
#[wasm_bindgen(js_name = clickFretDiagram)]
pub fn click_fret_diagram(x: f64, y: f64, add: bool, barre: bool) -> Result<JsValue, JsValue> {
    #[derive(serde::Serialize)]
    struct ClickResult<'a> {
        target: Option<crate::renderers::HitTarget>,
        diagram: &'a FretDiagram,
    }

    with_editor(|editor| {
        let target = editor.click(x, y, add, barre);
        serialize(
            &ClickResult { target, diagram: editor.diagram() },
            "Failed to serialize click result",
        )
    })?
}

#[wasm_bindgen(js_name = setFretDot)]
pub fn set_fret_dot(string: i32, fret: i32, add: bool, dot_type: u8) -> Result<JsValue, JsValue> {
    let dtype = dot_type_from_u8(dot_type).map_err(js_error)?;
    with_editor(|editor| {
        editor.set_dot(string, fret, add, dtype);
        snapshot(editor)
    })?
}

#[wasm_bindgen(js_name = setFretMarker)]
pub fn set_fret_marker(string: i32, marker_type: u8) -> Result<JsValue, JsValue> {
    let mtype = marker_type_from_u8(marker_type).map_err(js_error)?;
    with_editor(|editor| {
        editor.set_marker(string, mtype);
        snapshot(editor)
    })?
}

/// Set or (with `start_string` -1) delete the barre at `fret`
#[wasm_bindgen(js_name = setFretBarre)]
pub fn set_fret_barre(start_string: i32, end_string: i32, fret: i32) -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        editor.set_barre(start_string, end_string, fret);
        snapshot(editor)
    })?
}

#[wasm_bindgen(js_name = toggleFretBarre)]
pub fn toggle_fret_barre(string: i32, fret: i32) -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        editor.toggle_barre(string, fret);
        snapshot(editor)
    })?
}

/// Set a property, e.g. `setFretProperty("fretOffset", 3)`
#[wasm_bindgen(js_name = setFretProperty)]
pub fn set_fret_property(property_js: JsValue, value_js: JsValue) -> Result<JsValue, JsValue> {
    let property: FretProperty = deserialize(property_js, "Invalid fret property")?;
    let value: PropertyValue = deserialize(value_js, "Invalid property value")?;
    with_editor(|editor| {
        editor.set_property(property, value);
        snapshot(editor)
    })?
}

#[wasm_bindgen(js_name = undoFretEdit)]
pub fn undo_fret_edit() -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        editor.undo().map_err(js_error)?;
        snapshot(editor)
    })?
}

#[wasm_bindgen(js_name = redoFretEdit)]
pub fn redo_fret_edit() -> Result<JsValue, JsValue> {
    with_editor(|editor| {
        editor.redo().map_err(js_error)?;
        snapshot(editor)
    })?
}

/// Lay out the diagram
///
/// `config_js` (a `FretLayoutConfig`: style, font metrics, attachment)
/// replaces the stored settings when given; `undefined` or `null` reuses them.
#[wasm_bindgen(js_name = computeFretLayout)]
pub fn compute_fret_layout(config_js: JsValue) -> Result<JsValue, JsValue> {
    let config: Option<FretLayoutConfig> = if config_js.is_undefined() || config_js.is_null() {
        None
    } else {
        Some(deserialize(config_js, "Invalid layout config")?)
    };

    with_editor(|editor| {
        if let Some(config) = config {
            editor.set_config(config);
        }
        serialize(&editor.layout(), "Failed to serialize fret layout")
    })?
}
