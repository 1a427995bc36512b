//! Version 1 `<FretDiagram>` reader
//!
//! Version 1 had one dot per string with the fret as element text, markers
//! as a character code and no barre geometry at all, only a flag. A flagged
//! diagram gets a barre synthesized from its first dotted string.

use roxmltree::Node;

use super::reader::{element_children, int_attribute, parse_bool, parse_int, read_common_property, text_of};
use crate::models::{FretDiagram, FretDotType, FretMarkerType};

pub(crate) fn read_v1(node: Node) -> FretDiagram {
    let mut fd = FretDiagram::new();
    let mut has_barre = false;

    for child in element_children(node) {
        if read_common_property(&mut fd, child) {
            continue;
        }

        match child.tag_name().name() {
            "string" => {
                let no = int_attribute(child, "no", -1);
                for item in element_children(child) {
                    match item.tag_name().name() {
                        "dot" => {
                            let fret = parse_int(text_of(item), 0, "dot fret");
                            fd.set_dot(no, fret, false, FretDotType::Normal);
                        }
                        "marker" => fd.set_marker(no, marker_from_code(text_of(item))),
                        "fingering" => {}
                        other => log::debug!("FretDiagram v1: skipping <{}> in <string>", other),
                    }
                }
            }
            "barre" => has_barre = parse_bool(text_of(child)),
            other => log::debug!("FretDiagram v1: skipping <{}>", other),
        }
    }

    if has_barre {
        synthesize_barre(&mut fd);
    }

    fd
}

/// Version 1 markers are stored as a character code; 'X' is a cross and
/// anything else an open string.
fn marker_from_code(text: &str) -> FretMarkerType {
    let ch = match text.parse::<u32>() {
        Ok(code) => char::from_u32(code),
        Err(_) => text.chars().next(),
    };
    match ch {
        Some('X') => FretMarkerType::Cross,
        _ => FretMarkerType::Circle,
    }
}

/// Start a barre at the first string carrying a dot, at that dot's fret.
pub fn synthesize_barre(fd: &mut FretDiagram) {
    for string in 0..fd.strings() {
        if let Some(dot) = fd.dot(string, 0).into_iter().find(|d| d.exists()) {
            log::debug!("synthesizing legacy barre at {}:{}", string, dot.fret);
            fd.toggle_barre(string, dot.fret);
            return;
        }
    }
}
