//! Reading `<FretDiagram>` elements
//!
//! The version attribute picks the parse path. Records inside the element are
//! applied to the model in document order through the normal edit
//! operations, so the model's own rules (marker/dot exclusivity, range
//! checks) hold for loaded data too.

use roxmltree::{Document, Node};

use super::legacy;
use super::FRET_DIAGRAM_TAG;
use crate::converters::errors::ReadError;
use crate::models::{DiagramElement, FretDiagram, FretDotType, FretMarkerType, Harmony};

/// Parse a standalone `<FretDiagram>` document.
pub fn read_fret_diagram(xml: &str) -> Result<FretDiagram, ReadError> {
    let doc = Document::parse(xml).map_err(|e| ReadError::InvalidXml(format!("XML parse error: {}", e)))?;
    read_fret_diagram_node(doc.root_element())
}

/// Read a `<FretDiagram>` element embedded in a larger document.
pub fn read_fret_diagram_node(node: Node) -> Result<FretDiagram, ReadError> {
    let tag = node.tag_name().name();
    if tag != FRET_DIAGRAM_TAG {
        return Err(ReadError::UnexpectedRoot {
            expected: FRET_DIAGRAM_TAG.to_string(),
            found: tag.to_string(),
        });
    }

    let version = match node.attribute("version") {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ReadError::InvalidXml(format!("invalid FretDiagram version '{}'", value)))?,
        None => 1,
    };

    match version {
        1 => Ok(legacy::read_v1(node)),
        2 => Ok(read_v2(node)),
        other => Err(ReadError::UnsupportedVersion(other)),
    }
}

fn read_v2(node: Node) -> FretDiagram {
    let mut fd = FretDiagram::new();

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
                            let fret = int_attribute(item, "fret", 0);
                            let dtype = FretDotType::from_name(text_of(item));
                            log::debug!("read dot, {}:{}", no, fret);
                            fd.set_dot(no, fret, true, dtype);
                        }
                        "marker" => fd.set_marker(no, FretMarkerType::from_name(text_of(item))),
                        "fingering" => {}
                        other => log::debug!("FretDiagram: skipping <{}> in <string>", other),
                    }
                }
            }
            "barre" => {
                let start = int_attribute(child, "start", -1);
                let end = int_attribute(child, "end", -1);
                let fret = parse_int(text_of(child), 0, "barre fret");
                fd.set_barre(start, end, fret);
            }
            other => log::debug!("FretDiagram: skipping <{}>", other),
        }
    }

    fd
}

/// Apply a record both versions share. Returns false when `node` is not one.
pub(crate) fn read_common_property(fd: &mut FretDiagram, node: Node) -> bool {
    match node.tag_name().name() {
        "strings" => fd.set_strings(parse_int(text_of(node), fd.strings(), "strings")),
        "frets" => fd.set_frets(parse_int(text_of(node), fd.frets(), "frets")),
        "fretOffset" => fd.set_fret_offset(parse_int(text_of(node), 0, "fretOffset")),
        "fretNumPos" => fd.set_num_pos(parse_int(text_of(node), 0, "fretNumPos")),
        "showNut" => fd.set_show_nut(parse_bool(text_of(node))),
        "mag" => fd.set_user_mag(parse_real(text_of(node), 1.0, "mag")),
        "Harmony" => fd.add(DiagramElement::Harmony(read_harmony(node))),
        _ => return false,
    }
    true
}

/// Read a nested `<Harmony>` chord symbol.
pub fn read_harmony(node: Node) -> Harmony {
    let mut harmony = Harmony::new("");

    for child in element_children(node) {
        match child.tag_name().name() {
            "name" => harmony.name = text_of(child).to_string(),
            "root" => harmony.root_tpc = Some(parse_int(text_of(child), 0, "harmony root")),
            "visible" => harmony.visible = parse_bool(text_of(child)),
            "autoplace" => harmony.autoplace = parse_bool(text_of(child)),
            "offset" => {
                harmony.offset_y = child
                    .attribute("y")
                    .map(|y| parse_real(y, 0.0, "harmony offset"))
                    .unwrap_or(0.0)
            }
            other => log::debug!("Harmony: skipping <{}>", other),
        }
    }

    harmony
}

// ============================================================================
// Node helpers
// ============================================================================

pub(crate) fn element_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

pub(crate) fn text_of<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().map(str::trim).unwrap_or("")
}

pub(crate) fn int_attribute(node: Node, name: &str, default: i32) -> i32 {
    match node.attribute(name) {
        Some(value) => parse_int(value, default, name),
        None => default,
    }
}

pub(crate) fn parse_int(text: &str, default: i32, context: &str) -> i32 {
    text.trim().parse().unwrap_or_else(|_| {
        log::warn!("FretDiagram: invalid {} value '{}', using {}", context, text, default);
        default
    })
}

pub(crate) fn parse_real(text: &str, default: f64, context: &str) -> f64 {
    text.trim().parse().unwrap_or_else(|_| {
        log::warn!("FretDiagram: invalid {} value '{}', using {}", context, text, default);
        default
    })
}

/// "1"/"0" as written, "true"/"false" accepted.
pub(crate) fn parse_bool(text: &str) -> bool {
    match text.trim() {
        "true" => true,
        "false" | "" => false,
        other => parse_int(other, 0, "boolean") != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Barre;

    #[test]
    fn test_read_v2_document() {
        let xml = r#"<FretDiagram version="2">
            <strings>6</strings>
            <frets>5</frets>
            <fretOffset>2</fretOffset>
            <string no="0"><marker>cross</marker></string>
            <string no="1"><dot fret="3">normal</dot></string>
            <string no="2"><dot fret="1">square</dot><dot fret="2">normal</dot></string>
            <barre start="2" end="-1">1</barre>
            <mag>1.5</mag>
        </FretDiagram>"#;
        let fd = read_fret_diagram(xml).unwrap();

        assert_eq!(fd.frets(), 5);
        assert_eq!(fd.fret_offset(), 2);
        assert_eq!(fd.user_mag(), 1.5);
        assert_eq!(fd.marker(0).mtype, FretMarkerType::Cross);
        assert_eq!(fd.dot(1, 3)[0].fret, 3);
        assert_eq!(fd.dot(2, 0).len(), 2);
        assert_eq!(fd.dot(2, 1)[0].dtype, FretDotType::Square);
        assert_eq!(fd.barre(1), Barre::new(2, -1));
    }

    #[test]
    fn test_unknown_names_degrade_without_failing() {
        let xml = r#"<FretDiagram version="2">
            <string no="0"><marker>wiggle</marker></string>
            <string no="1"><dot fret="2">hexagon</dot><fingering>3</fingering></string>
            <string no="x"><dot fret="2">normal</dot></string>
            <barre start="1" end="3">oops</barre>
            <somethingNew/>
        </FretDiagram>"#;
        let fd = read_fret_diagram(xml).unwrap();

        assert!(!fd.marker(0).exists());
        assert_eq!(fd.dot(1, 2)[0].dtype, FretDotType::Normal);
        assert!(!fd.barre(1).exists());
        assert!(fd.dot(3, 0).iter().all(|d| !d.exists()));
    }

    #[test]
    fn test_missing_version_means_legacy() {
        let xml = r#"<FretDiagram><string no="1"><dot>2</dot></string></FretDiagram>"#;
        let fd = read_fret_diagram(xml).unwrap();
        assert_eq!(fd.dot(1, 2)[0].fret, 2);
    }

    #[test]
    fn test_whole_document_errors() {
        assert!(matches!(read_fret_diagram("<FretDiagram>"), Err(ReadError::InvalidXml(_))));
        assert!(matches!(
            read_fret_diagram("<Harmony/>"),
            Err(ReadError::UnexpectedRoot { .. })
        ));
        assert_eq!(
            read_fret_diagram(r#"<FretDiagram version="7"/>"#),
            Err(ReadError::UnsupportedVersion(7))
        );
    }

    #[test]
    fn test_unparsable_version_is_an_error() {
        let xml = r#"<FretDiagram version="2.0"><barre start="0" end="5">1</barre></FretDiagram>"#;
        assert!(matches!(read_fret_diagram(xml), Err(ReadError::InvalidXml(_))));
        // absent still means the legacy layout
        assert!(read_fret_diagram("<FretDiagram/>").is_ok());
    }

    #[test]
    fn test_read_harmony_child() {
        let xml = r#"<FretDiagram version="2">
            <Harmony><root>14</root><name>m7</name><visible>0</visible><offset x="0" y="-3.5"/></Harmony>
        </FretDiagram>"#;
        let fd = read_fret_diagram(xml).unwrap();
        let h = fd.harmony().unwrap();
        assert_eq!(h.name, "m7");
        assert_eq!(h.root_tpc, Some(14));
        assert!(!h.visible);
        assert!(h.autoplace);
        assert_eq!(h.offset_y, -3.5);
    }

    #[test]
    fn test_parse_bool_forms() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool(""));
        assert!(!parse_bool("nope"));
    }
}
