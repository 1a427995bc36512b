//! Writing `<FretDiagram>` elements (always version 2)

use std::io::{Cursor, Write};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{CURRENT_VERSION, FRET_DIAGRAM_TAG};
use crate::converters::errors::WriteError;
use crate::models::{FretDiagram, Harmony};

/// Serialize a diagram as an indented standalone `<FretDiagram>` element.
pub fn write_fret_diagram(fd: &FretDiagram) -> Result<String, WriteError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_fret_diagram_into(&mut writer, fd)?;
    let xml = String::from_utf8(writer.into_inner().into_inner())?;
    log::debug!("wrote fret diagram, {} bytes", xml.len());
    Ok(xml)
}

/// Write a `<FretDiagram>` element into an existing document.
///
/// Strings, frets and every placed dot, marker and barre are always written;
/// the remaining properties only when they differ from their defaults.
pub fn write_fret_diagram_into<W: Write>(writer: &mut Writer<W>, fd: &FretDiagram) -> Result<(), WriteError> {
    let mut root = BytesStart::new(FRET_DIAGRAM_TAG);
    root.push_attribute(("version", CURRENT_VERSION.to_string().as_str()));
    writer.write_event(Event::Start(root))?;

    write_text_element(writer, "strings", &fd.strings().to_string())?;
    write_text_element(writer, "frets", &fd.frets().to_string())?;
    if fd.fret_offset() > 0 {
        write_text_element(writer, "fretOffset", &fd.fret_offset().to_string())?;
    }
    if !fd.show_nut() {
        write_text_element(writer, "showNut", "0")?;
    }
    if fd.num_pos() == 1 {
        write_text_element(writer, "fretNumPos", "1")?;
    }

    for string in 0..fd.strings() {
        let marker = fd.marker(string);
        let dots: Vec<_> = fd.dot(string, 0).into_iter().filter(|d| d.exists()).collect();
        if !marker.exists() && dots.is_empty() {
            continue;
        }

        let mut element = BytesStart::new("string");
        element.push_attribute(("no", string.to_string().as_str()));
        writer.write_event(Event::Start(element))?;

        if marker.exists() {
            write_text_element(writer, "marker", marker.mtype.name())?;
        }
        for dot in dots {
            let mut element = BytesStart::new("dot");
            element.push_attribute(("fret", dot.fret.to_string().as_str()));
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Text(BytesText::new(dot.dtype.name())))?;
            writer.write_event(Event::End(BytesEnd::new("dot")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("string")))?;
    }

    for (fret, barre) in fd.barres() {
        if !barre.exists() {
            continue;
        }
        let mut element = BytesStart::new("barre");
        element.push_attribute(("start", barre.start_string.to_string().as_str()));
        element.push_attribute(("end", barre.end_string.to_string().as_str()));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&fret.to_string())))?;
        writer.write_event(Event::End(BytesEnd::new("barre")))?;
    }

    if fd.user_mag() != 1.0 {
        write_text_element(writer, "mag", &fd.user_mag().to_string())?;
    }

    if let Some(harmony) = fd.harmony() {
        write_harmony(writer, harmony)?;
    }

    writer.write_event(Event::End(BytesEnd::new(FRET_DIAGRAM_TAG)))?;
    Ok(())
}

fn write_harmony<W: Write>(writer: &mut Writer<W>, harmony: &Harmony) -> Result<(), WriteError> {
    writer.write_event(Event::Start(BytesStart::new("Harmony")))?;

    if let Some(root) = harmony.root_tpc {
        write_text_element(writer, "root", &root.to_string())?;
    }
    write_text_element(writer, "name", &harmony.name)?;
    if !harmony.visible {
        write_text_element(writer, "visible", "0")?;
    }
    if !harmony.autoplace {
        write_text_element(writer, "autoplace", "0")?;
    }
    if harmony.offset_y != 0.0 {
        let mut offset = BytesStart::new("offset");
        offset.push_attribute(("x", "0"));
        offset.push_attribute(("y", harmony.offset_y.to_string().as_str()));
        writer.write_event(Event::Empty(offset))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Harmony")))?;
    Ok(())
}

pub(crate) fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), WriteError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::mscx::read_fret_diagram;
    use crate::models::{DiagramElement, FretDotType, FretMarkerType};

    #[test]
    fn test_writes_version_two_with_required_counts() {
        let xml = write_fret_diagram(&FretDiagram::new()).unwrap();
        assert!(xml.starts_with("<FretDiagram version=\"2\">"));
        assert!(xml.contains("<strings>6</strings>"));
        assert!(xml.contains("<frets>4</frets>"));
        assert!(!xml.contains("fretOffset"));
        assert!(!xml.contains("<mag>"));
        assert!(!xml.contains("showNut"));
        assert!(!xml.contains("<string "));
    }

    #[test]
    fn test_only_strings_with_content_are_written() {
        let mut fd = FretDiagram::new();
        fd.set_marker(0, FretMarkerType::Cross);
        fd.set_dot(3, 2, false, FretDotType::Triangle);

        let xml = write_fret_diagram(&fd).unwrap();
        assert_eq!(xml.matches("<string ").count(), 2);
        assert!(xml.contains("<string no=\"0\">"));
        assert!(xml.contains("<marker>cross</marker>"));
        assert!(xml.contains("<dot fret=\"2\">triangle</dot>"));
    }

    #[test]
    fn test_non_default_properties_are_written() {
        let mut fd = FretDiagram::new();
        fd.set_fret_offset(4);
        fd.set_user_mag(1.5);
        fd.set_show_nut(false);
        fd.set_num_pos(1);
        fd.set_barre(1, 4, 2);

        let xml = write_fret_diagram(&fd).unwrap();
        assert!(xml.contains("<fretOffset>4</fretOffset>"));
        assert!(xml.contains("<mag>1.5</mag>"));
        assert!(xml.contains("<showNut>0</showNut>"));
        assert!(xml.contains("<fretNumPos>1</fretNumPos>"));
        assert!(xml.contains("<barre start=\"1\" end=\"4\">2</barre>"));
    }

    #[test]
    fn test_harmony_round_trip() {
        let mut fd = FretDiagram::new();
        let mut harmony = crate::models::Harmony::new("C&7");
        harmony.root_tpc = Some(14);
        harmony.autoplace = false;
        fd.add(DiagramElement::Harmony(harmony.clone()));

        let xml = write_fret_diagram(&fd).unwrap();
        assert!(xml.contains("<name>C&amp;7</name>"));

        let back = read_fret_diagram(&xml).unwrap();
        assert_eq!(back.harmony().unwrap().name, harmony.name);
        assert_eq!(back.harmony().unwrap().root_tpc, Some(14));
        assert!(!back.harmony().unwrap().autoplace);
    }
}
