//! MusicXML `<frame>` (chord diagram) import and export
//!
//! MusicXML numbers strings from the highest-pitched one (1) and gives
//! absolute frets, with fret 0 for an open string. Muted strings have no
//! `<frame-note>`.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use roxmltree::{Document, Node};

use crate::converters::errors::{ReadError, WriteError};
use crate::converters::mscx::reader::{element_children, parse_int, text_of};
use crate::converters::mscx::writer::write_text_element;
use crate::models::{FretDiagram, FretDotType, FretMarkerType};

const FRAME_TAG: &str = "frame";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum BarreEnd {
    Start,
    Stop,
}

impl BarreEnd {
    fn as_str(self) -> &'static str {
        match self {
            BarreEnd::Start => "start",
            BarreEnd::Stop => "stop",
        }
    }
}

/// One `<frame-note>`, in diagram terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrameNote {
    string: i32,
    /// Absolute fret, 0 for an open string
    fret: i32,
    barre: Option<BarreEnd>,
}

/// Serialize a diagram as a standalone `<frame>` element.
pub fn write_frame(fd: &FretDiagram) -> Result<String, WriteError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_frame_into(&mut writer, fd)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Write a `<frame>` element into an existing MusicXML document.
pub fn write_frame_into<W: Write>(writer: &mut Writer<W>, fd: &FretDiagram) -> Result<(), WriteError> {
    writer.write_event(Event::Start(BytesStart::new(FRAME_TAG)))?;

    write_text_element(writer, "frame-strings", &fd.strings().to_string())?;
    write_text_element(writer, "frame-frets", &fd.frets().to_string())?;
    if fd.fret_offset() > 0 {
        write_text_element(writer, "first-fret", &(fd.fret_offset() + 1).to_string())?;
    }

    for note in frame_notes(fd) {
        writer.write_event(Event::Start(BytesStart::new("frame-note")))?;
        write_text_element(writer, "string", &(fd.strings() - note.string).to_string())?;
        write_text_element(writer, "fret", &note.fret.to_string())?;
        if let Some(end) = note.barre {
            let mut barre = BytesStart::new("barre");
            barre.push_attribute(("type", end.as_str()));
            writer.write_event(Event::Empty(barre))?;
        }
        writer.write_event(Event::End(BytesEnd::new("frame-note")))?;
    }

    writer.write_event(Event::End(BytesEnd::new(FRAME_TAG)))?;
    Ok(())
}

fn frame_notes(fd: &FretDiagram) -> Vec<FrameNote> {
    let offset = fd.fret_offset();
    let mut notes = Vec::new();

    for string in 0..fd.strings() {
        if fd.marker(string).mtype == FretMarkerType::Circle {
            notes.push(FrameNote { string, fret: 0, barre: None });
        }
        for dot in fd.dot(string, 0).into_iter().filter(|d| d.exists()) {
            notes.push(FrameNote {
                string,
                fret: dot.fret + offset,
                barre: None,
            });
        }
    }

    // Each barre end needs a note, existing or added.
    for (fret, barre) in fd.barres() {
        if !barre.exists() {
            continue;
        }
        let ends = [
            (barre.start_string, BarreEnd::Start),
            (barre.resolved_end(fd.strings()), BarreEnd::Stop),
        ];
        for (string, end) in ends {
            let fret = fret + offset;
            match notes.iter_mut().find(|n| n.string == string && n.fret == fret) {
                Some(note) => note.barre = Some(end),
                None => notes.push(FrameNote { string, fret, barre: Some(end) }),
            }
        }
    }

    notes.sort();
    notes
}

/// Parse a `<frame>` element from a MusicXML fragment. The first `<frame>`
/// in the document is used.
pub fn read_frame(xml: &str) -> Result<FretDiagram, ReadError> {
    let doc = Document::parse(xml).map_err(|e| ReadError::InvalidXml(format!("XML parse error: {}", e)))?;
    let frame = doc
        .descendants()
        .find(|n| n.has_tag_name(FRAME_TAG))
        .ok_or_else(|| ReadError::UnexpectedRoot {
            expected: FRAME_TAG.to_string(),
            found: doc.root_element().tag_name().name().to_string(),
        })?;
    Ok(read_frame_node(frame))
}

/// Build a diagram from a `<frame>` node. Strings without a note are muted.
pub fn read_frame_node(frame: Node) -> FretDiagram {
    let child_int = |name: &str, default: i32| {
        element_children(frame)
            .find(|n| n.has_tag_name(name))
            .map(|n| parse_int(text_of(n), default, name))
            .unwrap_or(default)
    };

    let mut fd = FretDiagram::new();
    fd.set_strings(child_int("frame-strings", fd.strings()));
    fd.set_frets(child_int("frame-frets", fd.frets()));
    let offset = (child_int("first-fret", 1) - 1).max(0);
    fd.set_fret_offset(offset);

    for string in 0..fd.strings() {
        fd.set_marker(string, FretMarkerType::Cross);
    }

    let mut barre_starts: BTreeMap<i32, i32> = BTreeMap::new();
    let mut barres: Vec<(i32, i32, i32)> = Vec::new();

    for note in element_children(frame).filter(|n| n.has_tag_name("frame-note")) {
        let mut string_no = -1;
        let mut fret = -1;
        let mut barre = None;
        for child in element_children(note) {
            match child.tag_name().name() {
                "string" => string_no = parse_int(text_of(child), -1, "frame-note string"),
                "fret" => fret = parse_int(text_of(child), -1, "frame-note fret"),
                "barre" => barre = child.attribute("type").map(str::to_string),
                "fingering" => {}
                other => log::debug!("frame-note: skipping <{}>", other),
            }
        }

        let string = fd.strings() - string_no;
        if string_no < 1 || string < 0 || fret < 0 {
            log::warn!("frame-note: ignoring string {} fret {}", string_no, fret);
            continue;
        }

        if fret == 0 {
            fd.set_marker(string, FretMarkerType::Circle);
            continue;
        }

        let relative = fret - offset;
        fd.set_dot(string, relative, true, FretDotType::Normal);
        match barre.as_deref() {
            Some("start") => {
                barre_starts.insert(relative, string);
            }
            Some("stop") => match barre_starts.remove(&relative) {
                Some(start) => barres.push((start, string, relative)),
                None => log::warn!("frame-note: barre stop without start at fret {}", fret),
            },
            _ => {}
        }
    }

    for (start, end, fret) in barres {
        fd.set_barre(start, end, fret);
    }

    fd
}
