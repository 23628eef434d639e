// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Low-level KeePass XML element writers.
//!
//! Text and attribute values go through quick-xml's escaping, which covers
//! `&`, `<`, `>`, `"` and `'`.

use std::io::Write;

use passxml_core::PassXmlError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::Entry;

const INDENT_WIDTH: usize = 2;

pub(crate) fn new_writer<W: Write>(out: W) -> Writer<W> {
    Writer::new_with_indent(out, b' ', INDENT_WIDTH)
}

pub(crate) fn write_decl<W: Write>(writer: &mut Writer<W>) -> Result<(), PassXmlError> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(xml_err)
}

pub(crate) fn start<W: Write>(writer: &mut Writer<W>, tag: &str) -> Result<(), PassXmlError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_err)
}

pub(crate) fn end<W: Write>(writer: &mut Writer<W>, tag: &str) -> Result<(), PassXmlError> {
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_err)
}

/// `<tag>text</tag>`
pub(crate) fn text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), PassXmlError> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))
        .map_err(xml_err)?;
    Ok(())
}

/// One `<Entry>` with its six `<String>` fields and the default auto-type block.
pub(crate) fn write_entry<W: Write>(
    writer: &mut Writer<W>,
    entry: &Entry,
) -> Result<(), PassXmlError> {
    start(writer, "Entry")?;

    for (key, value) in entry.fields() {
        start(writer, "String")?;
        text_element(writer, "Key", &key.to_string())?;

        let mut value_elem = writer.create_element("Value");
        if key.is_protected() {
            value_elem = value_elem.with_attribute(("ProtectInMemory", "True"));
        }
        value_elem
            .write_text_content(BytesText::new(value))
            .map_err(xml_err)?;

        end(writer, "String")?;
    }

    start(writer, "AutoType")?;
    text_element(writer, "Enabled", "True")?;
    text_element(writer, "DataTransferObfuscation", "0")?;
    writer
        .write_event(Event::Empty(BytesStart::new("DefaultSequence")))
        .map_err(xml_err)?;
    end(writer, "AutoType")?;

    end(writer, "Entry")
}

fn xml_err(e: impl std::fmt::Display) -> PassXmlError {
    PassXmlError::Serialize(e.to_string())
}
