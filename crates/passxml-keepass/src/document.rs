// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The KeePass XML document: one `Root` group holding flat, named groups.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <KeePassFile>
//!   <Root>
//!     <Group>
//!       <Name>Root</Name>
//!       <Group>
//!         <Name>work</Name>
//!         <Entry>...</Entry>
//!       </Group>
//!     </Group>
//!   </Root>
//! </KeePassFile>
//! ```

use std::io::Write;

use passxml_core::PassXmlError;
use tracing::debug;

use crate::entry::Entry;
use crate::xml;

/// Name of the single top-level group every other group lives under.
pub const ROOT_GROUP_NAME: &str = "Root";

/// A named, ordered collection of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    entries: Vec<Entry>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Accumulates groups in insertion order and serializes them at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root_name: String,
    groups: Vec<Group>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            root_name: ROOT_GROUP_NAME.to_string(),
            groups: Vec::new(),
        }
    }

    /// Append a group. A group with the same name is never merged into; two
    /// directories that map to the same name produce two groups.
    pub fn add_group(&mut self, name: impl Into<String>, entries: Vec<Entry>) {
        let name = name.into();
        debug!(group = %name, entries = entries.len(), "group added");
        self.groups.push(Group { name, entries });
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// Serialize the whole document into a string.
    pub fn serialize(&self) -> Result<String, PassXmlError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|e| PassXmlError::Serialize(e.to_string()))
    }

    /// Serialize the whole document into `out`, followed by a newline.
    pub fn write_to<W: Write>(&self, out: W) -> Result<(), PassXmlError> {
        let mut writer = xml::new_writer(out);

        xml::write_decl(&mut writer)?;
        xml::start(&mut writer, "KeePassFile")?;
        xml::start(&mut writer, "Root")?;
        xml::start(&mut writer, "Group")?;
        xml::text_element(&mut writer, "Name", &self.root_name)?;

        for group in &self.groups {
            xml::start(&mut writer, "Group")?;
            xml::text_element(&mut writer, "Name", &group.name)?;
            for entry in &group.entries {
                xml::write_entry(&mut writer, entry)?;
            }
            xml::end(&mut writer, "Group")?;
        }

        xml::end(&mut writer, "Group")?;
        xml::end(&mut writer, "Root")?;
        xml::end(&mut writer, "KeePassFile")?;

        let mut out = writer.into_inner();
        out.write_all(b"\n")
            .and_then(|()| out.flush())
            .map_err(|e| PassXmlError::Serialize(e.to_string()))
    }
}
