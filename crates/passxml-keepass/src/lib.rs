// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! KeePass 2.x XML output for passxml.
//!
//! [`Entry`] is the six-field unit KeePass stores one secret as, built with
//! [`EntryBuilder`] or from a parsed record via [`Entry::from_record`].
//! [`Document`] collects entries into flat, named groups under a single
//! `Root` group and serializes the whole tree in one pass.
//!
//! Callers hand over raw strings; all markup escaping happens here.

pub mod document;
pub mod entry;
mod xml;

pub use document::{Document, Group, ROOT_GROUP_NAME};
pub use entry::{Entry, EntryBuilder, EntryIdentity, FieldKey};
