// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password store traversal for passxml.
//!
//! Walks a `pass` store one top-level child at a time: every visible
//! directory becomes a group of all files beneath it, every visible file a
//! group of one. Each file is decrypted through a
//! [`Decryptor`](passxml_core::Decryptor), parsed, and turned into a KeePass
//! entry. Order follows the filesystem, not names.

pub mod ingest;
pub mod naming;

pub use ingest::{IngestReport, PasswordStore};
pub use naming::StoreLayout;
