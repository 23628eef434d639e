// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for passxml.
//!
//! This crate provides the error type, the decrypted-record types, the
//! [`Decryptor`] seam the traversal driver calls through, and the parser that
//! turns one decrypted `pass` blob into a structured [`Record`].

pub mod error;
pub mod record;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PassXmlError;
pub use record::parse_record;
pub use traits::Decryptor;
pub use types::{Decrypted, Record};
