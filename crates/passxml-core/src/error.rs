// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for passxml.

use std::path::PathBuf;

use thiserror::Error;

/// The primary error type used across the passxml crates.
///
/// Every variant is fatal to a run. Records that merely fail to decode as
/// text are not errors; they surface as [`crate::Decrypted::NotText`].
#[derive(Debug, Error)]
pub enum PassXmlError {
    /// Filesystem errors while reading the password store or writing output.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The external decryption program failed to run or exited non-zero.
    #[error("failed to decrypt {}: {message}", path.display())]
    Decrypt {
        path: PathBuf,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Directory traversal failed (permission denied, vanished entry, loop).
    #[error("failed to walk {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The output document could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),
}
