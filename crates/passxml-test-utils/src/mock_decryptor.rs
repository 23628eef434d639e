// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A decryptor that treats store files as already decrypted.

use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use passxml_core::{Decrypted, Decryptor, PassXmlError};
use zeroize::Zeroizing;

/// Returns each file's bytes unchanged and records every path it was asked
/// to decrypt.
///
/// Files whose name was registered with [`PlaintextDecryptor::fail_on`] fail
/// the way a real decryptor does when the key is missing.
#[derive(Debug, Default)]
pub struct PlaintextDecryptor {
    failing: HashSet<String>,
    calls: RefCell<Vec<PathBuf>>,
}

impl PlaintextDecryptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make decryption of any file with this file name fail.
    pub fn fail_on(mut self, file_name: impl Into<String>) -> Self {
        self.failing.insert(file_name.into());
        self
    }

    /// Paths passed to [`Decryptor::decrypt`], in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl Decryptor for PlaintextDecryptor {
    fn name(&self) -> &str {
        "plaintext"
    }

    fn decrypt(&self, path: &Path) -> Result<Decrypted, PassXmlError> {
        self.calls.borrow_mut().push(path.to_path_buf());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(PassXmlError::Decrypt {
                path: path.to_path_buf(),
                message: "no secret key".to_string(),
                source: None,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| PassXmlError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Decrypted::from_bytes(Zeroizing::new(bytes)))
    }
}
