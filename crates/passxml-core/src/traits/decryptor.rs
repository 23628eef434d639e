// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decryptor trait for turning one encrypted store file into plaintext.

use std::path::Path;

use crate::error::PassXmlError;
use crate::types::Decrypted;

/// Decrypts a single file of the password store.
///
/// Called once per candidate file, sequentially, with an absolute path. An
/// implementation blocks until the plaintext is available. Plaintext that is
/// not valid UTF-8 is reported as [`Decrypted::NotText`]; any other failure
/// (missing key, wrong passphrase, program not found) is an `Err` and aborts
/// the run.
pub trait Decryptor {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Decrypt the file at `path`.
    fn decrypt(&self, path: &Path) -> Result<Decrypted, PassXmlError>;
}

impl<D: Decryptor + ?Sized> Decryptor for &D {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decrypt(&self, path: &Path) -> Result<Decrypted, PassXmlError> {
        (**self).decrypt(path)
    }
}
