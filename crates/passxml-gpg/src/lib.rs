// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GnuPG-backed [`Decryptor`](passxml_core::Decryptor) for passxml.
//!
//! Each store file is decrypted by running the configured program (`gpg` by
//! default) once, synchronously, and capturing its standard output. The
//! agent and pinentry handle passphrases; nothing is read from the terminal
//! here.

pub mod decryptor;

pub use decryptor::GpgDecryptor;
