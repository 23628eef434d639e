// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the collaborators the traversal driver calls out to.

pub mod decryptor;

pub use decryptor::Decryptor;
