// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for passxml.
//!
//! Lets tests run the full ingestion pipeline without GnuPG or keys.
//!
//! - [`PlaintextDecryptor`] - "decrypts" a file by reading it verbatim
//! - [`StoreFixture`] - a throwaway password store in a temp directory

pub mod fixture;
pub mod mock_decryptor;

pub use fixture::{StoreFixture, StoreFixtureBuilder};
pub use mock_decryptor::PlaintextDecryptor;
