// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! passxml - convert a `pass` password store into KeePassXC-importable XML.
//!
//! The pipeline is: walk the store, decrypt every record, parse it, build
//! one entry per record, and serialize all groups as one XML document.

use std::io::Write;
use std::path::Path;

use passxml_config::PassXmlConfig;
use passxml_core::{Decryptor, PassXmlError};
use passxml_gpg::GpgDecryptor;
use passxml_store::{IngestReport, PasswordStore, StoreLayout};
use tracing::info;

/// Export the store at `store_root` as XML into `out`, decrypting with GnuPG.
pub fn export<W: Write>(
    store_root: &Path,
    config: &PassXmlConfig,
    out: W,
) -> Result<IngestReport, PassXmlError> {
    export_with(store_root, config, GpgDecryptor::new(&config.gpg), out)
}

/// Export the store at `store_root` using an arbitrary decryptor.
///
/// Nothing is written to `out` unless the whole store was read successfully.
pub fn export_with<D: Decryptor, W: Write>(
    store_root: &Path,
    config: &PassXmlConfig,
    decryptor: D,
    out: W,
) -> Result<IngestReport, PassXmlError> {
    let layout = StoreLayout::new(&config.store, &config.entry);
    let store = PasswordStore::open(store_root, layout, decryptor)?;
    let (document, report) = store.ingest()?;
    document.write_to(out)?;
    info!(
        groups = report.groups,
        entries = report.entries,
        skipped = report.skipped.len(),
        "document written"
    );
    Ok(report)
}

/// Install the global tracing subscriber. Logs go to stderr so stdout carries
/// only the document.
///
/// `RUST_LOG` overrides `log_level` when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("passxml={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
