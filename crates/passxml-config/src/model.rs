// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is an
//! error at startup rather than a silently ignored setting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level passxml configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PassXmlConfig {
    /// Diagnostic logging (always written to stderr).
    #[serde(default)]
    pub log: LogConfig,

    /// The external program that decrypts store files.
    #[serde(default)]
    pub gpg: GpgConfig,

    /// Layout conventions of the password store.
    #[serde(default)]
    pub store: StoreConfig,

    /// How entries are filled in from store files.
    #[serde(default)]
    pub entry: EntryConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Decryption program configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GpgConfig {
    /// Program name or path, resolved through `PATH`.
    #[serde(default = "default_gpg_program")]
    pub program: String,

    /// Extra arguments inserted before `--decrypt`, e.g. `["--pinentry-mode", "loopback"]`.
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for GpgConfig {
    fn default() -> Self {
        Self {
            program: default_gpg_program(),
            extra_args: Vec::new(),
        }
    }
}

fn default_gpg_program() -> String {
    "gpg".to_string()
}

/// Password store layout configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Suffix of encrypted files, stripped from group and entry names.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Names starting with this prefix are skipped at every level.
    #[serde(default = "default_hidden_prefix")]
    pub hidden_prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            hidden_prefix: default_hidden_prefix(),
        }
    }
}

fn default_suffix() -> String {
    ".gpg".to_string()
}

fn default_hidden_prefix() -> String {
    ".".to_string()
}

/// Entry construction configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    /// Where the entry's user name comes from.
    #[serde(default)]
    pub username_source: UsernameSource,
}

/// Source of an entry's `UserName` field.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UsernameSource {
    /// The file name without its suffix, same as the title.
    #[default]
    FileName,
    /// The record's `login:` line, falling back to the file name.
    Record,
}
