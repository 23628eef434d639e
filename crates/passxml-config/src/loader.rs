// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./passxml.toml` > `~/.config/passxml/passxml.toml` >
//! `/etc/passxml/passxml.toml`, with `PASSXML_` environment variables on top.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::CONFIG_FILE_NAME;
use crate::model::PassXmlConfig;

const SYSTEM_CONFIG: &str = "/etc/passxml/passxml.toml";

/// Config file locations, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("passxml").join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

/// Load configuration from the file hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/passxml/passxml.toml`
/// 3. `~/.config/passxml/passxml.toml`
/// 4. `./passxml.toml`
/// 5. `PASSXML_*` environment variables
pub fn load_config() -> Result<PassXmlConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<PassXmlConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PassXmlConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(PassXmlConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Environment provider mapping `PASSXML_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `hidden_prefix` and `extra_args` contain underscores themselves.
fn env_provider() -> Env {
    Env::prefixed("PASSXML_").map(|key| {
        key.as_str()
            .replacen("log_", "log.", 1)
            .replacen("gpg_", "gpg.", 1)
            .replacen("store_", "store.", 1)
            .replacen("entry_", "entry.", 1)
            .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UsernameSource;

    #[test]
    fn local_file_has_highest_file_precedence() {
        let paths = config_file_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(SYSTEM_CONFIG)));
        assert_eq!(paths.last(), Some(&PathBuf::from(CONFIG_FILE_NAME)));
    }

    #[test]
    fn env_vars_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PASSXML_GPG_PROGRAM", "gpg2");
            jail.set_env("PASSXML_STORE_HIDDEN_PREFIX", "_");
            jail.set_env("PASSXML_ENTRY_USERNAME_SOURCE", "record");
            jail.set_env("PASSXML_LOG_LEVEL", "debug");

            let config = load_config()?;
            assert_eq!(config.gpg.program, "gpg2");
            assert_eq!(config.store.hidden_prefix, "_");
            assert_eq!(config.entry.username_source, UsernameSource::Record);
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE_NAME,
                r#"
                [store]
                suffix = ".asc"
                "#,
            )?;

            let config = load_config()?;
            assert_eq!(config.store.suffix, ".asc");
            assert_eq!(config.store.hidden_prefix, ".");
            Ok(())
        });
    }
}
