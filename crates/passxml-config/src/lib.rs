// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for passxml.
//!
//! Settings are layered with Figment: compiled defaults, then
//! `/etc/passxml/passxml.toml`, the user's XDG config, `./passxml.toml`, and
//! finally `PASSXML_*` environment variables. Unknown keys are rejected and
//! reported as miette diagnostics with "did you mean" suggestions.
//!
//! ```no_run
//! let config = passxml_config::load_and_validate().expect("config errors");
//! println!("decrypting with {}", config.gpg.program);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_str};
pub use model::{EntryConfig, GpgConfig, LogConfig, PassXmlConfig, StoreConfig, UsernameSource};

/// File name looked up in every layer of the hierarchy.
pub const CONFIG_FILE_NAME: &str = "passxml.toml";

/// Load configuration from the file hierarchy and validate it.
///
/// Returns either a valid [`PassXmlConfig`] or every diagnostic found, so the
/// caller can render them all at once.
pub fn load_and_validate() -> Result<PassXmlConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<PassXmlConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the TOML files that exist so diagnostics can point into them.
fn collect_toml_sources() -> Vec<(String, String)> {
    loader::config_file_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let display = if path.is_relative() {
                std::env::current_dir()
                    .map(|d| d.join(&path).display().to_string())
                    .unwrap_or_else(|_| path.display().to_string())
            } else {
                path.display().to_string()
            };
            Some((display, content))
        })
        .collect()
}
