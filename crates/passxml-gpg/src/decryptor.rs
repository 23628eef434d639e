// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decrypt store files by spawning `gpg --decrypt`.

use std::path::Path;
use std::process::{Command, Stdio};

use passxml_config::GpgConfig;
use passxml_core::{Decrypted, Decryptor, PassXmlError};
use tracing::debug;
use zeroize::Zeroizing;

/// Flags always passed ahead of the configured extra arguments.
const BASE_ARGS: &[&str] = &["--quiet", "--batch"];

/// Runs the configured GnuPG program once per file.
#[derive(Debug, Clone)]
pub struct GpgDecryptor {
    program: String,
    extra_args: Vec<String>,
}

impl GpgDecryptor {
    pub fn new(config: &GpgConfig) -> Self {
        Self {
            program: config.program.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// Full argument list for decrypting `path`.
    fn args<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a std::ffi::OsStr> {
        BASE_ARGS
            .iter()
            .map(std::ffi::OsStr::new)
            .chain(self.extra_args.iter().map(std::ffi::OsStr::new))
            .chain([std::ffi::OsStr::new("--decrypt"), path.as_os_str()])
    }
}

impl Decryptor for GpgDecryptor {
    fn name(&self) -> &str {
        &self.program
    }

    fn decrypt(&self, path: &Path) -> Result<Decrypted, PassXmlError> {
        let path = path.canonicalize().map_err(|e| PassXmlError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(program = %self.program, file = %path.display(), "decrypting");

        // stderr is inherited so pinentry and gpg diagnostics reach the user.
        let output = Command::new(&self.program)
            .args(self.args(&path))
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| PassXmlError::Decrypt {
                path: path.clone(),
                message: format!("failed to run `{}`: {e}", self.program),
                source: Some(Box::new(e)),
            })?;

        let plaintext = Zeroizing::new(output.stdout);

        if !output.status.success() {
            let status = output
                .status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("status {c}"));
            return Err(PassXmlError::Decrypt {
                path,
                message: format!("`{}` exited with {status}", self.program),
                source: None,
            });
        }

        let decrypted = Decrypted::from_bytes(plaintext);
        if let Decrypted::NotText { reason } = &decrypted {
            debug!(file = %path.display(), %reason, "decrypted content is not UTF-8 text");
        }
        Ok(decrypted)
    }
}
