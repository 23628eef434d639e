// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data types shared between the parser, the decryptors, and the traversal driver.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Structured fields recovered from one decrypted `pass` blob.
///
/// Optional fields are `None` when no marker line was found; substituting a
/// default is left to whoever builds the output entry. Contents are wiped
/// from memory when the record is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    pub(crate) password: String,
    pub(crate) username: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) notes: String,
    pub(crate) totp_uri: Option<String>,
}

impl Record {
    /// The first line of the blob.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Value of the first `login:` line, prefix stripped and trimmed.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Value of the first `url:` line, prefix stripped and trimmed.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Every remaining line after the first, joined with `\n`.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// The first `otpauth://` line, verbatim.
    pub fn totp_uri(&self) -> Option<&str> {
        self.totp_uri.as_deref()
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("password", &"[REDACTED]")
            .field("username", &self.username)
            .field("url", &self.url)
            .field("notes", &"[REDACTED]")
            .field("totp_uri", &self.totp_uri.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Outcome of decoding the plaintext a decryptor produced.
///
/// Only [`Decrypted::Text`] proceeds to parsing; [`Decrypted::NotText`] means
/// the record is skipped without failing the run.
#[derive(Debug)]
pub enum Decrypted {
    /// Valid UTF-8 plaintext.
    Text(Zeroizing<String>),
    /// The plaintext was not valid UTF-8.
    NotText { reason: String },
}

impl Decrypted {
    /// Decode raw plaintext bytes, wiping them if they are not valid UTF-8.
    pub fn from_bytes(mut bytes: Zeroizing<Vec<u8>>) -> Self {
        let raw = std::mem::take(&mut *bytes);
        match String::from_utf8(raw) {
            Ok(text) => Decrypted::Text(Zeroizing::new(text)),
            Err(err) => {
                let reason = err.utf8_error().to_string();
                let mut raw = err.into_bytes();
                raw.zeroize();
                Decrypted::NotText { reason }
            }
        }
    }

    /// Returns true if the plaintext decoded as text.
    pub fn is_text(&self) -> bool {
        matches!(self, Decrypted::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_bytes_decode_as_text() {
        let decoded = Decrypted::from_bytes(Zeroizing::new(b"hunter2\nnote".to_vec()));
        match decoded {
            Decrypted::Text(text) => assert_eq!(text.as_str(), "hunter2\nnote"),
            Decrypted::NotText { reason } => panic!("expected text, got NotText({reason})"),
        }
    }

    #[test]
    fn invalid_utf8_is_not_text() {
        let decoded = Decrypted::from_bytes(Zeroizing::new(vec![0x89, b'P', b'N', b'G', 0xff]));
        assert!(!decoded.is_text());
        if let Decrypted::NotText { reason } = decoded {
            assert!(reason.contains("invalid utf-8"), "reason was: {reason}");
        }
    }

    #[test]
    fn empty_plaintext_is_text() {
        assert!(Decrypted::from_bytes(Zeroizing::new(Vec::new())).is_text());
    }

    #[test]
    fn record_debug_redacts_secrets() {
        let record = crate::parse_record("hunter2\nlogin: bob\notpauth://totp/X\nprivate");
        let debug = format!("{record:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("private"));
        assert!(!debug.contains("otpauth"));
        assert!(debug.contains("bob"));
    }
}
