// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parser for the `pass` plaintext record format.
//!
//! A record is free text split on `\n`. The first line is the password. Of
//! the remaining lines, the first one starting with each marker is lifted
//! into its own field:
//!
//! | Marker        | Field      | Stored as                     |
//! |---------------|------------|-------------------------------|
//! | `otpauth://`  | `totp_uri` | the whole line, prefix kept   |
//! | `login:`      | `username` | prefix stripped, trimmed      |
//! | `url:`        | `url`      | prefix stripped, trimmed      |
//!
//! Everything else after the first line becomes the notes, blank lines
//! included.

use crate::types::Record;

const TOTP_MARKER: &str = "otpauth://";
const LOGIN_MARKER: &str = "login:";
const URL_MARKER: &str = "url:";

/// What a single line of the blob was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRole {
    Password,
    Totp,
    Login,
    Url,
    Note,
}

/// Parse the full decrypted text of one record.
///
/// Never fails: a blob with no marker lines yields a record whose optional
/// fields are all `None`, and an empty blob yields an empty password.
pub fn parse_record(text: &str) -> Record {
    let lines: Vec<&str> = text.split('\n').collect();
    let roles = classify(&lines);

    let mut password = String::new();
    let mut username = None;
    let mut url = None;
    let mut totp_uri = None;
    let mut notes: Vec<&str> = Vec::new();

    for (line, role) in lines.iter().zip(&roles) {
        match role {
            LineRole::Password => password = (*line).to_string(),
            LineRole::Totp => totp_uri = Some((*line).to_string()),
            LineRole::Login => username = Some(strip_marker(line, LOGIN_MARKER)),
            LineRole::Url => url = Some(strip_marker(line, URL_MARKER)),
            LineRole::Note => notes.push(*line),
        }
    }

    Record {
        password,
        username,
        url,
        notes: notes.join("\n"),
        totp_uri,
    }
}

/// Tag every line in one pass. Only the first line per marker is claimed;
/// later lines with the same marker stay notes.
fn classify(lines: &[&str]) -> Vec<LineRole> {
    let mut seen_totp = false;
    let mut seen_login = false;
    let mut seen_url = false;

    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                LineRole::Password
            } else if !seen_totp && line.starts_with(TOTP_MARKER) {
                seen_totp = true;
                LineRole::Totp
            } else if !seen_login && line.starts_with(LOGIN_MARKER) {
                seen_login = true;
                LineRole::Login
            } else if !seen_url && line.starts_with(URL_MARKER) {
                seen_url = true;
                LineRole::Url
            } else {
                LineRole::Note
            }
        })
        .collect()
}

fn strip_marker(line: &str, marker: &str) -> String {
    line.strip_prefix(marker).unwrap_or(line).trim().to_string()
}
