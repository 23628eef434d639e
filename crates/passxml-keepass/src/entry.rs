// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! KeePass entries and the builder that fills in their defaults.

use passxml_core::Record;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The string fields every entry carries, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum FieldKey {
    Notes,
    UserName,
    Password,
    #[strum(serialize = "URL")]
    Url,
    Title,
    #[strum(serialize = "otp")]
    Otp,
}

impl FieldKey {
    /// Whether KeePass should keep the value protected in memory.
    pub fn is_protected(self) -> bool {
        matches!(self, FieldKey::Password | FieldKey::Notes | FieldKey::Otp)
    }
}

/// One stored secret: six string fields, each present even when empty.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    notes: String,
    username: String,
    password: String,
    url: String,
    title: String,
    otp: String,
}

impl Entry {
    /// Build an entry from a parsed record and the identity the traversal
    /// derived from the file's location.
    ///
    /// The record's own `url:` wins over `identity.fallback_url`. Missing
    /// one-time-password URIs become empty strings.
    pub fn from_record(record: &Record, identity: &EntryIdentity<'_>) -> Self {
        EntryBuilder::new(identity.title)
            .username(identity.username)
            .password(record.password())
            .url(record.url().unwrap_or(identity.fallback_url))
            .notes(record.notes())
            .totp(record.totp_uri())
            .build()
    }

    /// Value of one field.
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Notes => &self.notes,
            FieldKey::UserName => &self.username,
            FieldKey::Password => &self.password,
            FieldKey::Url => &self.url,
            FieldKey::Title => &self.title,
            FieldKey::Otp => &self.otp,
        }
    }

    /// All six fields in output order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        FieldKey::iter().map(move |key| (key, self.get(key)))
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("url", &self.url)
            .field("password", &"[REDACTED]")
            .field("notes", &"[REDACTED]")
            .field("otp", &"[REDACTED]")
            .finish()
    }
}

/// Identity metadata for an entry, taken from where its file sits in the store.
#[derive(Debug, Clone, Copy)]
pub struct EntryIdentity<'a> {
    /// Display name, normally the file name without its suffix.
    pub title: &'a str,
    /// User name written to the entry.
    pub username: &'a str,
    /// URL used when the record has no `url:` line.
    pub fallback_url: &'a str,
}

/// Builder for [`Entry`]; every field not set ends up as an empty string.
#[derive(Debug, Default)]
pub struct EntryBuilder {
    title: String,
    username: Option<String>,
    password: Option<String>,
    url: Option<String>,
    notes: Option<String>,
    totp: Option<String>,
}

impl EntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn username<'a>(mut self, username: impl Into<Option<&'a str>>) -> Self {
        self.username = username.into().map(str::to_string);
        self
    }

    pub fn password<'a>(mut self, password: impl Into<Option<&'a str>>) -> Self {
        self.password = password.into().map(str::to_string);
        self
    }

    pub fn url<'a>(mut self, url: impl Into<Option<&'a str>>) -> Self {
        self.url = url.into().map(str::to_string);
        self
    }

    pub fn notes<'a>(mut self, notes: impl Into<Option<&'a str>>) -> Self {
        self.notes = notes.into().map(str::to_string);
        self
    }

    pub fn totp<'a>(mut self, totp: impl Into<Option<&'a str>>) -> Self {
        self.totp = totp.into().map(str::to_string);
        self
    }

    pub fn build(self) -> Entry {
        Entry {
            notes: self.notes.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            title: self.title,
            otp: self.totp.unwrap_or_default(),
        }
    }
}
