// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name handling for store paths: hidden entries and the encrypted-file suffix.

use std::borrow::Cow;
use std::path::Path;

use passxml_config::{EntryConfig, StoreConfig, UsernameSource};
use passxml_core::Record;

/// Naming conventions of one password store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    suffix: String,
    hidden_prefix: String,
    username_source: UsernameSource,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::new(&StoreConfig::default(), &EntryConfig::default())
    }
}

impl StoreLayout {
    pub fn new(store: &StoreConfig, entry: &EntryConfig) -> Self {
        Self {
            suffix: store.suffix.clone(),
            hidden_prefix: store.hidden_prefix.clone(),
            username_source: entry.username_source,
        }
    }

    /// True if the final component of `path` starts with the hidden prefix.
    pub fn is_hidden(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with(&self.hidden_prefix))
    }

    /// The final component of `path` with one trailing suffix removed.
    pub fn display_name<'a>(&self, path: &'a Path) -> Cow<'a, str> {
        let name = file_name(path);
        if self.suffix.is_empty() {
            return name;
        }
        match name {
            Cow::Borrowed(s) => Cow::Borrowed(s.strip_suffix(self.suffix.as_str()).unwrap_or(s)),
            Cow::Owned(s) => match s.strip_suffix(self.suffix.as_str()) {
                Some(stripped) => Cow::Owned(stripped.to_string()),
                None => Cow::Owned(s),
            },
        }
    }

    /// The user name an entry gets, given its file-derived name.
    pub fn username<'a>(&self, record: &'a Record, display_name: &'a str) -> &'a str {
        match self.username_source {
            UsernameSource::FileName => display_name,
            UsernameSource::Record => record.username().unwrap_or(display_name),
        }
    }
}

/// The final component of `path`, or the empty string for `/` and `..`.
pub fn file_name(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or(Cow::Borrowed(""))
}

#[cfg(test)]
mod tests {
    use passxml_core::parse_record;

    use super::*;

    #[test]
    fn strips_one_trailing_suffix() {
        let layout = StoreLayout::default();
        assert_eq!(layout.display_name(Path::new("/s/work/alice.gpg")), "alice");
        assert_eq!(layout.display_name(Path::new("/s/a.gpg.gpg")), "a.gpg");
        assert_eq!(layout.display_name(Path::new("/s/notes.txt")), "notes.txt");
        assert_eq!(layout.display_name(Path::new("/s/work")), "work");
    }

    #[test]
    fn suffix_only_stripped_at_the_end() {
        let layout = StoreLayout::default();
        assert_eq!(layout.display_name(Path::new("/s/x.gpgfoo")), "x.gpgfoo");
    }

    #[test]
    fn directories_with_suffix_are_stripped_too() {
        let layout = StoreLayout::default();
        assert_eq!(layout.display_name(Path::new("/s/mail.gpg")), "mail");
    }

    #[test]
    fn empty_suffix_keeps_names() {
        let layout = StoreLayout::new(
            &StoreConfig {
                suffix: String::new(),
                ..StoreConfig::default()
            },
            &EntryConfig::default(),
        );
        assert_eq!(layout.display_name(Path::new("/s/alice.gpg")), "alice.gpg");
    }

    #[test]
    fn hidden_names_match_prefix() {
        let layout = StoreLayout::default();
        assert!(layout.is_hidden(Path::new("/s/.git")));
        assert!(layout.is_hidden(Path::new("/s/.gpg-id")));
        assert!(!layout.is_hidden(Path::new("/s/work")));
        assert!(!layout.is_hidden(Path::new("/s/dot.file")));
    }

    #[test]
    fn username_from_file_name_ignores_login_line() {
        let layout = StoreLayout::default();
        let record = parse_record("pw\nlogin: bob");
        assert_eq!(layout.username(&record, "alice"), "alice");
    }

    #[test]
    fn username_from_record_falls_back_to_file_name() {
        let layout = StoreLayout::new(
            &StoreConfig::default(),
            &EntryConfig {
                username_source: UsernameSource::Record,
            },
        );
        assert_eq!(layout.username(&parse_record("pw\nlogin: bob"), "alice"), "bob");
        assert_eq!(layout.username(&parse_record("pw"), "alice"), "alice");
    }
}
