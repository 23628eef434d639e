// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store traversal: top-level children become groups, files become entries.

use std::path::{Path, PathBuf};

use passxml_core::{Decrypted, Decryptor, PassXmlError, parse_record};
use passxml_keepass::{Document, Entry, EntryIdentity};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::naming::{StoreLayout, file_name};

/// Counts from one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub groups: usize,
    pub entries: usize,
    /// Files whose plaintext was not UTF-8 text.
    pub skipped: Vec<PathBuf>,
}

/// A password store rooted at one directory.
pub struct PasswordStore<D> {
    root: PathBuf,
    layout: StoreLayout,
    decryptor: D,
}

impl<D: Decryptor> PasswordStore<D> {
    /// Open the store at `root`, which must be a directory.
    pub fn open(
        root: impl AsRef<Path>,
        layout: StoreLayout,
        decryptor: D,
    ) -> Result<Self, PassXmlError> {
        let root = root.as_ref();
        let io_err = |source| PassXmlError::Io {
            path: root.to_path_buf(),
            source,
        };

        let absolute = std::path::absolute(root).map_err(io_err)?;
        let metadata = std::fs::metadata(&absolute).map_err(io_err)?;
        if !metadata.is_dir() {
            return Err(io_err(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                "password store must be a directory",
            )));
        }

        Ok(Self {
            root: absolute,
            layout,
            decryptor,
        })
    }

    /// Walk the whole store and build the document.
    ///
    /// Records that do not decrypt to text are skipped and listed in the
    /// report. Any traversal, I/O, or decryption failure aborts the run.
    pub fn ingest(&self) -> Result<(Document, IngestReport), PassXmlError> {
        let mut document = Document::new();
        let mut report = IngestReport::default();

        info!(
            store = %self.root.display(),
            decryptor = self.decryptor.name(),
            "reading password store"
        );

        for child in self.visible_children(&self.root, 1) {
            let path = child?;
            if path.is_dir() {
                self.ingest_directory(&path, &mut document, &mut report)?;
            } else if path.is_file() {
                self.ingest_standalone(&path, &mut document, &mut report)?;
            } else {
                debug!(path = %path.display(), "ignoring entry that is neither file nor directory");
            }
        }

        info!(
            groups = report.groups,
            entries = report.entries,
            skipped = report.skipped.len(),
            "password store read"
        );
        Ok((document, report))
    }

    /// A top-level directory: one group holding every file beneath it.
    fn ingest_directory(
        &self,
        dir: &Path,
        document: &mut Document,
        report: &mut IngestReport,
    ) -> Result<(), PassXmlError> {
        let group_name = self.layout.display_name(dir).into_owned();
        let mut entries = Vec::new();

        for child in self.visible_children(dir, usize::MAX) {
            let path = child?;
            if !path.is_file() {
                continue;
            }

            let parent_name = path.parent().map(file_name).unwrap_or_default();
            if let Some(entry) = self.read_entry(&path, &parent_name, report)? {
                entries.push(entry);
            }
        }

        self.finish_group(group_name, entries, document, report);
        Ok(())
    }

    /// A top-level file: a group of one, with its own name as fallback URL.
    fn ingest_standalone(
        &self,
        file: &Path,
        document: &mut Document,
        report: &mut IngestReport,
    ) -> Result<(), PassXmlError> {
        let group_name = self.layout.display_name(file).into_owned();
        let entries = self
            .read_entry(file, &group_name, report)?
            .into_iter()
            .collect();

        self.finish_group(group_name, entries, document, report);
        Ok(())
    }

    /// Decrypt, parse, and build one entry. `Ok(None)` means the file was skipped.
    fn read_entry(
        &self,
        path: &Path,
        fallback_url: &str,
        report: &mut IngestReport,
    ) -> Result<Option<Entry>, PassXmlError> {
        debug!(file = %path.display(), "reading record");

        let text = match self.decryptor.decrypt(path)? {
            Decrypted::Text(text) => text,
            Decrypted::NotText { reason } => {
                warn!(file = %path.display(), %reason, "skipping record that is not text");
                report.skipped.push(path.to_path_buf());
                return Ok(None);
            }
        };

        let record = parse_record(&text);
        let title = self.layout.display_name(path);
        let identity = EntryIdentity {
            title: &title,
            username: self.layout.username(&record, &title),
            fallback_url,
        };
        Ok(Some(Entry::from_record(&record, &identity)))
    }

    fn finish_group(
        &self,
        name: String,
        entries: Vec<Entry>,
        document: &mut Document,
        report: &mut IngestReport,
    ) {
        info!(group = %name, entries = entries.len(), "group collected");
        report.groups += 1;
        report.entries += entries.len();
        document.add_group(name, entries);
    }

    /// Visible entries below `dir`, down to `max_depth`, in filesystem order.
    /// Hidden entries are pruned together with everything beneath them, and
    /// dangling symlinks are dropped.
    fn visible_children<'a>(
        &'a self,
        dir: &Path,
        max_depth: usize,
    ) -> impl Iterator<Item = Result<PathBuf, PassXmlError>> + 'a {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .into_iter()
            .filter_entry(move |e| e.depth() == 0 || !self.layout.is_hidden(e.path()))
            .filter_map(|res| match res {
                Ok(entry) => Some(Ok(entry.into_path())),
                Err(e) if is_dangling_link(&e) => {
                    debug!(path = ?e.path(), "ignoring dangling symlink");
                    None
                }
                Err(e) => Some(Err(PassXmlError::Traversal {
                    path: e.path().map(Path::to_path_buf).unwrap_or_default(),
                    source: Box::new(e),
                })),
            })
    }
}

/// A link whose target is missing. Loops and permission errors do not count.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
    not_found
        && err.path().is_some_and(|path| {
            std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink())
        })
}

#[cfg(test)]
mod tests {
    use passxml_keepass::{FieldKey, Group};
    use passxml_test_utils::{PlaintextDecryptor, StoreFixture};
    use tracing_test::traced_test;

    use super::*;

    fn ingest(fixture: &StoreFixture) -> (Document, IngestReport) {
        PasswordStore::open(fixture.path(), StoreLayout::default(), PlaintextDecryptor::new())
            .unwrap()
            .ingest()
            .unwrap()
    }

    #[test]
    fn directory_entry_uses_parent_name_as_fallback_url() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "p@ss\nsome note")
            .build();
        let (doc, _) = ingest(&fixture);

        assert_eq!(doc.groups().len(), 1);
        let group = &doc.groups()[0];
        assert_eq!(group.name(), "work");
        let entry = &group.entries()[0];
        assert_eq!(entry.get(FieldKey::Title), "alice");
        assert_eq!(entry.get(FieldKey::UserName), "alice");
        assert_eq!(entry.get(FieldKey::Password), "p@ss");
        assert_eq!(entry.get(FieldKey::Notes), "some note");
        assert_eq!(entry.get(FieldKey::Url), "work");
        assert_eq!(entry.get(FieldKey::Otp), "");
    }

    #[test]
    fn nested_files_use_their_immediate_parent_and_join_the_top_group() {
        let fixture = StoreFixture::builder()
            .file("web/shops/amazon.gpg", "pw")
            .build();
        let (doc, _) = ingest(&fixture);

        assert_eq!(doc.groups()[0].name(), "web");
        assert_eq!(doc.groups()[0].entries()[0].get(FieldKey::Url), "shops");
    }

    #[test]
    fn standalone_file_is_a_group_of_one() {
        let fixture = StoreFixture::builder().file("github.gpg", "token").build();
        let (doc, report) = ingest(&fixture);

        assert_eq!(doc.groups().len(), 1);
        let group = &doc.groups()[0];
        assert_eq!(group.name(), "github");
        assert_eq!(group.entries().len(), 1);
        assert_eq!(group.entries()[0].get(FieldKey::Url), "github");
        assert_eq!(group.entries()[0].get(FieldKey::Title), "github");
        assert_eq!(report.groups, 1);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn record_url_overrides_fallback() {
        let fixture = StoreFixture::builder()
            .file("work/vpn.gpg", "pw\nurl: vpn.example.com")
            .build();
        let (doc, _) = ingest(&fixture);
        assert_eq!(doc.groups()[0].entries()[0].get(FieldKey::Url), "vpn.example.com");
    }

    #[test]
    #[traced_test]
    fn binary_record_is_skipped_but_siblings_survive() {
        let fixture = StoreFixture::builder()
            .binary_file("work/photo.gpg", &[0xff, 0xd8, 0xff, 0xe0])
            .file("work/alice.gpg", "pw")
            .build();
        let (doc, report) = ingest(&fixture);

        let group = &doc.groups()[0];
        assert_eq!(group.entries().len(), 1);
        assert_eq!(group.entries()[0].title(), "alice");
        assert_eq!(report.skipped, vec![fixture.path().join("work/photo.gpg")]);
        assert!(logs_contain("skipping record that is not text"));
    }

    #[test]
    fn binary_standalone_file_leaves_an_empty_group() {
        let fixture = StoreFixture::builder()
            .binary_file("blob.gpg", &[0xc3, 0x28])
            .build();
        let (doc, report) = ingest(&fixture);

        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].name(), "blob");
        assert!(doc.groups()[0].entries().is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn hidden_entries_are_skipped_at_every_level() {
        let fixture = StoreFixture::builder()
            .file(".gpg-id", "ABCDEF")
            .file(".git/config", "[core]")
            .file("work/.hidden.gpg", "pw")
            .file("work/.cache/inner.gpg", "pw")
            .file("work/alice.gpg", "pw")
            .build();
        let (doc, report) = ingest(&fixture);

        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].name(), "work");
        assert_eq!(doc.groups()[0].entries().len(), 1);
        assert_eq!(report.entries, 1);
    }

    #[test]
    fn hidden_store_root_is_still_read() {
        let fixture = StoreFixture::builder()
            .file(".password-store/work/alice.gpg", "pw")
            .build();
        let (doc, _) = PasswordStore::open(
            fixture.path().join(".password-store"),
            StoreLayout::default(),
            PlaintextDecryptor::new(),
        )
        .unwrap()
        .ingest()
        .unwrap();

        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].entries().len(), 1);
    }

    #[test]
    fn empty_directory_is_an_empty_group() {
        let fixture = StoreFixture::builder().dir("archive").build();
        let (doc, _) = ingest(&fixture);
        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].name(), "archive");
        assert!(doc.groups()[0].entries().is_empty());
    }

    #[test]
    fn directory_suffix_is_stripped_from_group_name() {
        let fixture = StoreFixture::builder().file("odd.gpg/x.gpg", "pw").build();
        let (doc, _) = ingest(&fixture);
        assert_eq!(doc.groups()[0].name(), "odd");
    }

    #[test]
    fn decryption_failure_aborts_the_run() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "pw")
            .file("work/broken.gpg", "pw")
            .build();
        let decryptor = PlaintextDecryptor::new().fail_on("broken.gpg");
        let store =
            PasswordStore::open(fixture.path(), StoreLayout::default(), decryptor).unwrap();

        let err = store.ingest().unwrap_err();
        assert!(matches!(err, PassXmlError::Decrypt { .. }), "got: {err}");
    }

    #[test]
    fn decryptor_receives_absolute_paths() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "pw")
            .file("github.gpg", "pw")
            .build();
        let decryptor = PlaintextDecryptor::new();
        PasswordStore::open(fixture.path(), StoreLayout::default(), &decryptor)
            .unwrap()
            .ingest()
            .unwrap();

        let calls = decryptor.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|p| p.is_absolute()));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlinks_are_ignored_at_every_level() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "pw")
            .file("github.gpg", "token")
            .symlink("stale", "gone")
            .symlink("work/stale.gpg", "gone.gpg")
            .symlink("work/old/stale.gpg", "../../nowhere.gpg")
            .build();
        let (doc, report) = ingest(&fixture);

        let mut names: Vec<&str> = doc.groups().iter().map(Group::name).collect();
        names.sort_unstable();
        assert_eq!(names, ["github", "work"]);
        let work = doc.groups().iter().find(|g| g.name() == "work").unwrap();
        assert_eq!(work.entries().len(), 1);
        assert_eq!(work.entries()[0].title(), "alice");
        assert_eq!(report.entries, 2);
        assert!(report.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_to_records_are_followed() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "pw")
            .symlink("work/alias.gpg", "alice.gpg")
            .build();
        let (doc, _) = ingest(&fixture);
        assert_eq!(doc.groups()[0].entries().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_is_a_traversal_error() {
        let fixture = StoreFixture::builder()
            .file("work/alice.gpg", "pw")
            .symlink("work/again", ".")
            .build();
        let err = PasswordStore::open(fixture.path(), StoreLayout::default(), PlaintextDecryptor::new())
            .unwrap()
            .ingest()
            .unwrap_err();
        assert!(matches!(err, PassXmlError::Traversal { .. }), "got: {err}");
    }

    #[test]
    fn open_rejects_a_file_root() {
        let fixture = StoreFixture::builder().file("github.gpg", "pw").build();
        let err = PasswordStore::open(
            fixture.path().join("github.gpg"),
            StoreLayout::default(),
            PlaintextDecryptor::new(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, PassXmlError::Io { .. }), "got: {err}");
    }

    #[test]
    fn open_rejects_a_missing_root() {
        let err = PasswordStore::open(
            "/nonexistent/passxml-store",
            StoreLayout::default(),
            PlaintextDecryptor::new(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, PassXmlError::Io { .. }), "got: {err}");
    }
}
