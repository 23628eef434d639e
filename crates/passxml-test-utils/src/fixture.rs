// SPDX-FileCopyrightText: 2026 passxml Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Temporary password stores for tests.

use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

/// A password store laid out in a temp directory, removed on drop.
///
/// File contents are the plaintext a [`crate::PlaintextDecryptor`] will
/// hand back.
pub struct StoreFixture {
    dir: TempDir,
}

impl StoreFixture {
    pub fn builder() -> StoreFixtureBuilder {
        StoreFixtureBuilder::default()
    }

    /// Root of the store.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

enum Node {
    Dir(String),
    File(String, Vec<u8>),
    #[cfg(unix)]
    Symlink(String, String),
}

/// Builder for [`StoreFixture`]. Paths are relative to the store root and
/// use `/` separators; parent directories are created as needed.
#[derive(Default)]
pub struct StoreFixtureBuilder {
    nodes: Vec<Node>,
}

impl StoreFixtureBuilder {
    /// Add a text file.
    pub fn file(self, rel_path: &str, contents: &str) -> Self {
        self.binary_file(rel_path, contents.as_bytes())
    }

    /// Add a file with arbitrary bytes.
    pub fn binary_file(mut self, rel_path: &str, contents: &[u8]) -> Self {
        self.nodes
            .push(Node::File(rel_path.to_string(), contents.to_vec()));
        self
    }

    /// Add an empty directory.
    pub fn dir(mut self, rel_path: &str) -> Self {
        self.nodes.push(Node::Dir(rel_path.to_string()));
        self
    }

    /// Add a symlink at `rel_path` pointing at `target`. A relative target
    /// resolves against the link's directory and need not exist.
    #[cfg(unix)]
    pub fn symlink(mut self, rel_path: &str, target: &str) -> Self {
        self.nodes
            .push(Node::Symlink(rel_path.to_string(), target.to_string()));
        self
    }

    /// Create the store on disk. Panics on I/O failure.
    pub fn build(self) -> StoreFixture {
        let dir = tempfile::Builder::new()
            .prefix("passxml-store-")
            .tempdir()
            .expect("create temp store");

        for node in self.nodes {
            match node {
                Node::Dir(rel) => {
                    std::fs::create_dir_all(dir.path().join(rel)).expect("create store dir");
                }
                Node::File(rel, contents) => {
                    let path = dir.path().join(rel);
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent).expect("create store dir");
                    }
                    std::fs::write(&path, contents).expect("write store file");
                }
                #[cfg(unix)]
                Node::Symlink(rel, target) => {
                    let path = dir.path().join(rel);
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent).expect("create store dir");
                    }
                    std::os::unix::fs::symlink(target, &path).expect("create store symlink");
                }
            }
        }

        debug!(root = %dir.path().display(), "store fixture created");
        StoreFixture { dir }
    }
}
