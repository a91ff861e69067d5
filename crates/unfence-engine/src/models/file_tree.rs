use std::collections::BTreeMap;

use crate::models::ParsedFile;

/// Parsed files grouped by parent folder for tree-style consumers.
///
/// Uses BTreeMap for automatic sorted ordering by folder; files keep the
/// order they were given in (already path-sorted by the parser).
#[derive(Debug, Default)]
pub struct FileTree {
    folders: BTreeMap<String, Vec<ParsedFile>>,
}

impl FileTree {
    /// Group files by parent folder. Files without a `/` land under the
    /// root folder, keyed by the empty string.
    pub fn build(files: &[ParsedFile]) -> Self {
        let mut folders: BTreeMap<String, Vec<ParsedFile>> = BTreeMap::new();
        for file in files {
            let folder = match file.path.rsplit_once('/') {
                Some((dir, _)) => dir.to_string(),
                None => String::new(),
            };
            folders.entry(folder).or_default().push(file.clone());
        }
        Self { folders }
    }

    /// Folders in sorted order, each with its files. The root folder is
    /// the empty string and sorts first.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &[ParsedFile])> {
        self.folders
            .iter()
            .map(|(folder, files)| (folder.as_str(), files.as_slice()))
    }

    /// Total number of files across all folders.
    pub fn len(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
