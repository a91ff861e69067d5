use serde::Serialize;

/// Final output unit: one reconstructed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFile {
    /// Forward-slash separated relative path; never empty.
    pub path: String,
    /// Exact block content, with a detected leading path annotation
    /// stripped.
    pub content: String,
    /// Lowercase language tag; inferred from the path extension when the
    /// fence carried none.
    pub language: String,
}

/// Everything recovered from one parse call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    /// Files sorted by path (byte-lexicographic) for reproducible output.
    pub files: Vec<ParsedFile>,
    /// The first `text` block recognized as a directory-tree listing,
    /// when present. Not included in `files`.
    pub folder_structure: Option<String>,
}
