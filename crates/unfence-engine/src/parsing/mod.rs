//! # Parsing Pipeline
//!
//! Raw text → [`fences::scan`] → block list → [`paths::associate`] → path
//! hints → linking here → sorted file list. Each stage is a pure transform;
//! nothing is retained between calls, so repeated and concurrent parses of
//! the same input yield identical output.
//!
//! ## Path resolution per block (first success wins)
//!
//! 1. Explicit `lang:path` fence header.
//! 2. Path announcement on the first content line (stripped from content).
//! 3. Nearest unconsumed prose hint before the block, then after it,
//!    skipping hints whose extension contradicts the block's language.
//! 4. Synthesized `untitled_<n>.<ext>` fallback.
//!
//! A path already claimed in the same parse is never overwritten; the later
//! block gets a numeric suffix instead.

pub mod fences;
pub mod paths;

use std::collections::HashSet;

use crate::language;
use crate::models::{ParseOutput, ParsedFile};
use fences::CodeBlock;
use paths::PathHint;

/// Parses free-form text into a structured set of files.
///
/// Never fails: malformed input yields fewer (or zero) files, never an
/// error.
pub fn parse(text: &str) -> ParseOutput {
    let mut blocks = fences::scan(text);
    // Hints are collected before the folder-structure block is removed so
    // its span still shields its lines from hint scanning.
    let mut hints = paths::associate(text, &blocks);
    let folder_structure = take_folder_structure(&mut blocks);

    let mut files = Vec::with_capacity(blocks.len());
    let mut used_paths = HashSet::new();
    let mut fallback_counter = 1usize;

    for block in blocks {
        let mut content = block.content;

        let resolved = if block.explicit_path.is_some() {
            block.explicit_path
        } else if let Some((path, stripped)) =
            paths::take_leading_path(&content, &block.language)
        {
            content = stripped;
            Some(path)
        } else {
            claim_nearest_hint(&mut hints, &block.language, block.first_line_idx)
        };

        let path = resolved.unwrap_or_else(|| {
            let ext = language::fallback_extension(&block.language);
            let name = format!("untitled_{fallback_counter}.{ext}");
            fallback_counter += 1;
            name
        });

        let path = claim_unique(path, &mut used_paths);
        let language = if block.language.is_empty() {
            language::language_for_path(&path).to_string()
        } else {
            block.language
        };

        files.push(ParsedFile {
            path,
            content,
            language,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    ParseOutput {
        files,
        folder_structure,
    }
}

/// Nearest eligible unconsumed hint before the block, else the nearest
/// after it. "Introduce the file, then show its code" is the common order,
/// but the reverse is tolerated.
fn claim_nearest_hint(
    hints: &mut [PathHint],
    language: &str,
    block_first_line: usize,
) -> Option<String> {
    let eligible = |h: &PathHint| {
        !h.consumed && language::hint_matches_language(&h.path, language)
    };

    let found = hints
        .iter()
        .rposition(|h| h.source_line_idx < block_first_line && eligible(h))
        .or_else(|| {
            hints
                .iter()
                .position(|h| h.source_line_idx > block_first_line && eligible(h))
        })?;

    hints[found].consumed = true;
    Some(hints[found].path.clone())
}

/// Reserves `path`, suffixing it numerically if a previous block already
/// claimed it. Content is never silently overwritten.
fn claim_unique(path: String, used: &mut HashSet<String>) -> String {
    if used.insert(path.clone()) {
        return path;
    }

    let split = match path.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !stem.ends_with('/') && !ext.contains('/') => {
            Some((stem.to_string(), ext.to_string()))
        }
        _ => None,
    };

    let mut n = 2usize;
    loop {
        let candidate = match &split {
            Some((stem, ext)) => format!("{stem}_{n}.{ext}"),
            None => format!("{path}_{n}"),
        };
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Pulls out the first `text` block that reads like a directory listing.
fn take_folder_structure(blocks: &mut Vec<CodeBlock>) -> Option<String> {
    let idx = blocks
        .iter()
        .position(|b| b.language == "text" && looks_like_tree(&b.content))?;
    let block = blocks.remove(idx);
    Some(block.content.trim().to_string())
}

fn looks_like_tree(content: &str) -> bool {
    if content.contains("├──") || content.contains("└──") {
        return true;
    }
    content
        .lines()
        .find(|l| !l.trim().is_empty())
        .is_some_and(|first| first.trim_end().ends_with('/'))
}
