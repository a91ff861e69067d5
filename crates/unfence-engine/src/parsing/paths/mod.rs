//! # Path Association
//!
//! Proposes candidate paths for code blocks from the text around them.
//!
//! Evidence comes in three forms, strongest first: an explicit path in the
//! fence header (already on the [`CodeBlock`]), a path announcement on the
//! first content line (detected and stripped by [`comment::take_leading_path`]),
//! and prose hints in the surrounding text collected here as [`PathHint`]s.
//! Hints are bound to blocks later, on a shared line-number timeline.

pub mod comment;
pub mod patterns;

pub use comment::take_leading_path;

use crate::parsing::fences::CodeBlock;

/// A candidate path discovered in prose, not yet bound to a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHint {
    pub path: String,
    /// 0-based line index where the hint was found.
    pub source_line_idx: usize,
    /// Set once the hint has been claimed by a block; each hint may be
    /// used at most once.
    pub consumed: bool,
}

/// Scans every line outside the blocks' spans for path-bearing patterns.
/// Returned hints are ordered by line index.
pub fn associate(text: &str, blocks: &[CodeBlock]) -> Vec<PathHint> {
    let mut hints = Vec::new();
    let mut block_idx = 0;

    for (idx, line) in text.lines().enumerate() {
        // Blocks are ordered and disjoint, so a single cursor suffices.
        while block_idx < blocks.len()
            && blocks[block_idx]
                .last_line_idx
                .is_some_and(|last| last < idx)
        {
            block_idx += 1;
        }
        if block_idx < blocks.len() && blocks[block_idx].contains_line(idx) {
            continue;
        }

        for path in patterns::paths_in_line(line) {
            hints.push(PathHint {
                path,
                source_line_idx: idx,
                consumed: false,
            });
        }
    }

    hints
}
