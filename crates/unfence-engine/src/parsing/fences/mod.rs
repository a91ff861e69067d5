//! # Fence Scanning
//!
//! Tokenizes raw text into an ordered sequence of fenced code blocks.
//!
//! A fence marker is a line consisting of three-or-more backticks or tildes
//! after whitespace trimming; the marker character is the fence style. While
//! a block is open, only a marker of the opening style closes it, so one
//! style can safely contain the other as literal content.
//!
//! Lines are 0-based and split the way [`str::lines`] splits: on `\n` with a
//! trailing `\r` stripped, so CRLF input parses identically to LF input.

pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::FenceBuilder;
pub use kinds::{CodeFence, FenceKind, FenceSig};
pub use types::CodeBlock;

/// Scans `text` line by line and returns every fenced block in order.
pub fn scan(text: &str) -> Vec<CodeBlock> {
    let mut builder = FenceBuilder::new();
    for (idx, line) in text.lines().enumerate() {
        builder.push(idx, line);
    }
    builder.finish()
}
