/// One fenced region recovered from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Lowercased language tag from the info string; empty when absent.
    pub language: String,
    /// Path carried directly in the fence header (`lang:path` syntax).
    pub explicit_path: Option<String>,
    /// Exact interior lines joined with `\n`. Fence lines are excluded and
    /// no trailing newline is appended.
    pub content: String,
    /// 0-based line index of the opening fence.
    pub first_line_idx: usize,
    /// 0-based line index of the closing fence; `None` when input ended
    /// with the block still open (it then extends to end of input).
    pub last_line_idx: Option<usize>,
}

impl CodeBlock {
    /// Whether `line_idx` falls within this block's span, fence lines
    /// included. An unclosed block covers everything after its opener.
    pub fn contains_line(&self, line_idx: usize) -> bool {
        line_idx >= self.first_line_idx
            && self.last_line_idx.is_none_or(|last| line_idx <= last)
    }
}
