use super::kinds::{CodeFence, FenceKind};
use super::types::CodeBlock;

#[derive(Debug)]
enum State {
    Outside,
    Inside {
        kind: FenceKind,
        language: String,
        explicit_path: Option<String>,
        first_line_idx: usize,
        lines: Vec<String>,
    },
}

/// State machine that turns a stream of lines into fenced blocks.
///
/// Lines outside any fence are ignored here; they belong to the path
/// associator, which scans the raw text separately.
pub struct FenceBuilder {
    state: State,
    out: Vec<CodeBlock>,
}

impl FenceBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Outside,
            out: vec![],
        }
    }

    pub fn push(&mut self, idx: usize, line: &str) {
        let sig = CodeFence::sig(line);

        match &mut self.state {
            State::Outside => {
                if let Some(sig) = sig {
                    let (language, explicit_path) =
                        CodeFence::split_info(CodeFence::info(line));
                    self.state = State::Inside {
                        kind: CodeFence::kind(sig),
                        language,
                        explicit_path,
                        first_line_idx: idx,
                        lines: Vec::new(),
                    };
                }
            }
            State::Inside { kind, lines, .. } => {
                if CodeFence::closes(*kind, sig) {
                    self.close(Some(idx));
                } else {
                    // Mismatched fence styles are content, not closers.
                    lines.push(line.to_string());
                }
            }
        }
    }

    /// EOF flush: a block left open is auto-closed so its content is kept.
    pub fn finish(mut self) -> Vec<CodeBlock> {
        if matches!(self.state, State::Inside { .. }) {
            self.close(None);
        }
        self.out
    }

    fn close(&mut self, last_line_idx: Option<usize>) {
        let prev = std::mem::replace(&mut self.state, State::Outside);
        if let State::Inside {
            language,
            explicit_path,
            first_line_idx,
            lines,
            ..
        } = prev
        {
            self.out.push(CodeBlock {
                language,
                explicit_path,
                content: lines.join("\n"),
                first_line_idx,
                last_line_idx,
            });
        }
    }
}

impl Default for FenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
