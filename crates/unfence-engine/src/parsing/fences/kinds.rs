/// Which character a fence line was made of, as detected on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

/// The fence style an open block was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence marker: a line starting (after whitespace trim) with
    /// three or more backticks or tildes. Run length beyond three is ignored.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim();
        if t.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if t.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }

    pub fn kind(sig: FenceSig) -> FenceKind {
        match sig {
            FenceSig::Backticks => FenceKind::Backticks,
            FenceSig::Tildes => FenceKind::Tildes,
        }
    }

    /// A block only closes on a marker of the style that opened it; the
    /// other style is ordinary content inside the block.
    pub fn closes(kind: FenceKind, sig: Option<FenceSig>) -> bool {
        matches!(
            (kind, sig),
            (FenceKind::Backticks, Some(FenceSig::Backticks))
                | (FenceKind::Tildes, Some(FenceSig::Tildes))
        )
    }

    /// The info string: whatever follows the marker run on an opening line.
    pub fn info(line: &str) -> &str {
        let t = line.trim();
        match Self::sig(line) {
            Some(FenceSig::Backticks) => t.trim_start_matches('`').trim(),
            Some(FenceSig::Tildes) => t.trim_start_matches('~').trim(),
            None => "",
        }
    }

    /// Splits an info string into `(language, explicit_path)`.
    ///
    /// Text before the first colon is the lowercased language tag (empty
    /// allowed); text after it, as in ```` ```rust:src/main.rs ````, is an
    /// explicit path.
    pub fn split_info(info: &str) -> (String, Option<String>) {
        match info.split_once(':') {
            Some((lang, path)) => {
                let path = path.trim();
                (
                    lang.trim().to_lowercase(),
                    (!path.is_empty()).then(|| path.to_string()),
                )
            }
            None => (info.trim().to_lowercase(), None),
        }
    }
}
