use regex::Regex;
use std::sync::OnceLock;

use crate::language;

static COMMENT_PATH: OnceLock<Regex> = OnceLock::new();

// Optional comment marker, optional File:/Path: label, then a
// filename-looking token with an extension, anchored at line start.
fn comment_path() -> &'static Regex {
    COMMENT_PATH.get_or_init(|| {
        Regex::new(
            r"^(?P<marker>//|#|/\*|<!--)?\s*(?P<label>(?i:file|path):\s*)?(?P<path>[A-Za-z0-9_./-]+\.[A-Za-z0-9]+)",
        )
        .expect("Invalid comment path pattern")
    })
}

/// Detects a path announcement on the first non-empty content line.
///
/// The line must consist of nothing but the annotation (plus a `*/` or
/// `-->` closer), so real code that merely mentions a dotted name is left
/// alone. A bare, unmarked filename is only believed when its extension is
/// known and consistent with the block's language.
///
/// On a match, returns the path and the content with the annotation line
/// removed (plus any blank lines above it and one now-leading blank line),
/// so the annotation does not duplicate into the exported file.
pub fn take_leading_path(content: &str, block_language: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = content.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty())?;
    let line = lines[first].trim();

    let caps = comment_path().captures(line)?;
    let path = caps.name("path")?.as_str().to_string();

    // Nothing but the annotation may remain on the line.
    let rest = line[caps.get(0)?.end()..].trim();
    if !(rest.is_empty() || rest == "*/" || rest == "-->") {
        return None;
    }

    let marked = caps.name("marker").is_some() || caps.name("label").is_some();
    if !marked
        && !(language::is_known_extension(&path)
            && language::hint_matches_language(&path, block_language))
    {
        return None;
    }

    let mut rest_lines = &lines[first + 1..];
    if rest_lines.first().is_some_and(|l| l.trim().is_empty()) {
        rest_lines = &rest_lines[1..];
    }
    Some((path, rest_lines.join("\n")))
}
