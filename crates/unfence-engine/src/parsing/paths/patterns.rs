use regex::Regex;
use std::sync::OnceLock;

// Patterns that carry a file path in surrounding prose. All are compiled
// once; `Regex` keeps no match cursor, so concurrent parses share them.
const PROSE_PATTERNS: &[&str] = &[
    // ### 1. Title (`path/to/file.ext`)
    r"^###.*?\(`([^`]+)`\)",
    // #### `path/to/file.ext`
    r"^####\s*`([^`]+)`",
    // ### `path/to/file.ext`
    r"^###\s*`([^`]+)`",
    // **path/to/file.ext**
    r"\*\*([A-Za-z0-9_/-]+\.[A-Za-z0-9]+)\*\*",
    // File: path/to/file.ext  /  Path: `path/to/file.ext`
    r"(?:File|Path):\s*`?([A-Za-z0-9_/-]+\.[A-Za-z0-9]+)`?",
    // `path/to/file.ext` at the start of a line
    r"^`([A-Za-z0-9_/-]+\.[A-Za-z0-9]+)`",
];

static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();

pub fn prose_patterns() -> &'static [Regex] {
    COMPILED.get_or_init(|| {
        PROSE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid prose path pattern"))
            .collect()
    })
}

/// All paths named by prose patterns on a single line, in match order.
pub fn paths_in_line(line: &str) -> Vec<String> {
    let mut found = Vec::new();
    for pattern in prose_patterns() {
        for caps in pattern.captures_iter(line) {
            let path = caps[1].trim().to_string();
            if !path.is_empty() && !found.contains(&path) {
                found.push(path);
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_with_parenthesized_path() {
        assert_eq!(
            paths_in_line("### 2. The parser (`src/parser.ts`)"),
            vec!["src/parser.ts"]
        );
    }

    #[test]
    fn h4_backticked_path() {
        assert_eq!(
            paths_in_line("#### `components/ConfigPreview.tsx`"),
            vec!["components/ConfigPreview.tsx"]
        );
    }

    #[test]
    fn h3_backticked_path() {
        assert_eq!(paths_in_line("### `src/index.ts`"), vec!["src/index.ts"]);
    }

    #[test]
    fn bold_filename() {
        assert_eq!(
            paths_in_line("Create a file named **components/Button.tsx**:"),
            vec!["components/Button.tsx"]
        );
    }

    #[test]
    fn file_and_path_labels() {
        assert_eq!(paths_in_line("File: src/app.py"), vec!["src/app.py"]);
        assert_eq!(paths_in_line("Path: `lib/mod.rs`"), vec!["lib/mod.rs"]);
    }

    #[test]
    fn backticked_path_at_line_start() {
        assert_eq!(paths_in_line("`src/main.rs` looks like this:"), vec!["src/main.rs"]);
    }

    #[test]
    fn backticked_word_mid_line_is_not_a_hint() {
        assert!(paths_in_line("call `helper.ts` from anywhere").is_empty());
    }

    #[test]
    fn bold_prose_without_extension_is_not_a_hint() {
        assert!(paths_in_line("this is **very important** stuff").is_empty());
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert!(paths_in_line("Here is the code you asked for:").is_empty());
    }

    #[test]
    fn two_bold_paths_on_one_line() {
        assert_eq!(
            paths_in_line("Update **a/x.ts** and **a/y.ts** together"),
            vec!["a/x.ts", "a/y.ts"]
        );
    }
}
