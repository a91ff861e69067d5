//! Language ↔ file-extension knowledge.
//!
//! Three lookups share these tables: validating a prose hint against a
//! block's declared language, picking an extension for synthesized fallback
//! names, and inferring a language tag from a recovered path.

/// Per-language data: `(tag, fallback extension, accepted extensions)`.
const LANGUAGES: &[(&str, &str, &[&str])] = &[
    ("bash", "sh", &["sh", "bash"]),
    ("c", "c", &["c", "h"]),
    ("c++", "cpp", &["cpp", "hpp", "cc", "cxx"]),
    ("cpp", "cpp", &["cpp", "hpp", "cc", "cxx"]),
    ("cs", "cs", &["cs"]),
    ("csharp", "cs", &["cs"]),
    ("css", "css", &["css", "scss", "sass", "less"]),
    ("go", "go", &["go"]),
    ("html", "html", &["html", "htm"]),
    ("java", "java", &["java"]),
    ("javascript", "js", &["js", "mjs", "cjs", "jsx"]),
    ("js", "js", &["js", "mjs", "cjs", "jsx"]),
    ("json", "json", &["json"]),
    ("jsx", "jsx", &["js", "mjs", "cjs", "jsx"]),
    ("kotlin", "kt", &["kt", "kts"]),
    ("markdown", "md", &["md", "markdown"]),
    ("md", "md", &["md", "markdown"]),
    ("php", "php", &["php"]),
    ("py", "py", &["py", "pyw"]),
    ("python", "py", &["py", "pyw"]),
    ("ruby", "rb", &["rb"]),
    ("rust", "rs", &["rs"]),
    ("scss", "scss", &["scss", "css"]),
    ("sh", "sh", &["sh", "bash"]),
    ("shell", "sh", &["sh", "bash"]),
    ("sql", "sql", &["sql"]),
    ("svelte", "svelte", &["svelte"]),
    ("swift", "swift", &["swift"]),
    ("toml", "toml", &["toml"]),
    ("ts", "ts", &["ts", "tsx", "mts"]),
    ("tsx", "tsx", &["ts", "tsx", "mts"]),
    ("typescript", "ts", &["ts", "tsx", "mts"]),
    ("vue", "vue", &["vue"]),
    ("xml", "xml", &["xml"]),
    ("yaml", "yaml", &["yaml", "yml"]),
    ("yml", "yaml", &["yaml", "yml"]),
];

/// Language tag per extension, for inferring a tag from a recovered path.
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("bash", "bash"),
    ("c", "c"),
    ("cc", "cpp"),
    ("cjs", "javascript"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("css", "css"),
    ("go", "go"),
    ("h", "c"),
    ("htm", "html"),
    ("html", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("json", "json"),
    ("jsx", "javascript"),
    ("kt", "kotlin"),
    ("md", "markdown"),
    ("mjs", "javascript"),
    ("php", "php"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("sass", "scss"),
    ("scss", "scss"),
    ("sh", "bash"),
    ("sql", "sql"),
    ("svelte", "svelte"),
    ("swift", "swift"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("vue", "vue"),
    ("xml", "xml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

/// Extensions consistent with `language`, or `None` for unknown tags.
pub fn extensions_for(language: &str) -> Option<&'static [&'static str]> {
    LANGUAGES
        .iter()
        .find(|(tag, _, _)| *tag == language)
        .map(|(_, _, exts)| *exts)
}

/// Preferred extension for fallback names; `txt` for unknown or absent tags.
pub fn fallback_extension(language: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(tag, _, _)| *tag == language)
        .map(|(_, ext, _)| *ext)
        .unwrap_or("txt")
}

/// Language tag inferred from a path's extension; `text` when unknown.
pub fn language_for_path(path: &str) -> &'static str {
    let Some(ext) = path_extension(path) else {
        return "text";
    };
    EXTENSION_LANGUAGES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
        .unwrap_or("text")
}

/// Whether a hint with this path is plausible for a block of `language`.
/// Unknown and absent languages accept any path.
pub fn hint_matches_language(path: &str, language: &str) -> bool {
    let Some(exts) = extensions_for(language) else {
        return true;
    };
    path_extension(path).is_some_and(|ext| exts.contains(&ext.as_str()))
}

/// Whether the path carries an extension from the table (`txt` counts).
pub fn is_known_extension(path: &str) -> bool {
    path_extension(path)
        .is_some_and(|ext| ext == "txt" || EXTENSION_LANGUAGES.iter().any(|(e, _)| *e == ext))
}

fn path_extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
