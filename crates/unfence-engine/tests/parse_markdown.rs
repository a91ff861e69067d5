//! End-to-end tests for the full parse pipeline: raw text in, sorted
//! `ParsedFile` list out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use unfence_engine::{ParsedFile, parse};

fn file(path: &str, content: &str, language: &str) -> ParsedFile {
    ParsedFile {
        path: path.to_string(),
        content: content.to_string(),
        language: language.to_string(),
    }
}

#[test]
fn leading_comment_names_the_file_and_is_stripped() {
    let input = "Here is the code:\n```typescript\n// parser.ts\nexport function test() {\n  console.log(\"hello\");\n}\n```\n";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![file(
            "parser.ts",
            "export function test() {\n  console.log(\"hello\");\n}",
            "typescript"
        )]
    );
}

#[test]
fn explicit_header_path() {
    let result = parse("```typescript:src/utils/helper.ts\nconst x = 1;\n```\n");

    assert_eq!(
        result.files,
        vec![file("src/utils/helper.ts", "const x = 1;", "typescript")]
    );
}

#[test]
fn bold_filename_in_preceding_prose() {
    let input = "Create a file named **components/Button.tsx**:\n```tsx\nexport const Button = () => <button />;\n```\n";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![file(
            "components/Button.tsx",
            "export const Button = () => <button />;",
            "tsx"
        )]
    );
}

#[test]
fn pathless_block_gets_fallback_name() {
    let result = parse("```css\n.class { color: red; }\n```\n");

    assert_eq!(
        result.files,
        vec![file("untitled_1.css", ".class { color: red; }", "css")]
    );
}

#[test]
fn consecutive_heading_fence_pairs() {
    let input = "\
#### `components/ConfigPreview.tsx`

Renders the visual list.

```tsx
export function ConfigPreview() {}
```

#### `components/JsonViewer.tsx`

```tsx
export function JsonViewer() {}
```
";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![
            file(
                "components/ConfigPreview.tsx",
                "export function ConfigPreview() {}",
                "tsx"
            ),
            file(
                "components/JsonViewer.tsx",
                "export function JsonViewer() {}",
                "tsx"
            ),
        ]
    );
}

#[test]
fn explicit_header_beats_preceding_heading() {
    let input = "\
#### `wrong/place.ts`

```typescript:right/place.ts
let a;
```

```typescript
let b;
```
";
    let result = parse(input);

    // The unconsumed heading hint is still available for the second block.
    assert_eq!(
        result.files,
        vec![
            file("right/place.ts", "let a;", "typescript"),
            file("wrong/place.ts", "let b;", "typescript"),
        ]
    );
}

#[test]
fn tilde_fence_inside_backtick_block_is_content() {
    let input = "```markdown\nSome doc:\n~~~\nnested\n~~~\n```\n";
    let result = parse(input);

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].content, "Some doc:\n~~~\nnested\n~~~");
}

#[test]
fn backtick_fence_inside_tilde_block_is_content() {
    let input = "~~~markdown\n```rust\nfn main() {}\n```\n~~~\n";
    let result = parse(input);

    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].content, "```rust\nfn main() {}\n```");
}

#[test]
fn fallback_counters_strictly_increase() {
    let input = "```css\na {}\n```\n\n```css\nb {}\n```\n\n```\nplain\n```\n";
    let result = parse(input);

    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["untitled_1.css", "untitled_2.css", "untitled_3.txt"]);
}

#[test]
fn unterminated_fence_is_auto_closed_keeping_content() {
    let result = parse("```rust\nfn main() {}\nlet x = 1;");

    assert_eq!(
        result.files,
        vec![file("untitled_1.rs", "fn main() {}\nlet x = 1;", "rust")]
    );
}

#[test]
fn duplicate_path_claims_are_suffixed_not_overwritten() {
    let input = "```ts:src/app.ts\nlet a;\n```\n\n```ts:src/app.ts\nlet b;\n```\n";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![
            file("src/app.ts", "let a;", "ts"),
            file("src/app_2.ts", "let b;", "ts"),
        ]
    );
}

#[test]
fn output_is_sorted_by_path() {
    let input = "```ts:z/last.ts\nlet z;\n```\n\n```ts:a/first.ts\nlet a;\n```\n";
    let result = parse(input);

    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["a/first.ts", "z/last.ts"]);
    assert_eq!(result.files[0].content, "let a;");
}

#[test]
fn hint_with_inconsistent_extension_is_skipped() {
    let input = "\
**notes.py**

```tsx
export {}
```

```python
print(1)
```
";
    let result = parse(input);

    // The tsx block cannot claim a .py hint; the python block can.
    assert_eq!(
        result.files,
        vec![
            file("notes.py", "print(1)", "python"),
            file("untitled_1.tsx", "export {}", "tsx"),
        ]
    );
}

#[test]
fn hint_after_the_block_is_used_when_nothing_precedes() {
    let input = "```tsx\nexport {}\n```\n\nThe file **src/App.tsx** is shown above.\n";
    let result = parse(input);

    assert_eq!(result.files, vec![file("src/App.tsx", "export {}", "tsx")]);
}

#[test]
fn each_hint_is_used_at_most_once() {
    let input = "\
#### `src/only.ts`

```typescript
let a;
```

```typescript
let b;
```
";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![
            file("src/only.ts", "let a;", "typescript"),
            file("untitled_1.ts", "let b;", "typescript"),
        ]
    );
}

#[test]
fn hints_inside_other_blocks_are_never_reused() {
    let input = "```markdown\n#### `fake/hint.ts`\n```\n\n```typescript\nlet x;\n```\n";
    let result = parse(input);

    assert_eq!(
        result.files,
        vec![
            file("untitled_1.md", "#### `fake/hint.ts`", "markdown"),
            file("untitled_2.ts", "let x;", "typescript"),
        ]
    );
}

#[test]
fn folder_structure_block_is_captured_separately() {
    let input = "\
```text
src/
├── main.rs
└── lib.rs
```

```rust:src/main.rs
fn main() {}
```
";
    let result = parse(input);

    assert_eq!(
        result.folder_structure.as_deref(),
        Some("src/\n├── main.rs\n└── lib.rs")
    );
    assert_eq!(result.files, vec![file("src/main.rs", "fn main() {}", "rust")]);
}

#[test]
fn plain_text_block_is_not_mistaken_for_structure() {
    let result = parse("```text\njust some notes\n```\n");

    assert_eq!(result.folder_structure, None);
    assert_eq!(result.files, vec![file("untitled_1.txt", "just some notes", "text")]);
}

#[test]
fn path_only_header_infers_language_from_extension() {
    let result = parse("```:src/x.ts\nconst a = 1;\n```\n");

    assert_eq!(result.files, vec![file("src/x.ts", "const a = 1;", "typescript")]);
}

#[test]
fn crlf_input_parses_like_lf() {
    let result = parse("```javascript\r\n// app.js\r\nconsole.log(1);\r\n```\r\n");

    assert_eq!(result.files, vec![file("app.js", "console.log(1);", "javascript")]);
}

#[rstest]
#[case("")]
#[case("   \n\n  ")]
#[case("# Just a heading\n\nProse without any code blocks.")]
fn inputs_without_blocks_yield_no_files(#[case] input: &str) {
    let result = parse(input);
    assert!(result.files.is_empty());
    assert_eq!(result.folder_structure, None);
}

#[test]
fn shell_blocks_are_kept_as_fallback_files() {
    let result = parse("Run this command:\n```bash\nnpm install react\n```\n");

    assert_eq!(
        result.files,
        vec![file("untitled_1.sh", "npm install react", "bash")]
    );
}

#[test]
fn every_file_has_nonempty_path_and_language() {
    let input = "```\nanonymous\n```\n\n```weirdlang\n???\n```\n";
    let result = parse(input);

    assert_eq!(result.files.len(), 2);
    for f in &result.files {
        assert!(!f.path.is_empty());
        assert!(!f.language.is_empty());
    }
}

#[test]
fn parse_is_idempotent() {
    let input = "\
Project layout:

```text
app/
├── index.html
└── js/
```

### 1. Entry point (`js/main.js`)

```javascript
init();
```

**styles/site.css**

```css
body { margin: 0; }
```

```bash
npm run build
```
";
    let first = parse(input);
    let second = parse(input);

    assert_eq!(first, second);

    let paths: Vec<_> = first.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["js/main.js", "styles/site.css", "untitled_1.sh"]);
    assert!(first.folder_structure.is_some());
}
