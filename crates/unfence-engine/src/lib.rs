pub mod io;
pub mod language;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{FileTree, ParseOutput, ParsedFile};
pub use parsing::fences::CodeBlock;
pub use parsing::parse;
pub use parsing::paths::PathHint;
