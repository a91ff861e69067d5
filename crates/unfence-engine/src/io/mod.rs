use crate::models::ParsedFile;
use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Refusing to write outside the output root: {0}")]
    PathEscapes(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one parsed file under the output root, creating parent
/// directories. Absolute paths and paths that escape the root via `..`
/// are rejected.
pub fn write_parsed_file(file: &ParsedFile, output_root: &Path) -> Result<PathBuf, ExportError> {
    let normalized = RelativePath::new(&file.path).normalize();
    if file.path.starts_with('/') || normalized.starts_with("..") {
        return Err(ExportError::PathEscapes(file.path.clone()));
    }

    let absolute_path = normalized.to_path(output_root);
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&absolute_path, &file.content)?;
    Ok(absolute_path)
}

/// Write every parsed file under `output_root`, returning the written
/// paths in input order.
pub fn export_files(files: &[ParsedFile], output_root: &Path) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(output_root)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        written.push(write_parsed_file(file, output_root)?);
    }
    Ok(written)
}
