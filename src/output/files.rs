use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::output::errors::OutputError;

/// Appends `.tex` when missing.
///
/// # Errors
///
/// Returns `OutputError::InvalidFilename` for empty names or names containing
/// a path separator; documents always land directly in the output folder.
pub fn normalize_tex_filename(name: &str) -> Result<String, OutputError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == ".tex" || trimmed.contains(['/', '\\']) || trimmed == ".." {
        warn!("Rejecting output filename '{}'", name);
        return Err(OutputError::InvalidFilename(name.to_string()));
    }

    if trimmed.ends_with(".tex") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}.tex", trimmed))
    }
}

/// `tree.tex` with index 3 becomes `tree_3.tex`. Expects a normalized name.
pub fn numbered_filename(filename: &str, index: usize) -> String {
    let stem = filename.strip_suffix(".tex").unwrap_or(filename);
    format!("{}_{}.tex", stem, index)
}

/// Writes `contents` to `dir/filename`, creating `dir` if needed.
///
/// # Errors
///
/// Returns `OutputError::Io` if the directory cannot be created or the file cannot be written.
pub fn write_document(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))?;

    let path = dir.join(filename);
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(&path, contents).map_err(|e| OutputError::io(&path, e))?;

    info!("LaTeX tree written to {}", path.display());
    Ok(path)
}
