use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::output::errors::OutputError;

/// What a clean of the output folder would touch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanPlan {
    MissingDir,
    Empty,
    /// Regular files in the folder, sorted by name. Subdirectories are left alone.
    Files(Vec<PathBuf>),
}

#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, std::io::Error)>,
}

impl CleanReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// # Errors
///
/// Returns `OutputError::Io` if the folder exists but cannot be listed.
pub fn plan_clean(dir: &Path) -> Result<CleanPlan, OutputError> {
    if !dir.exists() {
        debug!("{} does not exist", dir.display());
        return Ok(CleanPlan::MissingDir);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| OutputError::io(dir, e))? {
        let entry = entry.map_err(|e| OutputError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| OutputError::io(entry.path(), e))?;
        if file_type.is_file() {
            files.push(entry.path());
        }
    }

    if files.is_empty() {
        return Ok(CleanPlan::Empty);
    }

    files.sort();
    debug!("Found {} file(s) in {}", files.len(), dir.display());
    Ok(CleanPlan::Files(files))
}

/// Removes each file, or only reports it under `dry_run`.
///
/// Failures are collected per file; one unremovable file does not stop the rest.
pub fn clean(files: &[PathBuf], dry_run: bool) -> CleanReport {
    let mut report = CleanReport::default();

    for path in files {
        if dry_run {
            debug!("Would delete {}", path.display());
            report.removed.push(path.clone());
            continue;
        }

        match fs::remove_file(path) {
            Ok(()) => report.removed.push(path.clone()),
            // Already gone counts as cleaned
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!("Could not delete {}: {}", path.display(), e);
                report.failures.push((path.clone(), e));
            }
        }
    }

    info!(
        "{} {} file(s), {} failure(s)",
        if dry_run { "Would clean" } else { "Cleaned" },
        report.removed.len(),
        report.failures.len()
    );
    report
}
