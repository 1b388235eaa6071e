use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::output::errors::OutputError;

pub const DEFAULT_PDF_TIMEOUT: Duration = Duration::from_secs(30);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a `pdflatex` run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfOutcome {
    Compiled(PathBuf),
    Failed { hint: Option<String> },
    NotInstalled,
    TimedOut,
}

/// Compile a `.tex` file with `pdflatex`, writing the PDF next to it.
///
/// A missing `pdflatex`, a failing run and a timeout are all reported as
/// outcomes; only unexpected process or filesystem faults are errors.
///
/// # Errors
///
/// Returns `OutputError::Io` if the process cannot be spawned for a reason
/// other than a missing executable, or cannot be waited on.
pub fn compile_pdf(tex_path: &Path, timeout: Duration) -> Result<PdfOutcome, OutputError> {
    let dir = tex_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Some(file_name) = tex_path.file_name() else {
        return Err(OutputError::InvalidFilename(tex_path.display().to_string()));
    };

    debug!("Running pdflatex on {} in {}", tex_path.display(), dir.display());
    let spawned = Command::new("pdflatex")
        .arg("-interaction=nonstopmode")
        .arg("-output-directory")
        .arg(".")
        .arg(file_name)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("pdflatex not found on PATH");
            return Ok(PdfOutcome::NotInstalled);
        }
        Err(e) => return Err(OutputError::io(tex_path, e)),
    };

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait().map_err(|e| OutputError::io(tex_path, e))? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                warn!("pdflatex timed out after {:?}", timeout);
                // The process may have exited between the check and the kill
                let _ = child.kill();
                let _ = child.wait();
                return Ok(PdfOutcome::TimedOut);
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    if status.success() {
        let pdf = tex_path.with_extension("pdf");
        info!("PDF compiled: {}", pdf.display());
        return Ok(PdfOutcome::Compiled(pdf));
    }

    warn!("pdflatex exited with {}", status);
    let log_path = tex_path.with_extension("log");
    Ok(PdfOutcome::Failed {
        hint: missing_package_hint(&log_path),
    })
}

fn missing_package_hint(log_path: &Path) -> Option<String> {
    let log = fs::read_to_string(log_path).ok()?;
    if log.contains("tikz") && log.contains("not found") {
        Some("install the TikZ packages (texlive-pictures) to compile tree diagrams".to_string())
    } else {
        None
    }
}
