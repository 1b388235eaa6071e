//! Output folder handling: writing documents, compiling them, cleaning up

mod clean;
mod errors;
mod files;
mod pdf;

pub use clean::{CleanPlan, CleanReport, clean, plan_clean};
pub use errors::OutputError;
pub use files::{numbered_filename, normalize_tex_filename, write_document};
pub use pdf::{DEFAULT_PDF_TIMEOUT, PdfOutcome, compile_pdf};

pub const DEFAULT_OUTPUT_DIR: &str = "gen";
