//! Generic labeled trees and their LaTeX rendering

mod document;
mod labeled;
mod qtree;

pub use document::{DocumentSpec, render_document};
pub use labeled::LabeledTree;
