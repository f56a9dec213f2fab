pub mod document;
pub mod docx;
pub mod emit;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{Document, ParagraphStyle};
pub use emit::{build_document, emit};
pub use io::*;
pub use models::{ConversionJob, StyleSheet};
pub use parsing::{ParsedDoc, parse_document};
