use crate::{
    emit::build_document,
    models::{ConversionJob, StyleSheet},
    parsing::parse_document,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Outcome of one job in a batch.
#[derive(Debug)]
pub enum JobOutcome {
    Created(PathBuf),
    NotFound(PathBuf),
    Failed { source: PathBuf, error: ConvertError },
}

/// Read a markdown file and return its content
pub fn read_markdown(path: &Path) -> Result<String, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(ConvertError::Io)
}

/// Convert one markdown file into a `.docx` at `target`.
pub fn convert_file(
    source: &Path,
    target: &Path,
    styles: &StyleSheet,
) -> Result<(), ConvertError> {
    let md = read_markdown(source)?;
    let parsed = parse_document(&md);
    let doc = build_document(&parsed.blocks, styles);
    doc.save(target)?;
    log::info!(
        "converted {} ({} blocks) to {}",
        source.display(),
        parsed.blocks.len(),
        target.display()
    );
    Ok(())
}

/// Run every job in order, resolving paths against `root`.
///
/// A failing job never stops the batch; its outcome is reported instead.
pub fn convert_batch(
    root: &Path,
    jobs: &[ConversionJob],
    styles: &StyleSheet,
) -> Vec<JobOutcome> {
    jobs.iter()
        .map(|job| {
            let source = job.source_path(root);
            let target = job.target_path(root);
            match convert_file(&source, &target, styles) {
                Ok(()) => JobOutcome::Created(target),
                Err(ConvertError::NotFound(path)) => {
                    log::warn!("skipping missing input {}", path.display());
                    JobOutcome::NotFound(path)
                }
                Err(error) => {
                    log::error!("failed to convert {}: {error}", source.display());
                    JobOutcome::Failed { source, error }
                }
            }
        })
        .collect()
}
