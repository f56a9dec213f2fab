use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};

/// One markdown source and the `.docx` target it converts to, both relative
/// to a source directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionJob {
    source: RelativePathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target: Option<RelativePathBuf>,
}

impl ConversionJob {
    /// Create a job whose target is the source with a `.docx` extension
    pub fn new(source: RelativePathBuf) -> Self {
        Self {
            source,
            target: None,
        }
    }

    /// Create a job with an explicit target
    pub fn with_target(source: RelativePathBuf, target: RelativePathBuf) -> Self {
        Self {
            source,
            target: Some(target),
        }
    }

    /// Get the relative source path
    pub fn source(&self) -> &RelativePath {
        &self.source
    }

    /// Get the relative target path, derived from the source when not set
    pub fn target(&self) -> RelativePathBuf {
        self.target
            .clone()
            .unwrap_or_else(|| self.source.with_extension("docx"))
    }

    pub fn source_path(&self, root: &Path) -> PathBuf {
        self.source.to_path(root)
    }

    pub fn target_path(&self, root: &Path) -> PathBuf {
        self.target().to_path(root)
    }
}

impl From<&str> for ConversionJob {
    fn from(source: &str) -> Self {
        Self::new(RelativePathBuf::from(source))
    }
}
