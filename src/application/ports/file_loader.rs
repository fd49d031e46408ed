use std::path::Path;

use async_trait::async_trait;

use crate::domain::FileFormat;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, path: &Path, format: FileFormat)
    -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
