use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileFormat;

/// Turns a file and its declared format tag into plain text.
///
/// [`extract`](Self::extract) never fails: unsupported tags, I/O errors and
/// parse errors all come back as an empty string after being logged.
pub struct ContentExtractor {
    file_loader: Arc<dyn FileLoader>,
}

impl ContentExtractor {
    pub fn new(file_loader: Arc<dyn FileLoader>) -> Self {
        Self { file_loader }
    }

    pub async fn try_extract(
        &self,
        path: &Path,
        format_tag: &str,
    ) -> Result<String, FileLoaderError> {
        let format = FileFormat::from_tag(format_tag)
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(format_tag.to_string()))?;

        self.file_loader.extract_text(path, format).await
    }

    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn extract(&self, path: &Path, format_tag: &str) -> String {
        match self.try_extract(path, format_tag).await {
            Ok(text) => text,
            Err(FileLoaderError::UnsupportedFormat(tag)) => {
                tracing::debug!(format = %tag, "Unsupported format, nothing to extract");
                String::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Error extracting content from file");
                String::new()
            }
        }
    }
}
