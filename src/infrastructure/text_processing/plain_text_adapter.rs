use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileFormat;

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        path: &Path,
        format: FileFormat,
    ) -> Result<String, FileLoaderError> {
        if format != FileFormat::Txt {
            return Err(FileLoaderError::UnsupportedFormat(format.to_string()));
        }

        let data = tokio::fs::read(path).await?;

        String::from_utf8(data).map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
