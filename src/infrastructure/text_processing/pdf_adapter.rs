use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileFormat;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

/// Page texts in page order with no separator; empty pages contribute nothing.
pub fn join_pages(pages: Vec<String>) -> String {
    pages.into_iter().filter(|page| !page.is_empty()).collect()
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract_text(
        &self,
        path: &Path,
        format: FileFormat,
    ) -> Result<String, FileLoaderError> {
        if format != FileFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(format.to_string()));
        }

        let data = tokio::fs::read(path).await?;

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                std::panic::catch_unwind(|| Self::extract_pages(&data)).unwrap_or_else(|_| {
                    Err(FileLoaderError::ExtractionFailed(
                        "panic during PDF parsing".to_string(),
                    ))
                })
            }),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = join_pages(pages);

        tracing::info!(page_count, "PDF text extraction complete");

        Ok(text)
    }
}
