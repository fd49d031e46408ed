use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileFormat;

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Routes each format to the adapter registered for it.
pub struct CompositeFileLoader {
    adapters: HashMap<FileFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(FileFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// pdf, docx and txt, each with its own adapter.
    pub fn with_default_adapters() -> Self {
        Self::new(vec![
            (
                FileFormat::Pdf,
                Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
            ),
            (FileFormat::Docx, Arc::new(DocxAdapter) as Arc<dyn FileLoader>),
            (
                FileFormat::Txt,
                Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
            ),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        format: FileFormat,
    ) -> Result<String, FileLoaderError> {
        let adapter = self
            .adapters
            .get(&format)
            .ok_or_else(|| FileLoaderError::UnsupportedFormat(format.to_string()))?;

        adapter.extract_text(path, format).await
    }
}
