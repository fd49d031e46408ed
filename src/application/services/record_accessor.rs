use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{FileRepository, LlmClient};
use crate::domain::{FileId, FileRecord};

use super::{ContentExtractor, FileServiceError, SummarizationService};

/// Read side of the service: listing, content and summaries by id.
pub struct RecordAccessor<L>
where
    L: LlmClient,
{
    repository: Arc<dyn FileRepository>,
    extractor: Arc<ContentExtractor>,
    summarizer: Arc<SummarizationService<L>>,
}

impl<L> RecordAccessor<L>
where
    L: LlmClient,
{
    pub fn new(
        repository: Arc<dyn FileRepository>,
        extractor: Arc<ContentExtractor>,
        summarizer: Arc<SummarizationService<L>>,
    ) -> Self {
        Self {
            repository,
            extractor,
            summarizer,
        }
    }

    pub async fn list_files(&self) -> Result<Vec<FileRecord>, FileServiceError> {
        Ok(self.repository.list().await?)
    }

    #[tracing::instrument(skip(self, id), fields(file_id = %id))]
    pub async fn get_content(&self, id: FileId) -> Result<String, FileServiceError> {
        let record = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(FileServiceError::NotFound(id))?;

        let content = self
            .extractor
            .extract(Path::new(&record.path), &record.format)
            .await;

        if content.is_empty() {
            tracing::warn!(path = %record.path, format = %record.format, "Unable to extract content");
            return Err(FileServiceError::ExtractionFailed(id));
        }

        Ok(content)
    }

    /// Always recomputes; a previously stored summary is not returned as-is.
    pub async fn get_summary(&self, id: FileId) -> Result<String, FileServiceError> {
        self.summarizer.summarize(id).await
    }
}
