use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{FileRepository, LlmClient};
use crate::domain::FileId;

use super::{ContentExtractor, FileServiceError};

const SUMMARY_INSTRUCTION: &str = "Summarize: ";

pub fn summary_prompt(content: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}{content}")
}

/// Extracts a file's text, asks the LLM for a summary and stores it on the record.
///
/// Nothing is cached: every call re-reads the file and re-queries the provider,
/// overwriting any previous summary on success.
pub struct SummarizationService<L>
where
    L: LlmClient,
{
    repository: Arc<dyn FileRepository>,
    extractor: Arc<ContentExtractor>,
    llm_client: Arc<L>,
}

impl<L> SummarizationService<L>
where
    L: LlmClient,
{
    pub fn new(
        repository: Arc<dyn FileRepository>,
        extractor: Arc<ContentExtractor>,
        llm_client: Arc<L>,
    ) -> Self {
        Self {
            repository,
            extractor,
            llm_client,
        }
    }

    #[tracing::instrument(skip(self, id), fields(file_id = %id))]
    pub async fn summarize(&self, id: FileId) -> Result<String, FileServiceError> {
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
            tracing::warn!(path = %record.path, format = %record.format, "No content to summarize");
            return Err(FileServiceError::ExtractionFailed(id));
        }

        let summary = self
            .llm_client
            .complete(&summary_prompt(&content))
            .await
            .map_err(|source| {
                tracing::error!(error = %source, "Error generating summary for file");
                FileServiceError::SummarizationFailed { id, source }
            })?;

        self.repository.update_summary(id, &summary).await?;

        tracing::info!(summary_chars = summary.chars().count(), "Summary stored");

        Ok(summary)
    }
}
