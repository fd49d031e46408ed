use crate::application::ports::{LlmClientError, RepositoryError};
use crate::domain::FileId;

#[derive(Debug, thiserror::Error)]
pub enum FileServiceError {
    #[error("file not found: {0}")]
    NotFound(FileId),
    #[error("unable to extract content from file {0}")]
    ExtractionFailed(FileId),
    #[error("failed to generate summary for file {id}: {source}")]
    SummarizationFailed {
        id: FileId,
        #[source]
        source: LlmClientError,
    },
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
