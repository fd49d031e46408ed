mod content_extractor;
mod file_service_error;
mod metadata_scanner;
mod record_accessor;
mod summarization_service;

pub use content_extractor::ContentExtractor;
pub use file_service_error::FileServiceError;
pub use metadata_scanner::{MetadataScanner, ScanError, ScanReport};
pub use record_accessor::RecordAccessor;
pub use summarization_service::{SummarizationService, summary_prompt};
