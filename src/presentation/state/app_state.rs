use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::{MetadataScanner, RecordAccessor};

pub struct AppState<L>
where
    L: LlmClient,
{
    pub scanner: Arc<MetadataScanner>,
    pub record_accessor: Arc<RecordAccessor<L>>,
    pub upload_folder: PathBuf,
}

impl<L> Clone for AppState<L>
where
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            scanner: Arc::clone(&self.scanner),
            record_accessor: Arc::clone(&self.record_accessor),
            upload_folder: self.upload_folder.clone(),
        }
    }
}
