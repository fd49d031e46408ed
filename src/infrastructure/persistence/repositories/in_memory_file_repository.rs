use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::application::ports::{FileRepository, RepositoryError};
use crate::domain::{FileId, FileRecord, NewFileRecord};

/// Process-local [`FileRepository`] for tests and database-less runs.
#[derive(Default)]
pub struct InMemoryFileRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    records: Vec<FileRecord>,
    last_id: i64,
}

impl InMemoryFileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::ConnectionFailed("repository lock poisoned".to_string()))
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn get_by_id(&self, id: FileId) -> Result<Option<FileRecord>, RepositoryError> {
        Ok(self.lock()?.records.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<FileRecord>, RepositoryError> {
        Ok(self.lock()?.records.clone())
    }

    async fn insert_missing(
        &self,
        candidates: &[NewFileRecord],
    ) -> Result<Vec<FileRecord>, RepositoryError> {
        let mut state = self.lock()?;
        let mut inserted = Vec::new();

        for candidate in candidates {
            let known = state
                .records
                .iter()
                .any(|r| r.name == candidate.name && r.path == candidate.path);
            if known {
                continue;
            }

            state.last_id += 1;
            let record = candidate.clone().into_record(FileId::from_i64(state.last_id));
            state.records.push(record.clone());
            inserted.push(record);
        }

        Ok(inserted)
    }

    async fn update_summary(&self, id: FileId, summary: &str) -> Result<(), RepositoryError> {
        let mut state = self.lock()?;
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("file {id}")))?;

        record.summary = Some(summary.to_string());
        Ok(())
    }
}
