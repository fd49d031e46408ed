use async_trait::async_trait;

use crate::domain::{FileId, FileRecord, NewFileRecord};

use super::RepositoryError;

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn get_by_id(&self, id: FileId) -> Result<Option<FileRecord>, RepositoryError>;

    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<FileRecord>, RepositoryError>;

    /// Inserts every candidate whose `(name, path)` pair is not yet recorded and
    /// returns the inserted rows. Runs as a single transaction: either all
    /// missing candidates are committed or none are.
    async fn insert_missing(
        &self,
        candidates: &[NewFileRecord],
    ) -> Result<Vec<FileRecord>, RepositoryError>;

    async fn update_summary(&self, id: FileId, summary: &str) -> Result<(), RepositoryError>;
}
