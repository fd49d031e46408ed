use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::application::ports::{FileRepository, RepositoryError};
use crate::domain::{FileId, FileRecord, NewFileRecord};

pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct FileMetadataRow {
    id: i64,
    name: String,
    path: String,
    format: String,
    size: i64,
    summary: Option<String>,
}

impl From<FileMetadataRow> for FileRecord {
    fn from(row: FileMetadataRow) -> Self {
        Self {
            id: FileId::from_i64(row.id),
            name: row.name,
            path: row.path,
            format: row.format,
            size: row.size,
            summary: row.summary,
        }
    }
}

fn query_failed(e: sqlx::Error) -> RepositoryError {
    RepositoryError::QueryFailed(e.to_string())
}

#[async_trait]
impl FileRepository for PgFileRepository {
    #[instrument(skip(self), fields(file_id = %id))]
    async fn get_by_id(&self, id: FileId) -> Result<Option<FileRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, FileMetadataRow>(
            r#"
            SELECT id, name, path, format, size, summary
            FROM file_metadata
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(row.map(FileRecord::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<FileRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, FileMetadataRow>(
            r#"
            SELECT id, name, path, format, size, summary
            FROM file_metadata
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(rows.into_iter().map(FileRecord::from).collect())
    }

    #[instrument(skip(self, candidates), fields(candidates = candidates.len()))]
    async fn insert_missing(
        &self,
        candidates: &[NewFileRecord],
    ) -> Result<Vec<FileRecord>, RepositoryError> {
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        let mut inserted = Vec::new();

        for candidate in candidates {
            let existing: Option<i64> = sqlx::query_scalar(
                r#"
                SELECT id
                FROM file_metadata
                WHERE name = $1 AND path = $2
                LIMIT 1
                "#,
            )
            .bind(&candidate.name)
            .bind(&candidate.path)
            .fetch_optional(&mut *tx)
            .await
            .map_err(query_failed)?;

            if existing.is_some() {
                continue;
            }

            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO file_metadata (name, path, format, size)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(&candidate.name)
            .bind(&candidate.path)
            .bind(&candidate.format)
            .bind(candidate.size)
            .fetch_one(&mut *tx)
            .await
            .map_err(query_failed)?;

            inserted.push(candidate.clone().into_record(FileId::from_i64(id)));
        }

        tx.commit().await.map_err(query_failed)?;

        Ok(inserted)
    }

    #[instrument(skip(self, summary), fields(file_id = %id))]
    async fn update_summary(&self, id: FileId, summary: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE file_metadata
            SET summary = $1
            WHERE id = $2
            "#,
        )
        .bind(summary)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("file {id}")));
        }

        Ok(())
    }
}
