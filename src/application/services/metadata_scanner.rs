use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{FileRepository, RepositoryError};
use crate::domain::NewFileRecord;

/// Registers the regular files of a directory as [`FileRecord`](crate::domain::FileRecord)s.
pub struct MetadataScanner {
    repository: Arc<dyn FileRepository>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

impl MetadataScanner {
    pub fn new(repository: Arc<dyn FileRepository>) -> Self {
        Self { repository }
    }

    /// Lists `directory`, then records every file not already known by
    /// `(name, path)` in one transaction. Any failure leaves the store untouched.
    #[tracing::instrument(skip(self, directory), fields(directory = %directory.display()))]
    pub async fn scan(&self, directory: &Path) -> Result<ScanReport, ScanError> {
        let candidates = list_regular_files(directory).await?;

        let inserted = self
            .repository
            .insert_missing(&candidates)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Error processing files"))?;

        let inserted_keys: HashSet<(&str, &str)> = inserted
            .iter()
            .map(|r| (r.name.as_str(), r.path.as_str()))
            .collect();

        for candidate in &candidates {
            if !inserted_keys.contains(&(candidate.name.as_str(), candidate.path.as_str())) {
                tracing::info!(name = %candidate.name, "File already exists in the database, skipping");
            }
        }

        let report = ScanReport {
            added: inserted.len(),
            skipped: candidates.len() - inserted.len(),
        };

        tracing::info!(
            added = report.added,
            skipped = report.skipped,
            "Successfully processed files from folder"
        );

        Ok(report)
    }
}

async fn list_regular_files(directory: &Path) -> Result<Vec<NewFileRecord>, ScanError> {
    let mut entries = tokio::fs::read_dir(directory)
        .await
        .map_err(io_error(directory))?;

    let mut candidates = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(io_error(directory))? {
        let entry_path = entry.path();

        // Follows symlinks; a dangling link is not a regular file.
        let metadata = match tokio::fs::metadata(&entry_path).await {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(io_error(&entry_path)(e)),
        };

        if !metadata.is_file() {
            continue;
        }

        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| ScanError::InvalidFileName(entry_path.clone()))?;
        let path = entry_path
            .to_str()
            .ok_or_else(|| ScanError::InvalidFileName(entry_path.clone()))?
            .to_string();

        candidates.push(NewFileRecord::new(name, path, metadata.len() as i64));
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(candidates)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> ScanError {
    let path = path.to_path_buf();
    move |source| ScanError::Io { path, source }
}
