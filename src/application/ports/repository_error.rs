/// Failures of the relational store, independent of the driver behind it.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("database unavailable: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("schema migration failed: {0}")]
    MigrationFailed(String),
    #[error("no such record: {0}")]
    NotFound(String),
}
