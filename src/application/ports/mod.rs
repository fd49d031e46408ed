mod file_loader;
mod file_repository;
mod llm_client;
mod repository_error;

pub use file_loader::{FileLoader, FileLoaderError};
pub use file_repository::FileRepository;
pub use llm_client::{LlmClient, LlmClientError};
pub use repository_error::RepositoryError;
