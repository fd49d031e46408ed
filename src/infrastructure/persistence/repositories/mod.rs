mod in_memory_file_repository;
mod pg_file_repository;

pub use in_memory_file_repository::InMemoryFileRepository;
pub use pg_file_repository::PgFileRepository;
