mod file_format;
mod file_id;
mod file_record;

pub use file_format::{FileFormat, format_tag};
pub use file_id::FileId;
pub use file_record::{FileRecord, NewFileRecord};
