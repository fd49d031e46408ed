use super::file_format::format_tag;
use super::FileId;

/// A persisted row describing one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub name: String,
    pub path: String,
    /// Declared format tag, exactly as derived from the file name. Resolved
    /// to a [`FileFormat`](super::FileFormat) only at extraction time.
    pub format: String,
    pub size: i64,
    pub summary: Option<String>,
}

/// A file found on disk that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRecord {
    pub name: String,
    pub path: String,
    pub format: String,
    pub size: i64,
}

impl NewFileRecord {
    pub fn new(name: String, path: String, size: i64) -> Self {
        let format = format_tag(&name);
        Self {
            name,
            path,
            format,
            size,
        }
    }

    pub fn into_record(self, id: FileId) -> FileRecord {
        FileRecord {
            id,
            name: self.name,
            path: self.path,
            format: self.format,
            size: self.size,
            summary: None,
        }
    }
}
