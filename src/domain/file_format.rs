use std::fmt;

/// Formats the extraction pipeline knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    Pdf,
    Docx,
    Txt,
}

impl FileFormat {
    /// Resolves a declared format tag, ignoring case. Unknown tags are unsupported.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format tag recorded for a file name: everything after the last `.`,
/// or the whole name when it has no dot.
pub fn format_tag(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, suffix)) => suffix.to_string(),
        None => filename.to_string(),
    }
}
