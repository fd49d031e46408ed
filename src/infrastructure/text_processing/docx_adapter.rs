use std::io::{Cursor, Read};
use std::path::Path;

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::FileFormat;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the body paragraphs of an Office Open XML word-processing document.
pub struct DocxAdapter;

impl DocxAdapter {
    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("not a docx archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        Ok(xml)
    }
}

/// Text of each top-level `w:p` under `w:body`, in document order.
///
/// Paragraphs nested in tables, text boxes or other containers are not part
/// of the body's paragraph list and are skipped.
pub fn body_paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut open_paragraphs = 0usize;
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("malformed {DOCUMENT_PART}: {e}"))
        })?;

        match event {
            Event::Start(e) => {
                depth += 1;
                match e.local_name().as_ref() {
                    b"body" if body_depth.is_none() => body_depth = Some(depth),
                    b"p" => {
                        open_paragraphs += 1;
                        if open_paragraphs == 1 && body_depth == Some(depth - 1) {
                            current = Some(String::new());
                        }
                    }
                    b"t" => in_text = true,
                    _ => {}
                }
            }
            Event::End(e) => {
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => {
                        if open_paragraphs == 1 {
                            if let Some(text) = current.take() {
                                paragraphs.push(text);
                            }
                        }
                        open_paragraphs = open_paragraphs.saturating_sub(1);
                    }
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if open_paragraphs == 0 && body_depth == Some(depth) => {
                    paragraphs.push(String::new());
                }
                b"tab" => push_to(&mut current, open_paragraphs, "\t"),
                b"br" | b"cr" => push_to(&mut current, open_paragraphs, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("malformed {DOCUMENT_PART}: {e}"))
                })?;
                push_to(&mut current, open_paragraphs, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to(current: &mut Option<String>, open_paragraphs: usize, text: &str) {
    if open_paragraphs == 1 {
        if let Some(paragraph) = current.as_mut() {
            paragraph.push_str(text);
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    async fn extract_text(
        &self,
        path: &Path,
        format: FileFormat,
    ) -> Result<String, FileLoaderError> {
        if format != FileFormat::Docx {
            return Err(FileLoaderError::UnsupportedFormat(format.to_string()));
        }

        let data = tokio::fs::read(path).await?;
        let xml = Self::read_document_part(&data)?;
        let paragraphs = body_paragraphs(&xml)?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs.join("\n"))
    }
}
