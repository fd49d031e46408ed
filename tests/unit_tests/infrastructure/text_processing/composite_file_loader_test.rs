use std::sync::Arc;

use folio::application::ports::{FileLoader, FileLoaderError};
use folio::domain::FileFormat;
use folio::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use crate::support::write_docx;

#[tokio::test]
async fn given_text_file_when_loading_then_delegates_to_text_adapter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readme.txt");
    std::fs::write(&path, "Hello plain text").unwrap();
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader.extract_text(&path, FileFormat::Txt).await.unwrap();

    assert_eq!(text, "Hello plain text");
}

#[tokio::test]
async fn given_docx_file_when_loading_then_delegates_to_docx_adapter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(&path, "<w:p><w:r><w:t>Memo</w:t></w:r></w:p>");
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader.extract_text(&path, FileFormat::Docx).await.unwrap();

    assert_eq!(text, "Memo");
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_returns_unsupported() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(FileFormat::Txt, text_adapter)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(&path, "<w:p/>");

    let result = loader.extract_text(&path, FileFormat::Docx).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(tag)) if tag == "docx"));
}
