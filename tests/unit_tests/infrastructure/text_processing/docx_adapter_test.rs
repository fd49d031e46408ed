use folio::application::ports::{FileLoader, FileLoaderError};
use folio::domain::FileFormat;
use folio::infrastructure::text_processing::{DocxAdapter, body_paragraphs};

use crate::support::{WORD_NS, write_docx};

fn document(body: &str) -> String {
    format!(r#"<w:document xmlns:w="{WORD_NS}"><w:body>{body}</w:body></w:document>"#)
}

#[test]
fn given_runs_in_paragraph_when_parsing_then_concatenates_run_text() {
    let xml = document(
        "<w:p><w:r><w:t>Hello, </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>world</w:t></w:r></w:p>",
    );

    assert_eq!(body_paragraphs(&xml).unwrap(), vec!["Hello, world"]);
}

#[test]
fn given_empty_paragraphs_when_parsing_then_keeps_them_as_blank_lines() {
    let xml = document("<w:p><w:r><w:t>one</w:t></w:r></w:p><w:p/><w:p></w:p><w:p><w:r><w:t>two</w:t></w:r></w:p>");

    assert_eq!(body_paragraphs(&xml).unwrap(), vec!["one", "", "", "two"]);
}

#[test]
fn given_table_paragraphs_when_parsing_then_skips_them() {
    let xml = document(
        "<w:p><w:r><w:t>before</w:t></w:r></w:p>\
         <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
         <w:p><w:r><w:t>after</w:t></w:r></w:p>",
    );

    assert_eq!(body_paragraphs(&xml).unwrap(), vec!["before", "after"]);
}

#[test]
fn given_tabs_breaks_and_entities_when_parsing_then_maps_them_to_text() {
    let xml = document(
        "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>Fish &amp; chips</w:t></w:r></w:p>",
    );

    assert_eq!(body_paragraphs(&xml).unwrap(), vec!["a\tb\nFish & chips"]);
}

#[test]
fn given_preserved_whitespace_when_parsing_then_keeps_spaces() {
    let xml = document(r#"<w:p><w:r><w:t xml:space="preserve">  padded  </w:t></w:r></w:p>"#);

    assert_eq!(body_paragraphs(&xml).unwrap(), vec!["  padded  "]);
}

#[tokio::test]
async fn given_docx_file_when_extracting_then_joins_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(
        &path,
        "<w:p><w:r><w:t>First</w:t></w:r></w:p><w:p><w:r><w:t>Second</w:t></w:r></w:p>",
    );

    let text = DocxAdapter
        .extract_text(&path, FileFormat::Docx)
        .await
        .unwrap();

    assert_eq!(text, "First\nSecond");
}

#[tokio::test]
async fn given_non_zip_file_when_extracting_then_returns_extraction_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.docx");
    std::fs::write(&path, "plain text pretending").unwrap();

    let result = DocxAdapter.extract_text(&path, FileFormat::Docx).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_other_format_when_extracting_then_returns_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memo.docx");
    write_docx(&path, "<w:p/>");

    let result = DocxAdapter.extract_text(&path, FileFormat::Pdf).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFormat(_))));
}
