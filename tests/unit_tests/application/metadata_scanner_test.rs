use std::sync::Arc;

use folio::application::ports::FileRepository;
use folio::application::services::{MetadataScanner, ScanError, ScanReport};
use folio::infrastructure::persistence::InMemoryFileRepository;

fn scanner() -> (MetadataScanner, Arc<InMemoryFileRepository>) {
    let repository = Arc::new(InMemoryFileRepository::new());
    let scanner = MetadataScanner::new(Arc::clone(&repository) as Arc<dyn FileRepository>);
    (scanner, repository)
}

#[tokio::test]
async fn given_single_text_file_when_scanning_then_records_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "hello").unwrap();
    let (scanner, repository) = scanner();

    let report = scanner.scan(dir.path()).await.unwrap();

    assert_eq!(report, ScanReport { added: 1, skipped: 0 });
    let records = repository.list().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "a.txt");
    assert_eq!(record.path, path.to_str().unwrap());
    assert_eq!(record.format, "txt");
    assert_eq!(record.size, 5);
    assert_eq!(record.summary, None);
}

#[tokio::test]
async fn given_already_scanned_folder_when_scanning_again_then_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
    std::fs::write(dir.path().join("b.pdf"), "%PDF").unwrap();
    let (scanner, repository) = scanner();

    scanner.scan(dir.path()).await.unwrap();
    let second = scanner.scan(dir.path()).await.unwrap();

    assert_eq!(second, ScanReport { added: 0, skipped: 2 });
    assert_eq!(repository.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_new_file_after_first_scan_when_rescanning_then_only_new_file_is_added() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
    let (scanner, repository) = scanner();
    scanner.scan(dir.path()).await.unwrap();

    std::fs::write(dir.path().join("b.txt"), "world").unwrap();
    let report = scanner.scan(dir.path()).await.unwrap();

    assert_eq!(report, ScanReport { added: 1, skipped: 1 });
    let names: Vec<String> = repository
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);
}

#[tokio::test]
async fn given_subdirectory_when_scanning_then_it_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("nested").join("inner.txt"), "deep").unwrap();
    std::fs::write(dir.path().join("top.txt"), "top").unwrap();
    let (scanner, repository) = scanner();

    let report = scanner.scan(dir.path()).await.unwrap();

    assert_eq!(report.added, 1);
    let records = repository.list().await.unwrap();
    assert_eq!(records[0].name, "top.txt");
}

#[tokio::test]
async fn given_file_without_extension_when_scanning_then_tag_is_whole_name() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README"), "read me").unwrap();
    let (scanner, repository) = scanner();

    scanner.scan(dir.path()).await.unwrap();

    let records = repository.list().await.unwrap();
    assert_eq!(records[0].format, "README");
}

#[tokio::test]
async fn given_empty_folder_when_scanning_then_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (scanner, repository) = scanner();

    let report = scanner.scan(dir.path()).await.unwrap();

    assert_eq!(report, ScanReport::default());
    assert!(repository.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_missing_folder_when_scanning_then_returns_io_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let (scanner, repository) = scanner();

    let result = scanner.scan(&missing).await;

    assert!(matches!(result, Err(ScanError::Io { .. })));
    assert!(repository.list().await.unwrap().is_empty());
}
