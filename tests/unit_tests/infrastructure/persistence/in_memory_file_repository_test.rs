use folio::application::ports::{FileRepository, RepositoryError};
use folio::domain::{FileId, NewFileRecord};
use folio::infrastructure::persistence::InMemoryFileRepository;

fn candidate(name: &str) -> NewFileRecord {
    NewFileRecord::new(name.to_string(), format!("/uploads/{name}"), 10)
}

#[tokio::test]
async fn given_new_candidates_when_inserting_then_assigns_increasing_ids() {
    let repository = InMemoryFileRepository::new();

    let inserted = repository
        .insert_missing(&[candidate("a.txt"), candidate("b.txt")])
        .await
        .unwrap();

    let ids: Vec<i64> = inserted.iter().map(|r| r.id.as_i64()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn given_known_candidate_when_inserting_then_skips_it() {
    let repository = InMemoryFileRepository::new();
    repository.insert_missing(&[candidate("a.txt")]).await.unwrap();

    let inserted = repository
        .insert_missing(&[candidate("a.txt"), candidate("c.txt")])
        .await
        .unwrap();

    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].name, "c.txt");
    assert_eq!(repository.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn given_same_name_in_other_path_when_inserting_then_treats_as_new() {
    let repository = InMemoryFileRepository::new();
    repository.insert_missing(&[candidate("a.txt")]).await.unwrap();

    let other = NewFileRecord::new("a.txt".to_string(), "/elsewhere/a.txt".to_string(), 1);
    let inserted = repository.insert_missing(&[other]).await.unwrap();

    assert_eq!(inserted.len(), 1);
}

#[tokio::test]
async fn given_unknown_id_when_updating_summary_then_returns_not_found() {
    let repository = InMemoryFileRepository::new();

    let result = repository.update_summary(FileId::from_i64(3), "x").await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
async fn given_record_when_updating_summary_then_overwrites_previous() {
    let repository = InMemoryFileRepository::new();
    let inserted = repository.insert_missing(&[candidate("a.txt")]).await.unwrap();
    let id = inserted[0].id;

    repository.update_summary(id, "first").await.unwrap();
    repository.update_summary(id, "second").await.unwrap();

    let record = repository.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(record.summary.as_deref(), Some("second"));
}
