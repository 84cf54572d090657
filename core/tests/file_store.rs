//! `FileStore` against real files in a temporary directory.

use serde_json::json;
use todo_core::{FileStore, StoreError, Todo, TodoStore};

fn todo(value: serde_json::Value) -> Todo {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("todos.txt"));

    let err = store.load_all().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}

#[tokio::test]
async fn append_creates_file_and_writes_one_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.txt");
    let store = FileStore::new(&path);

    store.append_one(&todo(json!({"id": "a", "title": "one"}))).await.unwrap();
    store.append_one(&todo(json!({"id": "b", "title": "two"}))).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "{\"id\":\"a\",\"title\":\"one\"}\n{\"id\":\"b\",\"title\":\"two\"}\n"
    );

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[1].has_id("b"));
}

#[tokio::test]
async fn append_does_not_read_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.txt");
    std::fs::write(&path, "garbage that does not decode\n").unwrap();
    let store = FileStore::new(&path);

    store.append_one(&todo(json!({"id": "a"}))).await.unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.ends_with("{\"id\":\"a\"}\n"));
    assert!(matches!(store.load_all().await, Err(StoreError::Corrupt(_))));
}

#[tokio::test]
async fn replace_all_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.txt");
    let store = FileStore::new(&path);
    for id in ["a", "b", "c"] {
        store.append_one(&todo(json!({"id": id}))).await.unwrap();
    }

    let mut records = store.load_all().await.unwrap();
    records.remove(1);
    store.replace_all(&records).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "{\"id\":\"a\"}\n{\"id\":\"c\"}\n"
    );
}

#[tokio::test]
async fn replace_all_with_nothing_leaves_a_readable_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.txt");
    let store = FileStore::new(&path);
    store.append_one(&todo(json!({"id": "a"}))).await.unwrap();

    store.replace_all(&[]).await.unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn unwritable_path_fails_with_store_errors() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for appending or overwritten as a file.
    let store = FileStore::new(dir.path());

    let err = store.append_one(&todo(json!({"id": "a"}))).await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));

    let err = store.replace_all(&[]).await.unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
}
