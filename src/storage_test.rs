use super::*;

fn temp_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("fieldbook-storage-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token").unwrap(), None);
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("abc"));
    storage.set("token", "def").unwrap();
    assert_eq!(storage.get("token").unwrap().as_deref(), Some("def"));
    storage.remove("token").unwrap();
    assert_eq!(storage.get("token").unwrap(), None);
}

#[test]
fn memory_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove("token").is_ok());
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_missing_reads_as_empty() {
    let storage = FileStorage::new(temp_path());
    assert_eq!(storage.get("token").unwrap(), None);
    assert!(storage.remove("token").is_ok());
    assert!(!storage.path().exists());
}

#[test]
fn file_survives_new_handle() {
    let path = temp_path();
    FileStorage::new(&path).set("token", "abc").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get("token").unwrap().as_deref(), Some("abc"));

    reopened.remove("token").unwrap();
    assert_eq!(FileStorage::new(&path).get("token").unwrap(), None);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_keeps_other_keys() {
    let path = temp_path();
    let storage = FileStorage::new(&path);
    storage.set("theme", "dark").unwrap();
    storage.set("token", "abc").unwrap();
    storage.remove("token").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn file_corrupt_contents_is_an_error() {
    let path = temp_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();
    let storage = FileStorage::new(&path);
    assert!(matches!(storage.get("token"), Err(StorageError::Corrupt(_))));
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
