use std::fs;
use tempfile::TempDir;
use todoapp::store::backend::StorageBackend;
use todoapp::store::fs_backend::FsBackend;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read("nuxt-todos").unwrap(), None);

    backend.write("nuxt-todos", "[]").unwrap();
    assert_eq!(backend.read("nuxt-todos").unwrap(), Some("[]".to_string()));

    // Last write wins
    backend.write("nuxt-todos", "[1]").unwrap();
    assert_eq!(backend.read("nuxt-todos").unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("nuxt-todos", "Atomic").unwrap();

    let expected_path = dir.path().join("nuxt-todos.json");
    assert_eq!(backend.entry_path("nuxt-todos"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "Atomic");

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("data");
    let backend = FsBackend::new(root.clone());

    assert_eq!(backend.root(), root.as_path());
    assert_eq!(backend.read("nuxt-todos").unwrap(), None);

    backend.write("nuxt-todos", "[]").unwrap();
    assert!(root.join("nuxt-todos.json").exists());
    assert!(backend.is_available());
}
