use crate::collection::TodoList;
use crate::form::TaskForm;
use crate::model::{Category, Priority};
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // Keeps the directory alive until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// A hydrated list backed by this environment's directory.
    /// Opening twice simulates a restart.
    pub fn open(&self) -> TodoList<FsBackend> {
        let mut todos = TodoList::new(FsBackend::new(self.root.clone()));
        todos.hydrate();
        todos
    }
}

/// Form with only `text` set.
pub fn form(text: &str) -> TaskForm {
    TaskForm {
        text: text.to_string(),
        ..Default::default()
    }
}

/// Form with every field filled in.
pub fn full_form(text: &str, priority: Priority, category: Category) -> TaskForm {
    TaskForm {
        text: text.to_string(),
        priority,
        category,
        tags: vec!["important".to_string()],
        description: format!("Details for {}", text),
        due_date: "2025-01-02".to_string(),
    }
}
