use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::Task;

/// Fixed key the collection is stored under.
pub const STORAGE_KEY: &str = "nuxt-todos";

/// What happened to a save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The full collection was written.
    Written,
    /// No durable storage in this environment; nothing to do.
    Skipped,
    /// Encoding or writing failed. Already logged; the caller may retry.
    Failed,
}

/// Best-effort round-trip of the task collection through a [`StorageBackend`].
///
/// Neither `save` nor `load` returns an error: failures are logged and
/// degrade to [`SaveOutcome::Failed`] or an empty collection.
pub struct Persistence<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn save(&self, tasks: &[Task]) -> SaveOutcome {
        if !self.backend.is_available() {
            tracing::debug!("no durable storage, skipping save");
            return SaveOutcome::Skipped;
        }

        let encoded = match encode(tasks) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(error = %error, "failed to encode tasks");
                return SaveOutcome::Failed;
            }
        };

        match self.backend.write(STORAGE_KEY, &encoded) {
            Ok(()) => {
                tracing::debug!(count = tasks.len(), key = STORAGE_KEY, "saved tasks");
                SaveOutcome::Written
            }
            Err(error) => {
                tracing::warn!(error = %error, key = STORAGE_KEY, "failed to save tasks");
                SaveOutcome::Failed
            }
        }
    }

    pub fn load(&self) -> Vec<Task> {
        if !self.backend.is_available() {
            return Vec::new();
        }

        let raw = match self.backend.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(error = %error, key = STORAGE_KEY, "failed to read stored tasks");
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), key = STORAGE_KEY, "loaded tasks");
                tasks
            }
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    key = STORAGE_KEY,
                    "stored tasks are malformed, starting empty"
                );
                Vec::new()
            }
        }
    }
}

/// Compact encoding used for storage.
pub fn encode(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Pretty encoding used for exports.
pub fn encode_pretty(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Decodes a stored collection, back-filling defaults on legacy records.
pub fn decode(raw: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TaskForm;
    use crate::model::{Category, Priority};
    use crate::store::mem_backend::MemBackend;
    use crate::store::null_backend::NullBackend;
    use chrono::{TimeZone, Utc};

    fn sample(id: i64, text: &str) -> Task {
        let form = TaskForm {
            text: text.to_string(),
            priority: Priority::High,
            category: Category::Work,
            tags: vec!["important".into()],
            description: "Restored from storage".into(),
            due_date: "2025-01-02".into(),
        };
        Task::new(id, Utc.timestamp_millis_opt(id).unwrap(), &form).unwrap()
    }

    #[test]
    fn save_then_load_roundtrips() {
        let persistence = Persistence::with_backend(MemBackend::new());
        let tasks = vec![sample(1_704_103_200_000, "One"), sample(1_704_103_200_001, "Two")];

        assert_eq!(persistence.save(&tasks), SaveOutcome::Written);
        assert_eq!(persistence.load(), tasks);
    }

    #[test]
    fn load_without_stored_value_is_empty() {
        let persistence = Persistence::with_backend(MemBackend::new());
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn load_backfills_legacy_records() {
        let stored = r#"[{"id":1,"text":"Persisted task","completed":false,"createdAt":"2024-01-01T10:00:00.000Z"}]"#;
        let persistence = Persistence::with_backend(MemBackend::with_entry(STORAGE_KEY, stored));

        let tasks = persistence.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert_eq!(tasks[0].category, Category::Personal);
        assert!(tasks[0].tags.is_empty());
        assert_eq!(tasks[0].description, "");
        assert_eq!(
            tasks[0].created_at,
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn malformed_stored_text_loads_as_empty() {
        let persistence =
            Persistence::with_backend(MemBackend::with_entry(STORAGE_KEY, "{not json"));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let persistence = Persistence::with_backend(backend);

        assert_eq!(persistence.save(&[sample(1, "x")]), SaveOutcome::Failed);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn unavailable_backend_skips_both_directions() {
        let persistence = Persistence::with_backend(NullBackend::new());
        assert_eq!(persistence.save(&[sample(1, "x")]), SaveOutcome::Skipped);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn stored_value_uses_fixed_key() {
        let persistence = Persistence::with_backend(MemBackend::new());
        persistence.save(&[sample(1, "Ship contributor guide")]);
        let raw = persistence.backend().read(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("Ship contributor guide"));
        assert!(raw.contains("\"createdAt\""));
    }
}
