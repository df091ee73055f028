//! # Task Collection Store
//!
//! [`TodoList`] owns the authoritative, insertion-ordered list of tasks and the
//! UI selection state. It is the only way to change either.
//!
//! ## Revisions
//!
//! Two counters drive everything downstream:
//!
//! - `revision` is bumped by every effective change to the tasks. Persistence
//!   compares it with the last saved revision; the stats and the view cache
//!   key on it.
//! - `selection_revision` is bumped by every change to the filter, search or
//!   sort selectors. Only the filtered view depends on it.
//!
//! Operations that turn out to be no-ops (toggling an unknown id, completing
//! an already complete list) leave both counters alone.
//!
//! ## Write-Through
//!
//! With [`WriteMode::Immediate`] every effective change is saved before the
//! call returns. With [`WriteMode::Deferred`] changes accumulate until
//! [`TodoList::flush`] (or drop). Each save writes the whole current
//! collection, so the last change always wins. A failed save leaves the list
//! dirty and the next flush retries.
//!
//! The expanded set is display state: it never bumps a revision and is never
//! saved.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::WriteMode;
use crate::dates::now_millis;
use crate::error::{Result, TodoError};
use crate::form::{TaskForm, TaskPatch};
use crate::model::{Category, Priority, SortOrder, StatusFilter, Task, TaskId};
use crate::store::persistence::encode_pretty;
use crate::store::{Persistence, SaveOutcome, StorageBackend};
use crate::view::{filter_and_sort, Selection, TaskStats, ViewCache};

pub struct TodoList<B: StorageBackend> {
    tasks: Vec<Task>,
    selection: Selection,
    expanded: BTreeSet<TaskId>,
    persistence: Persistence<B>,
    write_mode: WriteMode,
    revision: u64,
    selection_revision: u64,
    saved_revision: u64,
    cache: ViewCache,
}

impl<B: StorageBackend> TodoList<B> {
    /// Empty list writing through to `backend` immediately.
    pub fn new(backend: B) -> Self {
        Self {
            tasks: Vec::new(),
            selection: Selection::default(),
            expanded: BTreeSet::new(),
            persistence: Persistence::with_backend(backend),
            write_mode: WriteMode::Immediate,
            revision: 0,
            selection_revision: 0,
            saved_revision: 0,
            cache: ViewCache::new(),
        }
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }

    // --- Hydration & persistence ---

    /// Replaces the in-memory collection with whatever storage holds.
    /// Meant to run once, right after construction. Returns the task count.
    ///
    /// Records repeating an earlier id are dropped; the list then stays dirty
    /// so the next flush writes the repaired collection back.
    pub fn hydrate(&mut self) -> usize {
        let mut seen = BTreeSet::new();
        let mut duplicates = 0;
        self.tasks = self
            .persistence
            .load()
            .into_iter()
            .filter(|task| {
                if seen.insert(task.id) {
                    return true;
                }
                tracing::warn!(
                    id = task.id,
                    text = %task.text,
                    "dropping stored task with duplicate id"
                );
                duplicates += 1;
                false
            })
            .collect();

        self.expanded.retain(|id| seen.contains(id));
        self.revision += 1;
        if duplicates == 0 {
            // Storage already holds exactly this state.
            self.saved_revision = self.revision;
        }
        self.tasks.len()
    }

    /// Saves the collection if it changed since the last successful save.
    pub fn flush(&mut self) -> SaveOutcome {
        if !self.is_dirty() {
            return SaveOutcome::Skipped;
        }
        let outcome = self.persistence.save(&self.tasks);
        if outcome != SaveOutcome::Failed {
            self.saved_revision = self.revision;
        }
        outcome
    }

    pub fn is_dirty(&self) -> bool {
        self.saved_revision != self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
        if self.write_mode == WriteMode::Immediate {
            self.flush();
        }
    }

    // --- Reads ---

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Version of the task data; changes whenever the collection does.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Version of the selectors; changes whenever filter, search or sort do.
    pub fn selection_revision(&self) -> u64 {
        self.selection_revision
    }

    // --- Mutations ---

    /// Creates a task from `form` and appends it.
    pub fn add(&mut self, form: &TaskForm) -> Result<Task> {
        let created_at = now_millis();
        let id = self.next_id(created_at.timestamp_millis());
        let task = Task::new(id, created_at, form)?;

        self.tasks.push(task.clone());
        self.touch();
        Ok(task)
    }

    /// Applies `patch` to the task with `id`.
    ///
    /// Returns [`TodoError::NotFound`] without touching anything when the id
    /// is unknown.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> Result<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TodoError::NotFound(id))?;
        task.apply(patch)?;
        let updated = task.clone();

        self.touch();
        Ok(updated)
    }

    /// Deletes the task with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: TaskId) -> bool {
        self.expanded.remove(&id);
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.touch();
        true
    }

    /// Flips completion. Returns the new state, or None if `id` is unknown.
    pub fn toggle_completion(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.touch();
        Some(completed)
    }

    /// Removes every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let removed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| task.id)
            .collect();
        if removed.is_empty() {
            return 0;
        }

        self.tasks.retain(|task| !task.completed);
        for id in &removed {
            self.expanded.remove(id);
        }
        self.touch();
        removed.len()
    }

    /// Marks every task complete. Returns how many changed.
    pub fn complete_all(&mut self) -> usize {
        self.set_all_completed(true)
    }

    /// Marks every task active. Returns how many changed.
    pub fn uncomplete_all(&mut self) -> usize {
        self.set_all_completed(false)
    }

    fn set_all_completed(&mut self, completed: bool) -> usize {
        let mut changed = 0;
        for task in self.tasks.iter_mut().filter(|t| t.completed != completed) {
            task.completed = completed;
            changed += 1;
        }
        if changed > 0 {
            self.touch();
        }
        changed
    }

    fn next_id(&self, now_ms: i64) -> TaskId {
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max) if max >= now_ms => max + 1,
            _ => now_ms,
        }
    }

    // --- Expanded (display only) ---

    /// Returns whether `id` is expanded after the toggle.
    pub fn toggle_expanded(&mut self, id: TaskId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    pub fn is_expanded(&self, id: TaskId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.expanded.iter().copied()
    }

    // --- Selection ---

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.selection.filter != filter {
            self.selection.filter = filter;
            self.selection_revision += 1;
        }
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        if self.selection.category != category {
            self.selection.category = category;
            self.selection_revision += 1;
        }
    }

    pub fn set_priority_filter(&mut self, priority: Option<Priority>) {
        if self.selection.priority != priority {
            self.selection.priority = priority;
            self.selection_revision += 1;
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.selection.search_query != query {
            self.selection.search_query = query;
            self.selection_revision += 1;
        }
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        if self.selection.sort_order != sort_order {
            self.selection.sort_order = sort_order;
            self.selection_revision += 1;
        }
    }

    // --- Derived views ---

    /// Filtered and sorted view, rebuilt only when tasks or selectors changed.
    pub fn filtered(&self) -> Rc<[Task]> {
        self.cache.view(self.revision, self.selection_revision, || {
            filter_and_sort(&self.tasks, &self.selection)
        })
    }

    pub fn stats(&self) -> TaskStats {
        self.cache.stats(self.revision, || TaskStats::compute(&self.tasks))
    }

    pub fn completed_count(&self) -> usize {
        self.stats().completed
    }

    pub fn active_count(&self) -> usize {
        self.stats().active
    }

    pub fn progress_percentage(&self) -> u8 {
        self.stats().progress
    }

    pub(crate) fn view_recompute_count(&self) -> usize {
        self.cache.recompute_count()
    }

    // --- Export ---

    /// Pretty-printed JSON of the whole collection. Does not change state.
    pub fn export_snapshot(&self) -> Result<String> {
        encode_pretty(&self.tasks)
    }

    /// Writes the snapshot to `dir/todos-<date>.json` and returns the path.
    pub fn write_export(&self, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
        let snapshot = self.export_snapshot()?;
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(TodoError::Io)?;
        }
        let path = dir.join(export_file_name(date));
        fs::write(&path, snapshot).map_err(TodoError::Io)?;
        tracing::debug!(path = %path.display(), count = self.tasks.len(), "exported tasks");
        Ok(path)
    }
}

impl<B: StorageBackend> Drop for TodoList<B> {
    fn drop(&mut self) {
        if self.is_dirty() {
            self.flush();
        }
    }
}

/// Download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("todos-{}.json", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::STORAGE_KEY;
    use crate::test_utils::{form, full_form, TestEnv};

    fn list() -> TodoList<MemBackend> {
        TodoList::new(MemBackend::new())
    }

    #[test]
    fn add_minimal_input_fills_defaults() {
        let mut todos = list();
        let task = todos.add(&form("Write documentation")).unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category, Category::Personal);
        assert!(task.tags.is_empty());
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(todos.tasks(), &[task]);
    }

    #[test]
    fn add_trims_text() {
        let mut todos = list();
        let a = todos.add(&form("  X  ")).unwrap();
        let b = todos.add(&form("X")).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn add_rejects_blank_text_without_change() {
        let mut todos = list();
        assert!(matches!(todos.add(&form("  ")), Err(TodoError::EmptyText)));
        assert!(todos.is_empty());
        assert_eq!(todos.revision(), 0);
    }

    #[test]
    fn add_copies_tags() {
        let mut todos = list();
        let mut input = form("Tagged");
        input.tags = vec!["a".into()];
        let task = todos.add(&input).unwrap();

        input.tags.push("b".into());
        input.tags[0] = "changed".into();

        assert_eq!(todos.get_by_id(task.id).unwrap().tags, vec!["a"]);
    }

    #[test]
    fn ids_are_unique_within_one_millisecond() {
        let mut todos = list();
        let ids: Vec<_> = (0..50)
            .map(|i| todos.add(&form(&format!("t{}", i))).unwrap().id)
            .collect();
        let unique: BTreeSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut todos = list();
        todos.add(&form("first")).unwrap();
        todos.add(&form("second")).unwrap();
        let texts: Vec<_> = todos.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut todos = list();
        let mut input = form("Initial title");
        input.priority = Priority::High;
        input.tags = vec!["x".into()];
        input.description = "  raw  ".into();
        let task = todos.add(&input).unwrap();

        let updated = todos
            .update(
                task.id,
                &TaskPatch {
                    text: Some("Y".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.text, "Y");
        assert_eq!(updated.priority, task.priority);
        assert_eq!(updated.tags, task.tags);
        assert_eq!(updated.description, "raw");
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(updated.id, task.id);
        assert_eq!(todos.get_by_id(task.id), Some(&updated));
    }

    #[test]
    fn update_trims_and_replaces_tags() {
        let mut todos = list();
        let task = todos.add(&form("Initial title")).unwrap();
        let tags = vec!["urgent".to_string()];

        let updated = todos
            .update(
                task.id,
                &TaskPatch {
                    text: Some("  Renamed title  ".into()),
                    description: Some("  Updated description  ".into()),
                    tags: Some(tags.clone()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.text, "Renamed title");
        assert_eq!(updated.description, "Updated description");
        assert_eq!(updated.tags, tags);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut todos = list();
        todos.add(&form("Only")).unwrap();
        let before = todos.tasks().to_vec();
        let revision = todos.revision();

        let result = todos.update(
            999,
            &TaskPatch {
                text: Some("Missing todo".into()),
                ..Default::default()
            },
        );

        assert!(matches!(result, Err(TodoError::NotFound(999))));
        assert_eq!(todos.tasks(), before.as_slice());
        assert_eq!(todos.revision(), revision);
    }

    #[test]
    fn update_due_date_set_and_clear() {
        let mut todos = list();
        let task = todos.add(&form("Pay rent")).unwrap();

        let set = TaskPatch {
            due_date: Some("2025-02-01".into()),
            ..Default::default()
        };
        assert_eq!(
            todos.update(task.id, &set).unwrap().due_date.as_deref(),
            Some("2025-02-01")
        );

        let untouched = TaskPatch {
            text: Some("Pay rent now".into()),
            ..Default::default()
        };
        assert!(todos.update(task.id, &untouched).unwrap().due_date.is_some());

        let clear = TaskPatch {
            due_date: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(todos.update(task.id, &clear).unwrap().due_date, None);
    }

    #[test]
    fn remove_drops_task_and_expanded_state() {
        let mut todos = list();
        let task = todos.add(&form("Doomed")).unwrap();
        todos.toggle_expanded(task.id);

        assert!(todos.remove(task.id));
        assert!(todos.is_empty());
        assert!(!todos.is_expanded(task.id));
        assert!(!todos.remove(task.id));
    }

    #[test]
    fn toggle_completion_flips_and_ignores_unknown() {
        let mut todos = list();
        let task = todos.add(&form("Flip")).unwrap();

        assert_eq!(todos.toggle_completion(task.id), Some(true));
        assert_eq!(todos.toggle_completion(task.id), Some(false));

        let revision = todos.revision();
        assert_eq!(todos.toggle_completion(42), None);
        assert_eq!(todos.revision(), revision);
    }

    #[test]
    fn toggle_expanded_is_display_only() {
        let mut todos = list();
        let task = todos.add(&form("Expand me")).unwrap();
        let revision = todos.revision();
        let writes = todos.persistence().backend().write_count();

        assert!(todos.toggle_expanded(task.id));
        assert!(todos.is_expanded(task.id));
        assert!(!todos.toggle_expanded(task.id));
        assert_eq!(todos.expanded_ids().count(), 0);

        assert_eq!(todos.revision(), revision);
        assert_eq!(todos.persistence().backend().write_count(), writes);
    }

    #[test]
    fn clear_completed_removes_only_completed() {
        let mut todos = list();
        let keep = todos.add(&form("keep")).unwrap();
        let done_a = todos.add(&form("done a")).unwrap();
        let done_b = todos.add(&form("done b")).unwrap();
        todos.toggle_completion(done_a.id);
        todos.toggle_completion(done_b.id);
        todos.toggle_expanded(done_a.id);
        todos.toggle_expanded(keep.id);

        assert_eq!(todos.clear_completed(), 2);

        let ids: Vec<_> = todos.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![keep.id]);
        assert_eq!(todos.expanded_ids().collect::<Vec<_>>(), vec![keep.id]);
        assert_eq!(todos.clear_completed(), 0);
    }

    #[test]
    fn complete_and_uncomplete_all() {
        let mut todos = list();
        let a = todos.add(&form("a")).unwrap();
        todos.add(&form("b")).unwrap();
        todos.toggle_completion(a.id);

        assert_eq!(todos.complete_all(), 1);
        assert_eq!(todos.completed_count(), 2);
        assert_eq!(todos.complete_all(), 0);

        assert_eq!(todos.uncomplete_all(), 2);
        assert_eq!(todos.active_count(), 2);
    }

    #[test]
    fn aggregates_stay_consistent() {
        let mut todos = list();
        assert_eq!(todos.progress_percentage(), 0);

        let a = todos.add(&form("a")).unwrap();
        let b = todos.add(&form("b")).unwrap();
        todos.add(&form("c")).unwrap();
        todos.toggle_completion(a.id);
        assert_eq!(todos.progress_percentage(), 33);

        todos.toggle_completion(b.id);
        assert_eq!(todos.progress_percentage(), 67);

        todos.remove(a.id);
        let stats = todos.stats();
        assert_eq!(stats.active + stats.completed, todos.len());
        assert_eq!(stats.progress, 50);
    }

    #[test]
    fn view_is_memoized_between_changes() {
        let mut todos = list();
        todos.add(&form("a")).unwrap();

        let first = todos.filtered();
        let second = todos.filtered();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(todos.view_recompute_count(), 1);

        todos.add(&form("b")).unwrap();
        assert_eq!(todos.filtered().len(), 2);
        assert_eq!(todos.view_recompute_count(), 2);

        todos.set_search_query("b");
        assert_eq!(todos.filtered().len(), 1);
        todos.set_search_query("b");
        todos.filtered();
        assert_eq!(todos.view_recompute_count(), 3);
    }

    #[test]
    fn view_reflects_toggle_immediately() {
        let mut todos = list();
        let task = todos.add(&form("a")).unwrap();
        todos.set_filter(StatusFilter::Active);
        assert_eq!(todos.filtered().len(), 1);

        todos.toggle_completion(task.id);
        assert!(todos.filtered().is_empty());
    }

    #[test]
    fn immediate_mode_writes_on_every_change() {
        let mut todos = list();
        todos.add(&form("Ship contributor guide")).unwrap();

        let backend = todos.persistence().backend();
        assert_eq!(backend.write_count(), 1);
        let raw = backend.read(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("Ship contributor guide"));
        assert!(!todos.is_dirty());
    }

    #[test]
    fn deferred_mode_writes_latest_state_on_flush() {
        let mut todos = list().with_write_mode(WriteMode::Deferred);
        let task = todos.add(&form("first")).unwrap();
        todos
            .update(
                task.id,
                &TaskPatch {
                    text: Some("final".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(todos.persistence().backend().write_count(), 0);
        assert!(todos.is_dirty());

        assert_eq!(todos.flush(), SaveOutcome::Written);
        assert_eq!(todos.flush(), SaveOutcome::Skipped);
        assert_eq!(todos.persistence().backend().write_count(), 1);
        assert_eq!(todos.persistence().load()[0].text, "final");
    }

    #[test]
    fn failed_save_stays_dirty_and_retries() {
        let mut todos = list();
        todos.persistence().backend().set_simulate_write_error(true);
        todos.add(&form("a")).unwrap();
        assert!(todos.is_dirty());

        todos.persistence().backend().set_simulate_write_error(false);
        assert_eq!(todos.flush(), SaveOutcome::Written);
        assert!(!todos.is_dirty());
    }

    #[test]
    fn hydrate_replaces_collection() {
        let mut source = list();
        source.add(&form("persisted")).unwrap();
        let raw = source.persistence().backend().read(STORAGE_KEY).unwrap().unwrap();

        let mut todos = TodoList::new(MemBackend::with_entry(STORAGE_KEY, &raw));
        assert_eq!(todos.hydrate(), 1);
        assert_eq!(todos.tasks()[0].text, "persisted");
        assert!(!todos.is_dirty());
        assert_eq!(todos.persistence().backend().write_count(), 0);
    }

    #[test]
    fn hydrate_drops_duplicate_ids() {
        let stored = r#"[
            {"id":7,"text":"first","completed":false,"createdAt":"2024-01-01T10:00:00.000Z"},
            {"id":7,"text":"copy","completed":true,"createdAt":"2024-01-01T10:00:00.000Z"},
            {"id":8,"text":"other","completed":false,"createdAt":"2024-01-01T11:00:00.000Z"}
        ]"#;
        let mut todos = TodoList::new(MemBackend::with_entry(STORAGE_KEY, stored));

        assert_eq!(todos.hydrate(), 2);
        assert_eq!(todos.get_by_id(7).unwrap().text, "first");
        assert!(todos.is_dirty());

        assert!(todos.remove(7));
        let ids: Vec<_> = todos.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![8]);
        assert!(!todos.persistence().load().iter().any(|t| t.text == "copy"));
    }

    #[test]
    fn new_ids_follow_hydrated_ids_from_the_future() {
        let far_future = r#"[{"id":99999999999999,"text":"later","completed":false,"createdAt":"2024-01-01T10:00:00.000Z"}]"#;
        let mut todos = TodoList::new(MemBackend::with_entry(STORAGE_KEY, far_future));
        todos.hydrate();
        let task = todos.add(&form("now")).unwrap();
        assert_eq!(task.id, 100_000_000_000_000);
    }

    #[test]
    fn export_snapshot_is_pretty_and_pure() {
        let mut todos = list();
        todos.add(&form("Export me")).unwrap();
        let revision = todos.revision();

        let snapshot = todos.export_snapshot().unwrap();
        assert!(snapshot.contains("\n  {"));
        assert!(snapshot.contains("\"text\": \"Export me\""));
        assert_eq!(todos.revision(), revision);
    }

    #[test]
    fn export_file_name_uses_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "todos-2024-03-09.json");
    }

    #[test]
    fn drop_flushes_deferred_changes() {
        struct Shared(Rc<MemBackend>);
        impl StorageBackend for Shared {
            fn read(&self, key: &str) -> Result<Option<String>> {
                self.0.read(key)
            }
            fn write(&self, key: &str, value: &str) -> Result<()> {
                self.0.write(key, value)
            }
            fn is_available(&self) -> bool {
                true
            }
        }

        let backend = Rc::new(MemBackend::new());
        {
            let mut todos =
                TodoList::new(Shared(Rc::clone(&backend))).with_write_mode(WriteMode::Deferred);
            todos.add(&form("kept on drop")).unwrap();
            assert_eq!(backend.write_count(), 0);
        }
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn restart_restores_every_field() {
        let env = TestEnv::new();
        let original = {
            let mut todos = env.open();
            let task = todos
                .add(&full_form("Survive restart", Priority::High, Category::Work))
                .unwrap();
            todos.toggle_completion(task.id);
            todos.get_by_id(task.id).cloned().unwrap()
        };

        let reopened = env.open();
        assert_eq!(reopened.tasks(), &[original]);
    }
}
