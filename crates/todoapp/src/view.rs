//! # Derived Views
//!
//! Everything the presentation layer lists or counts is derived from the
//! collection and the current [`Selection`] by pure functions:
//!
//! - [`filter_and_sort`]: the visible, ordered task list.
//! - [`TaskStats::compute`]: completed / active / total / progress.
//!
//! ## Pipeline
//!
//! Filters run in a fixed order, then one sort:
//!
//! 1. Completion status ([`StatusFilter`])
//! 2. Free-text search over text, description and tags (case-insensitive,
//!    skipped when the trimmed query is empty)
//! 3. Category, exact match
//! 4. Priority, exact match
//! 5. Sort ([`SortOrder`]); all sorts are stable, so ties keep the
//!    insertion order of the collection
//!
//! ## Memoization
//!
//! [`ViewCache`] keys the filtered list on `(collection revision, selection
//! revision)` and the stats on the collection revision alone. The store bumps
//! those counters on every effective change, so a read right after a mutation
//! always recomputes and repeated reads in between share one `Rc`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use feruca::Collator;

use crate::model::{Category, Priority, SortOrder, StatusFilter, Task};

/// UI selection state that feeds the filtered view. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub filter: StatusFilter,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub search_query: String,
    pub sort_order: SortOrder,
}

impl Selection {
    pub fn has_search_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

pub fn filter_and_sort(tasks: &[Task], selection: &Selection) -> Vec<Task> {
    let needle = selection.search_query.trim().to_lowercase();

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| selection.filter.matches(task))
        .filter(|task| needle.is_empty() || task.matches_query(&needle))
        .filter(|task| selection.category.map_or(true, |c| task.category == c))
        .filter(|task| selection.priority.map_or(true, |p| task.priority == p))
        .cloned()
        .collect();

    match selection.sort_order {
        SortOrder::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Priority => {
            visible.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight()))
        }
        SortOrder::Alphabetical => {
            let mut collator = Collator::default();
            visible.sort_by(|a, b| collator.collate(a.text.as_str(), b.text.as_str()))
        }
    }

    visible
}

/// Aggregate counts over the whole collection (not the filtered view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Rounded percentage of completed tasks; 0 for an empty collection.
    pub progress: u8,
}

impl TaskStats {
    pub fn compute(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let progress = if total == 0 {
            0
        } else {
            (completed as f64 / total as f64 * 100.0).round() as u8
        };
        Self {
            total,
            completed,
            active: total - completed,
            progress,
        }
    }
}

struct CachedView {
    key: (u64, u64),
    tasks: Rc<[Task]>,
}

/// Memo for derived values, keyed on the store's revision counters.
#[derive(Default)]
pub struct ViewCache {
    view: RefCell<Option<CachedView>>,
    stats: RefCell<Option<(u64, TaskStats)>>,
    recomputes: Cell<usize>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached view for `(revision, selection_revision)`, running
    /// `compute` only when the key changed.
    pub fn view<F>(&self, revision: u64, selection_revision: u64, compute: F) -> Rc<[Task]>
    where
        F: FnOnce() -> Vec<Task>,
    {
        let key = (revision, selection_revision);
        if let Some(cached) = self.view.borrow().as_ref() {
            if cached.key == key {
                return Rc::clone(&cached.tasks);
            }
        }

        let tasks: Rc<[Task]> = Rc::from(compute());
        self.recomputes.set(self.recomputes.get() + 1);
        *self.view.borrow_mut() = Some(CachedView {
            key,
            tasks: Rc::clone(&tasks),
        });
        tasks
    }

    pub fn stats<F>(&self, revision: u64, compute: F) -> TaskStats
    where
        F: FnOnce() -> TaskStats,
    {
        if let Some((cached_rev, stats)) = *self.stats.borrow() {
            if cached_rev == revision {
                return stats;
            }
        }
        let stats = compute();
        *self.stats.borrow_mut() = Some((revision, stats));
        stats
    }

    /// How many times the filtered view has been rebuilt.
    pub fn recompute_count(&self) -> usize {
        self.recomputes.get()
    }
}
