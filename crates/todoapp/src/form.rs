//! Form input types shared by create and edit flows.
//!
//! [`TaskForm`] is the full input used by `add`; [`TaskPatch`] carries only
//! the fields an edit actually changed.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Priority};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskForm {
    pub text: String,
    pub priority: Priority,
    pub category: Category,
    pub tags: Vec<String>,
    pub description: String,
    /// Empty string means "no due date".
    pub due_date: String,
}

impl TaskForm {
    /// Seeds a form from partial initial data; missing fields use defaults.
    pub fn from_patch(initial: TaskPatch) -> Self {
        Self {
            text: initial.text.unwrap_or_default(),
            priority: initial.priority.unwrap_or_default(),
            category: initial.category.unwrap_or_default(),
            tags: initial.tags.unwrap_or_default(),
            description: initial.description.unwrap_or_default(),
            due_date: initial.due_date.unwrap_or_default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Converts the whole form into a patch that overwrites every field.
    pub fn to_patch(&self) -> TaskPatch {
        TaskPatch {
            text: Some(self.text.clone()),
            priority: Some(self.priority),
            category: Some(self.category),
            tags: Some(self.tags.clone()),
            description: Some(self.description.clone()),
            due_date: Some(self.due_date.clone()),
        }
    }
}

/// Partial update input. `None` leaves a field unchanged; for `due_date`,
/// `Some("")` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
}
