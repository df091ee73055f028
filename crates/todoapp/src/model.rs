//! # Domain Model: Tasks and Their Attribute Domains
//!
//! This module defines the [`Task`] entity and the closed enumerations its
//! attributes draw from: [`Priority`], [`Category`], plus the selection
//! enums the view layer uses ([`StatusFilter`], [`SortOrder`]).
//!
//! ## Stored Form
//!
//! A task is always stored normalized:
//!
//! - `text` and `description` are trimmed; `text` is never empty.
//! - `tags` is an owned copy of whatever the caller handed in.
//! - `created_at` has millisecond precision and is never touched after creation.
//! - `due_date` is `None` rather than an empty string.
//!
//! ## Wire Format
//!
//! Tasks serialize as camelCase JSON records:
//!
//! ```text
//! {
//!   "id": 1704103200000,
//!   "text": "Ship contributor guide",
//!   "completed": false,
//!   "createdAt": "2024-01-01T10:00:00.000Z",
//!   "priority": "high",
//!   "category": "work",
//!   "tags": ["urgent"],
//!   "description": "",
//!   "dueDate": "2025-01-02"      <-- omitted when absent
//! }
//! ```
//!
//! ## Legacy Records
//!
//! Older encodings may lack `priority`, `category`, `tags` or `description`.
//! Deserialization goes through a lenient helper record and back-fills the
//! defaults (medium, personal, `[]`, `""`). Unknown enum strings degrade to the
//! default instead of failing the whole collection.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::dates::parse_due_date;
use crate::error::{Result, TodoError};
use crate::form::{TaskForm, TaskPatch};

/// Task identifier: creation time in epoch milliseconds, bumped on collision.
pub type TaskId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort weight: high=3, medium=2, low=1.
    pub fn weight(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TodoError::UnknownValue {
                kind: "priority",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    #[default]
    Personal,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "other" => Ok(Category::Other),
            other => Err(TodoError::UnknownValue {
                kind: "category",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion-status filter applied first by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(TodoError::UnknownValue {
                kind: "filter",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Priority,
    Alphabetical,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Priority => "priority",
            SortOrder::Alphabetical => "alphabetical",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "priority" => Ok(SortOrder::Priority),
            "alphabetical" => Ok(SortOrder::Alphabetical),
            other => Err(TodoError::UnknownValue {
                kind: "sort order",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
    pub category: Category,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

fn serialize_millis<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

// Lenient deserializer: older encodings may miss the optional attributes.
impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = TaskRecord::deserialize(deserializer)?;

        Ok(Task {
            id: record.id,
            text: record.text.trim().to_string(),
            completed: record.completed,
            created_at: record.created_at,
            priority: parse_or_default(record.priority.as_deref()),
            category: parse_or_default(record.category.as_deref()),
            tags: record.tags.unwrap_or_default(),
            description: record
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            due_date: record.due_date.filter(|d| !d.trim().is_empty()),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
}

/// Missing, empty and unrecognized values all fall back to the default.
fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr<Err = TodoError> + Default,
{
    match raw {
        None | Some("") => T::default(),
        Some(value) => value.parse().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "unknown stored value, using default");
            T::default()
        }),
    }
}

impl Task {
    /// Builds a new task from form input. Text and description are trimmed,
    /// tags are copied, and the due date is validated.
    pub fn new(id: TaskId, created_at: DateTime<Utc>, form: &TaskForm) -> Result<Self> {
        Ok(Self {
            id,
            text: normalize_text(&form.text)?,
            completed: false,
            created_at,
            priority: form.priority,
            category: form.category,
            tags: form.tags.clone(),
            description: form.description.trim().to_string(),
            due_date: normalize_due_date(&form.due_date)?,
        })
    }

    /// Applies the fields present in `patch`. Validation happens before any
    /// field is written, so a rejected patch leaves the task untouched.
    pub fn apply(&mut self, patch: &TaskPatch) -> Result<()> {
        let text = patch.text.as_deref().map(normalize_text).transpose()?;
        let due_date = patch
            .due_date
            .as_deref()
            .map(normalize_due_date)
            .transpose()?;

        if let Some(text) = text {
            self.text = text;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = &patch.tags {
            self.tags = tags.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.trim().to_string();
        }
        // Some("") clears, None leaves it alone.
        if let Some(due_date) = due_date {
            self.due_date = due_date;
        }
        Ok(())
    }

    /// True when any of text, description or tags contains `needle`.
    /// `needle` must already be lower-cased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

fn normalize_text(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// Empty input means "no due date". Anything else must parse as a date.
pub fn normalize_due_date(raw: &str) -> Result<Option<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if parse_due_date(trimmed).is_none() {
        return Err(TodoError::InvalidDueDate(trimmed.to_string()));
    }
    Ok(Some(trimmed.to_string()))
}
