//! Option tables and display metadata.
//!
//! Each enumerated attribute has an ordered table of `(value, label, icon)`
//! entries, one per variant, in the order a picker should list them. The
//! tables are the single source of truth for display labels.
//!
//! Lookups by raw string never fail: data written by an older version may
//! carry a value that no longer exists, and the caller gets an empty string
//! for it instead of an error.

use crate::model::{Category, Priority, StatusFilter};

/// One selectable value with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl OptionEntry {
    const fn new(value: &'static str, label: &'static str, icon: &'static str) -> Self {
        Self { value, label, icon }
    }
}

/// Suggested tag with a decorated label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const CATEGORY_OPTIONS: &[OptionEntry] = &[
    OptionEntry::new("work", "仕事", "🏢"),
    OptionEntry::new("personal", "個人", "👤"),
    OptionEntry::new("other", "その他", "📌"),
];

pub const PRIORITY_OPTIONS: &[OptionEntry] = &[
    OptionEntry::new("high", "高", "🔴"),
    OptionEntry::new("medium", "中", "🟡"),
    OptionEntry::new("low", "低", "🟢"),
];

pub const FILTER_OPTIONS: &[OptionEntry] = &[
    OptionEntry::new("all", "すべて", "📋"),
    OptionEntry::new("active", "未完了", "⏳"),
    OptionEntry::new("completed", "完了済み", "✅"),
];

pub const TAG_OPTIONS: &[TagOption] = &[
    TagOption {
        value: "urgent",
        label: "🚨 急ぎ",
    },
    TagOption {
        value: "important",
        label: "⭐ 重要",
    },
    TagOption {
        value: "easy",
        label: "😊 簡単",
    },
    TagOption {
        value: "research",
        label: "🔍 調査",
    },
];

/// Finds the entry for `value` in `table`.
pub fn find_option(table: &'static [OptionEntry], value: &str) -> Option<&'static OptionEntry> {
    table.iter().find(|entry| entry.value == value)
}

fn label_of(table: &'static [OptionEntry], value: &str) -> &'static str {
    find_option(table, value).map_or("", |entry| entry.label)
}

fn icon_of(table: &'static [OptionEntry], value: &str) -> &'static str {
    find_option(table, value).map_or("", |entry| entry.icon)
}

pub fn priority_label(value: &str) -> &'static str {
    label_of(PRIORITY_OPTIONS, value)
}

pub fn priority_icon(value: &str) -> &'static str {
    icon_of(PRIORITY_OPTIONS, value)
}

pub fn category_label(value: &str) -> &'static str {
    label_of(CATEGORY_OPTIONS, value)
}

pub fn category_icon(value: &str) -> &'static str {
    icon_of(CATEGORY_OPTIONS, value)
}

pub fn filter_label(value: &str) -> &'static str {
    label_of(FILTER_OPTIONS, value)
}

/// Decorated label for a suggested tag; free-form tags have none.
pub fn tag_label(value: &str) -> &'static str {
    TAG_OPTIONS
        .iter()
        .find(|tag| tag.value == value)
        .map_or("", |tag| tag.label)
}

impl Priority {
    pub fn label(self) -> &'static str {
        priority_label(self.as_str())
    }

    pub fn icon(self) -> &'static str {
        priority_icon(self.as_str())
    }
}

impl Category {
    pub fn label(self) -> &'static str {
        category_label(self.as_str())
    }

    pub fn icon(self) -> &'static str {
        category_icon(self.as_str())
    }
}

impl StatusFilter {
    pub fn label(self) -> &'static str {
        filter_label(self.as_str())
    }
}

/// What to show when the filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub message: &'static str,
    pub sub_message: &'static str,
    pub icon: &'static str,
}

/// An active search takes precedence over the status filter.
pub fn empty_state(filter: StatusFilter, has_search_query: bool) -> EmptyState {
    if has_search_query {
        return EmptyState {
            message: "検索結果が見つかりません",
            sub_message: "別のキーワードで検索してみてください",
            icon: "🔍",
        };
    }
    match filter {
        StatusFilter::Active => EmptyState {
            message: "未完了のTodoはありません",
            sub_message: "新しいTodoを追加するか、完了済みタブをチェックしてみてください",
            icon: "⏳",
        },
        StatusFilter::Completed => EmptyState {
            message: "完了済みのTodoはありません",
            sub_message: "Todoを完了してここに表示しましょう",
            icon: "🎉",
        },
        StatusFilter::All => EmptyState {
            message: "Todoが登録されていません",
            sub_message: "上のフォームから最初のTodoを追加してみてください",
            icon: "📝",
        },
    }
}
