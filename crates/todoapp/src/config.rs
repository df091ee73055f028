//! # Configuration
//!
//! Configuration is managed by [`clapfig`], which handles layered loading from
//! TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `TODOAPP__WRITE_MODE`, `TODOAPP__SORT_ORDER`, etc.
//! 2. **Data-dir Config**: `todoapp.toml` next to the stored tasks.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `write_mode` | `immediate` | `immediate` saves after every change, `deferred` waits for `flush` |
//! | `sort_order` | `newest` | Initial sort order of the view |
//! | `data_dir` | unset | Directory holding the stored tasks |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::SortOrder;

/// When the store writes changes through to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Save before the mutating call returns.
    #[default]
    Immediate,
    /// Save on `flush` (or drop); many changes collapse into one write.
    Deferred,
}

/// Configuration for todoapp, stored in `todoapp.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// When changes are written through to storage.
    #[config(default = "immediate")]
    pub write_mode: WriteMode,

    /// Sort order the view starts with.
    #[config(default = "newest")]
    pub sort_order: SortOrder,

    /// Directory holding the stored tasks. When absent, the OS data dir is used.
    pub data_dir: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::Immediate,
            sort_order: SortOrder::Newest,
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodoConfig::default();
        assert_eq!(config.write_mode, WriteMode::Immediate);
        assert_eq!(config.sort_order, SortOrder::Newest);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_write_mode_wire_names() {
        let mode: WriteMode = serde_json::from_str("\"deferred\"").unwrap();
        assert_eq!(mode, WriteMode::Deferred);
        assert_eq!(
            serde_json::to_string(&WriteMode::Immediate).unwrap(),
            "\"immediate\""
        );
    }

    #[test]
    fn test_config_deserializes_partial_input() {
        let config: TodoConfig =
            serde_json::from_str(r#"{"write_mode":"deferred","sort_order":"priority"}"#).unwrap();
        assert_eq!(config.write_mode, WriteMode::Deferred);
        assert_eq!(config.sort_order, SortOrder::Priority);
        assert!(config.data_dir.is_none());
    }
}
