//! # Context Construction
//!
//! The host builds exactly one [`TodoContext`] at startup and passes it by
//! reference to whatever needs the tasks. There is no global instance.
//!
//! ## Environments
//!
//! - [`HostEnvironment::Interactive`]: durable storage is available. Tasks live
//!   in `<data dir>/nuxt-todos.json`.
//! - [`HostEnvironment::Headless`]: e.g. server-side pre-rendering. Storage is
//!   a [`NullBackend`]: loads come back empty and saves are skipped silently.
//!
//! ## Data Directory Resolution
//!
//! 1. The explicit `data_override` argument
//! 2. `TODOAPP_DATA` environment variable
//! 3. `data_dir` from `todoapp.toml`
//! 4. The OS data dir (via the `directories` crate)
//!
//! If none of these can be determined the context falls back to headless
//! storage and logs a warning.

use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::collection::TodoList;
use crate::config::TodoConfig;
use crate::store::fs_backend::FsBackend;
use crate::store::null_backend::NullBackend;
use crate::store::StorageBackend;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TODOAPP_DATA";

/// Where the host is running, decided once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    Interactive,
    Headless,
}

pub struct TodoContext {
    pub todos: TodoList<Box<dyn StorageBackend>>,
    pub config: TodoConfig,
    /// Directory holding the stored tasks; `None` when headless.
    pub data_dir: Option<PathBuf>,
}

/// Builds the context for `env` and hydrates the collection once.
pub fn initialize(env: HostEnvironment, data_override: Option<PathBuf>) -> TodoContext {
    let env_dir = std::env::var(DATA_DIR_ENV)
        .ok()
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from);
    let default_dir = ProjectDirs::from("com", "todoapp", "todoapp")
        .map(|dirs| dirs.data_dir().to_path_buf());

    // Config may live next to the data, so look wherever data could be.
    let config_dir = data_override
        .clone()
        .or_else(|| env_dir.clone())
        .or_else(|| default_dir.clone());
    let config = load_config(config_dir);

    let data_dir = match env {
        HostEnvironment::Headless => None,
        HostEnvironment::Interactive => resolve_data_dir(
            data_override,
            env_dir,
            config.data_dir.clone(),
            default_dir,
        ),
    };

    let backend: Box<dyn StorageBackend> = match &data_dir {
        Some(dir) => Box::new(FsBackend::new(dir.clone())),
        None => {
            if env == HostEnvironment::Interactive {
                tracing::warn!("no data directory could be determined, tasks will not persist");
            }
            Box::new(NullBackend::new())
        }
    };

    let mut todos = TodoList::new(backend).with_write_mode(config.write_mode);
    todos.set_sort_order(config.sort_order);
    let count = todos.hydrate();
    tracing::debug!(
        count,
        data_dir = ?data_dir,
        write_mode = ?config.write_mode,
        "initialized todo context"
    );

    TodoContext {
        todos,
        config,
        data_dir,
    }
}

/// Picks the first directory that is set, in priority order.
pub fn resolve_data_dir(
    data_override: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    default_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    data_override.or(env_dir).or(config_dir).or(default_dir)
}

fn load_config(dir: Option<PathBuf>) -> TodoConfig {
    let search_paths = dir.map(SearchPath::Path).into_iter().collect::<Vec<_>>();
    Clapfig::builder()
        .app_name("todoapp")
        .file_name("todoapp.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Installs the global `tracing` subscriber.
///
/// Logging is opt-in via `RUST_LOG`; unset, empty or invalid filters mean off.
/// Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}
