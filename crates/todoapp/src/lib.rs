//! # Todoapp Architecture
//!
//! Todoapp is the **core of a personal task manager**: the task model, the
//! collection that owns it, the views derived from it and the persistence
//! that keeps it across restarts. Rendering, styling and routing belong to
//! the host application, which calls into this crate and never the other
//! way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (page rendering, forms, export download)              │
//! │  - Owns the TodoContext built by init::initialize           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collection (collection.rs)                                 │
//! │  - The only writer of tasks and selection state             │
//! │  - Bumps revisions, writes through to persistence           │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Views (view.rs)              │ │  Storage (store/)         │
//! │  - Pure filter / sort / stats │ │  - StorageBackend trait   │
//! │  - Memoized on revisions      │ │  - Fs, Mem, Null backends │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! Beneath all of them sits the schema: [`model`] (tasks and their enumerated
//! attributes), [`form`] (input shapes) and [`options`] (display labels).
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout or stderr or exits the process.
//! Failures the user cannot act on (a full disk, a corrupt stored value) are
//! logged through `tracing` and the collection keeps working in memory.
//! Failures the caller can act on (blank text, unknown id, bad due date)
//! come back as [`error::TodoError`].
//!
//! ## Testing Strategy
//!
//! 1. **Schema and views**: unit tests next to the code; views are pure
//!    functions over slices, so no store is needed.
//! 2. **Collection**: unit tests against [`store::mem_backend::MemBackend`],
//!    which counts writes and can simulate failures.
//! 3. **Filesystem**: integration tests in `tests/` against a temp dir.
//!
//! ## Module Overview
//!
//! - [`collection`]: [`TodoList`], the task collection store
//! - [`view`]: filtered view, stats and their memo
//! - [`store`]: backends and the persistence adapter
//! - [`model`], [`form`], [`options`]: entity and option schema
//! - [`dates`]: display formatting and overdue checks
//! - [`config`]: layered configuration
//! - [`init`]: context construction and logging bootstrap
//! - [`error`]: error types

pub mod collection;
pub mod config;
pub mod dates;
pub mod error;
pub mod form;
pub mod init;
pub mod model;
pub mod options;
pub mod store;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use collection::TodoList;
pub use error::{Result, TodoError};
