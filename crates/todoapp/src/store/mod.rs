//! # Storage Layer
//!
//! The task collection is persisted as a single key-value entry: the key is
//! the fixed literal [`STORAGE_KEY`] and the value is the JSON encoding of the
//! whole collection.
//!
//! ## Split of Responsibilities
//!
//! - [`StorageBackend`]: raw I/O. Reads and writes text under a key and says
//!   whether durable storage exists at all.
//! - [`Persistence`]: encoding, legacy defaults and error recovery. It never
//!   propagates a failure; a bad read becomes an empty collection and a bad
//!   write is logged and reported as [`SaveOutcome::Failed`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per key, written atomically.
//! - [`mem_backend::MemBackend`]: in-process map, for tests and embedding.
//! - [`null_backend::NullBackend`]: environments with no durable storage
//!   (headless rendering). Saves are skipped, loads are empty.
//!
//! The backend is chosen once, when the context is built (see
//! [`crate::init`]), instead of probing the environment at each call.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── todoapp.toml        # Optional configuration
//! └── nuxt-todos.json     # The task collection
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod null_backend;
pub mod persistence;

pub use backend::StorageBackend;
pub use persistence::{Persistence, SaveOutcome, STORAGE_KEY};
