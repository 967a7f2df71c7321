//! # Storage Layer
//!
//! The [`TodoStore`] trait lets the command layer work against any backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per todo, named by its decimal id (`todos/42`)
//!   - File content is produced by [`crate::codec`]
//!   - No index: the directory listing is the list of todos
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Deterministic (id-ordered) listing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! todos/
//! ├── 3        # todo 3
//! ├── 917      # todo 917
//! ├── notes.md # ignored: not all digits
//! └── 7/       # ignored: directory
//! ```
//!
//! Saving is a full overwrite of the record. Ids are not checked for
//! collisions, so saving a new todo under an existing id replaces it.

use crate::error::Result;
use crate::model::{Todo, TodoId};

pub mod fs;
pub mod memory;

/// Abstract interface for todo storage.
pub trait TodoStore {
    /// Save a todo (create or overwrite)
    fn save_todo(&mut self, todo: &Todo) -> Result<()>;

    /// Get a todo by id, `TodoError::NotFound` if there is none
    fn get_todo(&self, id: TodoId) -> Result<Todo>;

    /// List every todo that can be loaded, in backend order
    fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Remove a todo permanently
    fn delete_todo(&mut self, id: TodoId) -> Result<()>;
}

/// Whether a directory entry name can be a todo file: one or more ASCII digits.
pub fn is_todo_file_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}
