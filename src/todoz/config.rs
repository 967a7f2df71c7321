use crate::error::{Result, TodoError};
use std::path::{Path, PathBuf};

const TODOS_DIR_NAME: &str = "todos";
const DEFAULT_ID_RANGE: u64 = 1000;

/// Where todos live and how ids are drawn.
///
/// Built once at startup and handed to the API, so nothing below the CLI
/// looks at process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Directory holding one file per todo
    pub todos_dir: PathBuf,

    /// New ids are drawn uniformly from `0..id_range`
    pub id_range: u64,
}

impl TodoConfig {
    /// Todos under `<root>/todos`.
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            todos_dir: root.as_ref().join(TODOS_DIR_NAME),
            id_range: DEFAULT_ID_RANGE,
        }
    }

    /// Todos under `<cwd>/todos`. Failing to resolve the working directory is
    /// fatal.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(TodoError::WorkingDir)?;
        Ok(Self::for_root(cwd))
    }
}
