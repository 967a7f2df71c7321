use super::{is_todo_file_name, TodoStore};
use crate::codec;
use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store over `dir`. The directory is used as-is and never created.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn todo_path(&self, id: TodoId) -> PathBuf {
        self.dir.join(id.to_string())
    }
}

impl TodoStore for FileStore {
    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        let path = self.todo_path(todo.id);
        let mut file = File::create(&path).map_err(|source| TodoError::Write {
            path: path.clone(),
            source,
        })?;
        file.write_all(&codec::encode(todo))
            .map_err(|source| TodoError::Write { path, source })?;
        debug!(id = %todo.id, completed = todo.completed, "saved todo");
        Ok(())
    }

    fn get_todo(&self, id: TodoId) -> Result<Todo> {
        let path = self.todo_path(id);
        let file = File::open(&path).map_err(|e| {
            debug!(%id, error = %e, "cannot open todo file");
            TodoError::NotFound(id)
        })?;
        let record = codec::decode(file).map_err(|source| TodoError::Read { path, source })?;

        Ok(Todo {
            id,
            completed: record.completed,
            title: record.title,
        })
    }

    fn list_todos(&self) -> Result<Vec<Todo>> {
        let entries = fs::read_dir(&self.dir).map_err(|source| TodoError::ListDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut todos = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else { continue };
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }

            let name = entry.file_name();
            let Some(name) = name.to_str().filter(|n| is_todo_file_name(n)) else {
                debug!(entry = ?entry.file_name(), "skipping non-todo entry");
                continue;
            };
            // All digits, but may still overflow.
            let Ok(id) = name.parse::<TodoId>() else {
                continue;
            };

            match self.get_todo(id) {
                Ok(todo) => todos.push(todo),
                Err(e) => debug!(%id, error = %e, "skipping unloadable todo"),
            }
        }

        Ok(todos)
    }

    fn delete_todo(&mut self, id: TodoId) -> Result<()> {
        let path = self.todo_path(id);
        fs::remove_file(&path).map_err(|source| TodoError::Delete { path, source })?;
        debug!(%id, "deleted todo");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn save_then_get_returns_same_todo() {
        let (_dir, mut store) = setup();
        let mut todo = Todo::new(TodoId(42), "Buy milk\twith tab");
        todo.complete();

        store.save_todo(&todo).unwrap();
        assert_eq!(store.get_todo(TodoId(42)).unwrap(), todo);
    }

    #[test]
    fn file_is_named_by_id_and_holds_encoded_bytes() {
        let (dir, mut store) = setup();
        store.save_todo(&Todo::new(TodoId(7), "hi")).unwrap();

        let bytes = fs::read(dir.path().join("7")).unwrap();
        assert_eq!(bytes, b"\x00hi");
    }

    #[test]
    fn save_overwrites_whole_record() {
        let (dir, mut store) = setup();
        store.save_todo(&Todo::new(TodoId(1), "a long title")).unwrap();
        store.save_todo(&Todo::new(TodoId(1), "short")).unwrap();

        assert_eq!(fs::read(dir.path().join("1")).unwrap(), b"\x00short");
    }

    #[test]
    fn missing_todo_is_not_found() {
        let (_dir, store) = setup();
        let err = store.get_todo(TodoId(999999)).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(TodoId(999999))));
        assert!(!err.is_fatal());
    }

    #[test]
    fn empty_file_loads_as_blank_todo() {
        let (dir, store) = setup();
        fs::write(dir.path().join("5"), b"").unwrap();

        let todo = store.get_todo(TodoId(5)).unwrap();
        assert!(!todo.completed);
        assert_eq!(todo.title, "");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let (_dir, mut store) = setup();
        store.save_todo(&Todo::new(TodoId(3), "x")).unwrap();
        store.delete_todo(TodoId(3)).unwrap();

        assert!(matches!(
            store.get_todo(TodoId(3)),
            Err(TodoError::NotFound(_))
        ));
    }

    #[test]
    fn delete_missing_file_is_recoverable() {
        let (_dir, mut store) = setup();
        let err = store.delete_todo(TodoId(3)).unwrap_err();
        assert!(matches!(err, TodoError::Delete { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn save_into_missing_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("todos"));

        let err = store.save_todo(&Todo::new(TodoId(1), "x")).unwrap_err();
        assert!(matches!(err, TodoError::Write { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn listing_missing_dir_is_fatal() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("todos"));

        let err = store.list_todos().unwrap_err();
        assert!(matches!(err, TodoError::ListDir { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn listing_skips_non_todo_entries() {
        let (dir, mut store) = setup();
        store.save_todo(&Todo::new(TodoId(3), "real")).unwrap();
        fs::write(dir.path().join("abc"), b"\x01nope").unwrap();
        fs::write(dir.path().join("3.txt"), b"\x01nope").unwrap();
        fs::create_dir(dir.path().join("7")).unwrap();

        let todos = store.list_todos().unwrap();
        assert_eq!(todos, vec![Todo::new(TodoId(3), "real")]);
    }

    #[test]
    fn listing_skips_ids_that_overflow() {
        let (dir, store) = setup();
        fs::write(dir.path().join("99999999999999999999999"), b"\x00big").unwrap();

        assert!(store.list_todos().unwrap().is_empty());
    }

    #[test]
    fn listing_returns_every_todo() {
        let (_dir, mut store) = setup();
        for id in [1u64, 20, 300] {
            store.save_todo(&Todo::new(TodoId(id), format!("todo {id}"))).unwrap();
        }

        let mut ids: Vec<_> = store.list_todos().unwrap().iter().map(|t| t.id.0).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 20, 300]);
    }
}
