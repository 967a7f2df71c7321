use super::TodoStore;
use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId};
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data. Lists in ascending id order.
#[derive(Default)]
pub struct InMemoryStore {
    todos: BTreeMap<TodoId, Todo>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoStore for InMemoryStore {
    fn save_todo(&mut self, todo: &Todo) -> Result<()> {
        self.todos.insert(todo.id, todo.clone());
        Ok(())
    }

    fn get_todo(&self, id: TodoId) -> Result<Todo> {
        self.todos.get(&id).cloned().ok_or(TodoError::NotFound(id))
    }

    fn list_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.values().cloned().collect())
    }

    fn delete_todo(&mut self, id: TodoId) -> Result<()> {
        if self.todos.remove(&id).is_none() {
            return Err(TodoError::Delete {
                path: id.to_string().into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todo(mut self, id: u64, title: &str) -> Self {
            let todo = Todo::new(TodoId(id), title);
            self.store.save_todo(&todo).unwrap();
            self
        }

        pub fn with_completed_todo(mut self, id: u64, title: &str) -> Self {
            let mut todo = Todo::new(TodoId(id), title);
            todo.complete();
            self.store.save_todo(&todo).unwrap();
            self
        }
    }
}
