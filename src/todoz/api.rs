//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! todo operation. It owns the store and the [`TodoConfig`], dispatches to
//! `commands/*.rs` and hands back [`CmdResult`]s. It never prints.
//!
//! `TodoApi<S: TodoStore>` is generic over the backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::config::TodoConfig;
use crate::error::Result;
use crate::model::{Title, TodoId};
use crate::query::ListFilter;
use crate::store::fs::FileStore;
use crate::store::TodoStore;

pub struct TodoApi<S: TodoStore> {
    store: S,
    config: TodoConfig,
}

impl TodoApi<FileStore> {
    /// File-backed API over `config.todos_dir`.
    pub fn open(config: TodoConfig) -> Self {
        let store = FileStore::new(&config.todos_dir);
        Self::new(store, config)
    }
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(store: S, config: TodoConfig) -> Self {
        Self { store, config }
    }

    pub fn create_todo(&mut self, title: Title) -> Result<CmdResult> {
        let mut rng = rand::rng();
        commands::create::run(&mut self.store, &mut rng, self.config.id_range, title)
    }

    pub fn get_todo(&self, id: TodoId) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn complete_todo(&mut self, id: TodoId) -> Result<CmdResult> {
        commands::status::complete(&mut self.store, id)
    }

    pub fn uncomplete_todo(&mut self, id: TodoId) -> Result<CmdResult> {
        commands::status::uncomplete(&mut self.store, id)
    }

    pub fn update_title(&mut self, id: TodoId, title: Title) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, title)
    }

    pub fn delete_todo(&mut self, id: TodoId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_todos(&self, filter: ListFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::query::Listing;
