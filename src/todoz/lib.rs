//! # Todoz Architecture
//!
//! Todoz is a tiny TODO list that keeps **one flat file per task** under a
//! `todos/` directory. The interesting part is the library: the todo lifecycle,
//! the on-disk byte layout and the directory scan that rebuilds the list. The
//! interactive prompt is a thin client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads action codes, prompts, prints results              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the storage configuration             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + query.rs                   │
//! │  - Business logic, returns `CmdResult`                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/ + codec.rs)                          │
//! │  - `TodoStore` trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## On-disk format
//!
//! ```text
//! todos/
//! ├── 42      # byte 0: completion flag (bit 0), bytes 1..: title
//! └── 317
//! ```
//!
//! The file name *is* the id. There is no index or manifest: a file named by
//! decimal digits existing in the directory is what makes a todo exist.
//!
//! ## Errors are classified, not acted upon
//!
//! Some failures (cannot resolve the working directory, cannot create a todo
//! file, cannot list the directory) end the whole session. The library never
//! exits; it returns a [`error::TodoError`] and [`error::TodoError::is_fatal`]
//! tells the caller which tier it belongs to.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Completed/uncompleted partitioning for listings
//! - [`store`]: Storage abstraction and implementations
//! - [`codec`]: Byte layout of a single todo file
//! - [`model`]: Core data types (`Todo`, `TodoId`)
//! - [`config`]: Storage root configuration
//! - [`error`]: Error types
//! - `cli`: The interactive session (binary only, not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
