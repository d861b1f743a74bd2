//! # addrbook Architecture
//!
//! addrbook is a small contact manager: named records with phone numbers and
//! an optional birthday, kept in a JSON file, listed page by page and
//! searched by substring. The library knows nothing about terminals; the
//! `addrbook` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (binary: cli/, wired by main.rs)                       │
//! │  - Reads command lines, parses them into a CommandKind      │
//! │  - Prints results and turns errors into messages            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook, Notebook and store                 │
//! │  - Saves after every mutating command                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per command, pure in-memory logic             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, book.rs, paginate.rs, notes.rs)            │
//! │  Storage (store/): DataStore trait, FileStore, InMemoryStore│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: validated field types (`Name`, `Phone`, `Birthday`) and `Record`
//! - [`book`]: the insertion-ordered `AddressBook`, search and its JSON form
//! - [`paginate`]: the snapshot `Paginator` behind `show all`
//! - [`notes`]: the free-text notebook
//! - [`commands`]: business logic for each console command
//! - [`api`]: the facade UI clients talk to
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: `config.json` handling
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod notes;
pub mod paginate;
pub mod store;

pub use book::AddressBook;
pub use model::{Birthday, Name, Phone, Record};
pub use paginate::Paginator;
