//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the address book and notebook live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a data directory
//!   - Contacts in `addressbook.json` (object keyed by name, insertion ordered)
//!   - Notes in `notes.json` (array, oldest first)
//!   - Every save rewrites the whole file via a temp file and rename
//!
//! - [`memory::InMemoryStore`]: keeps the serialized JSON in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json   # {"Bob": {"name": "Bob", "phones": [...], "birthday": null}}
//! ├── notes.json         # [{"id": ..., "text": ..., "created_at": ...}]
//! └── config.json        # optional, see config.rs
//! ```
//!
//! Loading a missing contacts file is not an error: an empty store is
//! written and an empty book returned. A file that fails to decode is.

use crate::book::AddressBook;
use crate::error::Result;
use crate::notes::Notebook;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the address book, creating an empty store if there is none.
    fn load_book(&mut self) -> Result<AddressBook>;

    /// Overwrite the stored address book with `book`.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notebook; a missing store yields an empty notebook.
    fn load_notes(&mut self) -> Result<Notebook>;

    /// Overwrite the stored notebook with `notes`.
    fn save_notes(&mut self, notes: &Notebook) -> Result<()>;
}
