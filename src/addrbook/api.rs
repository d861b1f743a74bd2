//! # API Facade
//!
//! [`BookApi`] is the single entry point for UI clients. It owns the
//! address book, the notebook and the store, dispatches to the command
//! functions, and saves after every command that changes something.
//!
//! It never prints. Every method returns a [`CmdResult`] for the caller to
//! render, or an error for the caller to report.
//!
//! `BookApi<S: DataStore>` is generic over storage:
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::notes::Notebook;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

pub struct BookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    notebook: Notebook,
    data_dir: PathBuf,
}

impl<S: DataStore> BookApi<S> {
    /// Loads the book and notebook from `store`. Decode failures are returned
    /// as is; there is no recovery from a corrupt store.
    pub fn open(mut store: S, data_dir: PathBuf, page_size: usize) -> Result<Self> {
        let mut book = store.load_book()?;
        book.set_page_size(page_size)?;
        let notebook = store.load_notes()?;
        tracing::info!(
            contacts = book.len(),
            notes = notebook.len(),
            "address book opened"
        );
        Ok(Self {
            store,
            book,
            notebook,
            data_dir,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn hello(&self) -> CmdResult {
        commands::hello::run()
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone, birthday)?;
        self.save_book()?;
        Ok(result)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, name, old, new)?;
        self.save_book()?;
        Ok(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.book, name, phone)?;
        self.save_book()?;
        Ok(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.save_book()?;
        Ok(result)
    }

    pub fn phones(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn show_all(&mut self, page_size: Option<usize>) -> Result<CmdResult> {
        commands::show::run(&mut self.book, page_size)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn birthday(&self, name: &str) -> Result<CmdResult> {
        self.birthday_on(name, Local::now().date_naive())
    }

    pub fn birthday_on(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::run(&self.book, name, today)
    }

    pub fn add_note(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::note::add(&mut self.notebook, text)?;
        self.store.save_notes(&self.notebook)?;
        Ok(result)
    }

    pub fn notes(&self, keyword: Option<&str>) -> Result<CmdResult> {
        commands::note::list(&self.notebook, keyword)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    fn save_book(&mut self) -> Result<()> {
        self.store.save_book(&self.book)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
