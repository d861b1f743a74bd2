use super::DataStore;
use crate::book::AddressBook;
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use crate::notes::Notebook;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = BookConfig::default();
        Self {
            root,
            contacts_file: defaults.contacts_file,
            notes_file: defaults.notes_file,
        }
    }

    pub fn from_config(root: PathBuf, config: &BookConfig) -> Self {
        Self::new(root)
            .with_contacts_file(&config.contacts_file)
            .with_notes_file(&config.notes_file)
    }

    pub fn with_contacts_file(mut self, name: &str) -> Self {
        self.contacts_file = name.to_string();
        self
    }

    pub fn with_notes_file(mut self, name: &str) -> Self {
        self.notes_file = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BookError::Io)?;
        }
        Ok(())
    }

    /// Whole-file replace: write a sibling temp file, then rename over the target.
    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp_file = self.root.join(format!(".store-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(BookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BookError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&mut self) -> Result<AddressBook> {
        let path = self.contacts_path();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no contacts file, creating an empty one");
            let book = AddressBook::new();
            self.save_book(&book)?;
            return Ok(book);
        }
        let content = fs::read_to_string(&path).map_err(BookError::Io)?;
        let book: AddressBook = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        tracing::debug!(path = %path.display(), records = book.len(), "loaded contacts");
        Ok(book)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        let path = self.contacts_path();
        let content = serde_json::to_string_pretty(book).map_err(BookError::Serialization)?;
        self.write_atomic(&path, &content)?;
        tracing::debug!(path = %path.display(), records = book.len(), "saved contacts");
        Ok(())
    }

    fn load_notes(&mut self) -> Result<Notebook> {
        let path = self.notes_path();
        if !path.exists() {
            return Ok(Notebook::new());
        }
        let content = fs::read_to_string(&path).map_err(BookError::Io)?;
        let notes: Notebook = serde_json::from_str(&content).map_err(BookError::Serialization)?;
        tracing::debug!(path = %path.display(), notes = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        let path = self.notes_path();
        let content = serde_json::to_string_pretty(notes).map_err(BookError::Serialization)?;
        self.write_atomic(&path, &content)?;
        tracing::debug!(path = %path.display(), notes = notes.len(), "saved notes");
        Ok(())
    }
}
