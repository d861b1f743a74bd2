use super::DataStore;
use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::notes::Notebook;

/// In-memory storage for tests.
///
/// Holds the same JSON the file store would write, so loads go through the
/// real decoding path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contacts: Option<String>,
    notes: Option<String>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw contacts JSON.
    pub fn with_contacts_json(mut self, json: impl Into<String>) -> Self {
        self.contacts = Some(json.into());
        self
    }

    pub fn contacts_json(&self) -> Option<&str> {
        self.contacts.as_deref()
    }

    /// Number of successful book and notebook saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error {
            return Err(BookError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&mut self) -> Result<AddressBook> {
        if let Some(json) = &self.contacts {
            return Ok(serde_json::from_str(json)?);
        }
        let book = AddressBook::new();
        self.save_book(&book)?;
        Ok(book)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.check_writable()?;
        self.contacts = Some(serde_json::to_string(book)?);
        self.saves += 1;
        Ok(())
    }

    fn load_notes(&mut self) -> Result<Notebook> {
        match &self.notes {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Notebook::new()),
        }
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.check_writable()?;
        self.notes = Some(serde_json::to_string(notes)?);
        self.saves += 1;
        Ok(())
    }
}
