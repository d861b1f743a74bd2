//! # Address Book
//!
//! [`AddressBook`] is an insertion-ordered map from contact name to
//! [`Record`]. Ordering matters: listing, paging and search all report
//! records in the order they were first added, and the JSON file keeps that
//! order too.
//!
//! Paging is not part of the map itself. [`AddressBook::pages`] hands out a
//! [`Paginator`] built from a snapshot of the records, and iterating
//! `&AddressBook` does the same with the book's current page size.

use crate::error::{BookError, Result};
use crate::model::Record;
use crate::paginate::Paginator;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    // name -> position in `records`
    index: HashMap<String, usize>,
    page_size: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Inserts `record` under its name, replacing any record with the same
    /// name in place.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.records[pos]),
            None => None,
        }
    }

    /// Removes the record named `name`. Missing names are ignored.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let pos = self.index.remove(name)?;
        let removed = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Records whose name contains `query` ignoring case, or failing that,
    /// one of whose phones contains `query` exactly.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(BookError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(())
    }

    /// Pages of the current records using the book's page size.
    pub fn pages(&self) -> Paginator {
        self.pages_with(self.page_size)
    }

    pub fn pages_with(&self, page_size: usize) -> Paginator {
        Paginator::new(self.records.clone(), page_size)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<Record>;
    type IntoIter = Paginator;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(record.name().as_str(), record)?;
        }
        map.end()
    }
}

struct BookVisitor;

impl<'de> Visitor<'de> for BookVisitor {
    type Value = AddressBook;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of contact names to records")
    }

    fn visit_map<M>(self, mut access: M) -> std::result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut book = AddressBook::new();
        while let Some((key, record)) = access.next_entry::<String, Record>()? {
            if key != record.name().as_str() {
                tracing::warn!(
                    key = %key,
                    name = %record.name(),
                    "stored key differs from record name, keying by name"
                );
            }
            book.add_record(record);
        }
        Ok(book)
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BookVisitor)
    }
}
