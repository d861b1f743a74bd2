use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found: Vec<_> = book.search(query).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No matches found.")));
    }
    Ok(CmdResult::default().with_listed_records(found))
}
