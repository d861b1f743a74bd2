use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists every contact page by page.
///
/// A `page_size` updates the book's page size for this and later listings.
pub fn run(book: &mut AddressBook, page_size: Option<usize>) -> Result<CmdResult> {
    if let Some(size) = page_size {
        book.set_page_size(size)?;
    }

    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty.")));
    }

    Ok(CmdResult::default().with_pages(book.pages().collect()))
}
