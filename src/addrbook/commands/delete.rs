use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

/// Deletes a contact. Unlike [`AddressBook::delete`], an unknown name is an
/// error here so the user learns about the typo.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.delete(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Record for {} deleted!",
        name
    ))))
}
