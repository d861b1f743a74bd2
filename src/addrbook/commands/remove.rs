use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Phone;

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    Phone::new(phone)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.remove_phone(phone)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Phone number removed!")))
}
