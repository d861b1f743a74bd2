use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Phone;

pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    // Validate both numbers before looking anything up.
    Phone::new(old)?;
    Phone::new(new)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Phone number changed!")))
}
