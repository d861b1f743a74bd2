use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Phone;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let message = if record.phones().is_empty() {
        CmdMessage::warning("No phone numbers for this contact.")
    } else {
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        CmdMessage::info(phones.join(", "))
    };

    Ok(CmdResult::default().with_message(message))
}
