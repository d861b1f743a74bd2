use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Birthday, Phone, Record};

/// Adds `phone` to the contact `name`, creating the contact if needed.
///
/// Both values are validated before anything changes. A birthday given for
/// an existing contact replaces the old one.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let phone = Phone::new(phone)?;
    let birthday = birthday.map(Birthday::new).transpose()?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone.as_str())?;
            if let Some(birthday) = birthday {
                record.set_birthday(birthday);
            }
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone.as_str())?;
            if let Some(birthday) = birthday {
                record.set_birthday(birthday);
            }
            book.add_record(record);
        }
    }

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact added!")))
}
