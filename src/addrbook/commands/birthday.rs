use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use chrono::NaiveDate;

pub fn run(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let message = match record.days_to_birthday(today) {
        Some(days) => CmdMessage::info(format!("Days to next birthday: {}", days)),
        None => CmdMessage::warning("Birthday not set for this contact."),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn reports_days() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Bob", "1234567890", Some("25-10-1990")).unwrap();
        let result = run(&book, "Bob", today()).unwrap();
        assert_eq!(result.first_message(), Some("Days to next birthday: 6"));
    }

    #[test]
    fn birthday_not_set() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Bob", "1234567890", None).unwrap();
        let result = run(&book, "Bob", today()).unwrap();
        assert_eq!(
            result.first_message(),
            Some("Birthday not set for this contact.")
        );
    }

    #[test]
    fn unknown_contact() {
        let book = AddressBook::new();
        assert!(matches!(
            run(&book, "Bob", today()),
            Err(BookError::ContactNotFound(_))
        ));
    }
}
