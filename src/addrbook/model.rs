//! Contact data types.
//!
//! Every field kind is its own value type that validates on construction, so
//! an invalid phone or birthday can never be stored in a [`Record`]. The same
//! validation runs again when a value is deserialized from disk.

use crate::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const PHONE_DIGITS: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A contact name. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number made of exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// # Errors
    ///
    /// Returns `BookError::InvalidPhoneFormat` unless `phone` is ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self> {
        let phone = phone.into();
        if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(BookError::InvalidPhoneFormat(phone));
        }
        Ok(Self(phone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

/// A birthday written as `DD-MM-YYYY`.
///
/// The original text is kept so that saving a loaded book writes back exactly
/// what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// # Errors
    ///
    /// Returns `BookError::InvalidDateFormat` if `value` is not a real
    /// calendar date in `DD-MM-YYYY` form.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let date = NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT)
            .ok()
            // chrono's %Y accepts short, signed and space-padded years.
            .filter(|date| date.format(BIRTHDAY_FORMAT).to_string() == raw)
            .ok_or_else(|| BookError::InvalidDateFormat(raw.clone()))?;
        Ok(Self { raw, date })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days from `today` until the next anniversary; 0 when it is today.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> i64 {
        let mut next = self.anniversary_in(today.year());
        if next < today {
            next = self.anniversary_in(today.year() + 1);
        }
        (next - today).num_days()
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.date)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

/// One contact: a name, its phones in insertion order and an optional birthday.
///
/// The name cannot change after construction; the address book keys records
/// by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(name: impl Into<String>, birthday: &str) -> Result<Self> {
        let mut record = Self::new(name);
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<()> {
        let phone = Phone::new(phone)?;
        let pos = self.position_of(&phone)?;
        self.phones.remove(pos);
        Ok(())
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        let pos = self.position_of(&old)?;
        self.phones[pos] = new;
        Ok(())
    }

    /// Exact match against the stored phones. The query is not validated.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|b| b.days_to_next_birthday(today))
    }

    fn position_of(&self, phone: &Phone) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "{}: {}", self.name, phones.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
        assert_eq!(phone.to_string(), "0123456789");
    }

    #[test]
    fn phone_rejects_bad_input() {
        for bad in ["", "123456789", "12345678901", "12345abcde", "+123456789", "１２３４５６７８９０"] {
            assert!(
                matches!(Phone::new(bad), Err(BookError::InvalidPhoneFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn birthday_accepts_real_dates() {
        assert!(Birthday::new("29-02-2000").is_ok());
        assert!(Birthday::new("31-12-1999").is_ok());
        assert_eq!(Birthday::new("05-07-1990").unwrap().as_str(), "05-07-1990");
    }

    #[test]
    fn birthday_rejects_bad_input() {
        for bad in [
            "",
            "1990-07-05",
            "31-02-2000",
            "29-02-2001",
            "32-01-2000",
            "birthday",
            "01-01-90",
            "01-01-+1990",
            "01-01--500",
            "01-01- 1990",
            " 01-01-1990",
            "01-01-1990 ",
            "1-1-1990",
            "01-01-12345",
        ] {
            assert!(
                matches!(Birthday::new(bad), Err(BookError::InvalidDateFormat(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn days_to_birthday_counts_forward() {
        let b = Birthday::new("20-10-1990").unwrap();
        assert_eq!(b.days_to_next_birthday(date(19, 10, 2026)), 1);
        assert_eq!(b.days_to_next_birthday(date(20, 10, 2026)), 0);
        assert_eq!(b.days_to_next_birthday(date(21, 10, 2026)), 364);
    }

    #[test]
    fn days_to_birthday_wraps_the_year() {
        let b = Birthday::new("01-01-1990").unwrap();
        assert_eq!(b.days_to_next_birthday(date(31, 12, 2026)), 1);
    }

    #[test]
    fn leap_day_birthday_falls_on_feb_28() {
        let b = Birthday::new("29-02-2000").unwrap();
        assert_eq!(b.days_to_next_birthday(date(27, 2, 2027)), 1);
        assert_eq!(b.days_to_next_birthday(date(28, 2, 2027)), 0);
        assert_eq!(b.days_to_next_birthday(date(28, 2, 2028)), 1);
    }

    #[test]
    fn record_keeps_phone_order_and_duplicates() {
        let mut record = Record::new("Bob");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["1234567890", "0987654321", "1234567890"]);
    }

    #[test]
    fn add_phone_rejects_invalid() {
        let mut record = Record::new("Bob");
        assert!(record.add_phone("12").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_removes_first_occurrence() {
        let mut record = Record::new("Bob");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        record.remove_phone("1111111111").unwrap();
        assert_eq!(record.to_string(), "Bob: 2222222222, 1111111111");
    }

    #[test]
    fn remove_missing_phone_is_not_found() {
        let mut record = Record::new("Bob");
        assert!(matches!(
            record.remove_phone("1111111111"),
            Err(BookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("Bob");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(record.to_string(), "Bob: 3333333333, 2222222222");
    }

    #[test]
    fn edit_missing_phone_is_not_found() {
        let mut record = Record::new("Bob");
        record.add_phone("2222222222").unwrap();
        assert!(matches!(
            record.edit_phone("1234567890", "1111111111"),
            Err(BookError::PhoneNotFound(_))
        ));
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn find_phone_is_exact() {
        let mut record = Record::new("Bob");
        record.add_phone("1234567890").unwrap();
        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("12345").is_none());
        assert!(record.find_phone("not a phone").is_none());
    }

    #[test]
    fn days_to_birthday_without_birthday_is_none() {
        let record = Record::new("Bob");
        assert_eq!(record.days_to_birthday(date(1, 1, 2026)), None);

        let record = Record::with_birthday("Ann", "02-01-1980").unwrap();
        assert_eq!(record.days_to_birthday(date(1, 1, 2026)), Some(1));
    }

    #[test]
    fn record_json_shape() {
        let mut record = Record::new("Bob");
        record.add_phone("1234567890").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Bob", "phones": ["1234567890"], "birthday": null})
        );
    }

    #[test]
    fn deserializing_validates_fields() {
        let bad = r#"{"name": "Bob", "phones": ["123"], "birthday": null}"#;
        assert!(serde_json::from_str::<Record>(bad).is_err());

        let bad = r#"{"name": "Bob", "phones": [], "birthday": "1990-01-01"}"#;
        assert!(serde_json::from_str::<Record>(bad).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn is_ten_digits(s: &str) -> bool {
            s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
        }

        proptest! {
            #[test]
            fn every_ten_digit_string_is_a_phone(digits in "[0-9]{10}") {
                let phone = Phone::new(digits.clone()).unwrap();
                prop_assert_eq!(phone.as_str(), digits.as_str());
            }

            #[test]
            fn other_strings_are_not_phones(s in any::<String>()) {
                prop_assume!(!is_ten_digits(&s));
                prop_assert!(matches!(Phone::new(s), Err(BookError::InvalidPhoneFormat(_))));
            }

            #[test]
            fn near_miss_phones_are_rejected(s in "[0-9]{0,9}|[0-9]{11,14}|[0-9]{4}[^0-9][0-9]{5}") {
                prop_assert!(Phone::new(s).is_err());
            }

            #[test]
            fn every_calendar_date_is_a_birthday(
                year in 1000i32..=9999,
                month in 1u32..=12,
                day in 1u32..=31,
            ) {
                let expected = NaiveDate::from_ymd_opt(year, month, day);
                prop_assume!(expected.is_some());

                let text = format!("{:02}-{:02}-{}", day, month, year);
                let birthday = Birthday::new(text.clone()).unwrap();
                prop_assert_eq!(Some(birthday.date()), expected);
                prop_assert_eq!(birthday.as_str(), text.as_str());
            }

            #[test]
            fn short_years_are_not_birthdays(
                year in 0i32..1000,
                month in 1u32..=12,
                day in 1u32..=28,
            ) {
                let text = format!("{:02}-{:02}-{}", day, month, year);
                prop_assert!(matches!(Birthday::new(text), Err(BookError::InvalidDateFormat(_))));
            }

            #[test]
            fn next_birthday_is_within_a_year(
                year in 1900i32..2100,
                month in 1u32..=12,
                day in 1u32..=28,
                offset in 0i64..3000,
            ) {
                let birthday = Birthday::new(format!("{:02}-{:02}-{}", day, month, year)).unwrap();
                let today = date(1, 1, 2020) + chrono::Duration::days(offset);
                let days = birthday.days_to_next_birthday(today);
                prop_assert!((0..=365).contains(&days));
            }
        }
    }
}
