//! Validated field types shared by the club entities
//!
//! Formats:
//! - Student numbers: `A{7 digits}{letter}` (e.g. `A1234567X`), any case
//! - Emails: `local@domain.tld`
//! - Phones: digits only, at least 3 of them
//! - Amounts: non-negative money with up to two decimals (`12`, `12.5`, `12.50`)
//! - Tags: a single alphanumeric word
//!
//! Every type parses with [`FromStr`] and serializes as its display string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("Invalid student number: expected 'A' + 7 digits + a letter (e.g. A1234567X), got '{0}'")]
    InvalidStudentNumber(String),

    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("Invalid phone number: expected at least 3 digits, got '{0}'")]
    InvalidPhone(String),

    #[error("Invalid amount: expected a non-negative value with at most 2 decimals, got '{0}'")]
    InvalidAmount(String),

    #[error("Invalid tag: expected a single alphanumeric word, got '{0}'")]
    InvalidTag(String),

    #[error("Invalid year: expected 1 to {max}, got {0}", max = Year::MAX)]
    InvalidYear(u8),

    #[error("Invalid event id: expected a non-empty id without spaces, got '{0}'")]
    InvalidEventId(String),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("Budget end date {end} is before start date {start}")]
    InvertedPeriod {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
}

/// Returns the trimmed text, or an error naming the field if nothing is left
pub fn non_blank(field: &'static str, value: &str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Blank(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// NUS-style student number, compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentNumber(String);

impl StudentNumber {
    /// Returns the number as it was entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison; this is what makes two members "the same"
    pub fn matches(&self, other: &StudentNumber) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for StudentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StudentNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes = s.as_bytes();
        let valid = bytes.len() == 9
            && bytes[0].eq_ignore_ascii_case(&b'A')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_alphabetic();

        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(FieldError::InvalidStudentNumber(s.to_string()))
        }
    }
}

impl TryFrom<String> for StudentNumber {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StudentNumber> for String {
    fn from(value: StudentNumber) -> Self {
        value.0
    }
}

/// Email address with a minimal structural check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FieldError::InvalidEmail(s.to_string());

        let (local, domain) = s.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || local.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        let label_ok = |label: &&str| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        };
        if !labels.iter().all(label_ok) {
            return Err(invalid());
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Email {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Phone number (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(FieldError::InvalidPhone(s.to_string()))
        }
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

/// Money amount held as whole cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FieldError::InvalidAmount(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !digits(whole) || frac.len() > 2 || !digits(frac) {
            return Err(invalid());
        }
        if s.ends_with('.') {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(frac))
            .map(Amount)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Amount {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.to_string()
    }
}

/// Free-form label attached to members
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.chars().all(|c| c.is_alphanumeric()) {
            Ok(Self(s.to_string()))
        } else {
            Err(FieldError::InvalidTag(s.to_string()))
        }
    }
}

impl TryFrom<String> for Tag {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

/// Academic year of study
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Year(u8);

impl Year {
    pub const MAX: u8 = 6;

    pub fn new(year: u8) -> Result<Self, FieldError> {
        if (1..=Self::MAX).contains(&year) {
            Ok(Self(year))
        } else {
            Err(FieldError::InvalidYear(year))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Year {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u8 {
    fn from(value: Year) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_number_accepts_any_case() {
        let upper: StudentNumber = "A1234567X".parse().unwrap();
        let lower: StudentNumber = "a1234567x".parse().unwrap();

        assert!(upper.matches(&lower));
        assert_ne!(upper, lower);
        assert_eq!(lower.as_str(), "a1234567x");
    }

    #[test]
    fn student_number_rejects_bad_format() {
        assert!("B1234567X".parse::<StudentNumber>().is_err());
        assert!("A123456X".parse::<StudentNumber>().is_err());
        assert!("A12345678".parse::<StudentNumber>().is_err());
        assert!("".parse::<StudentNumber>().is_err());
    }

    #[test]
    fn email_validation() {
        assert!("alice@u.nus.edu".parse::<Email>().is_ok());
        assert!("alice@example".parse::<Email>().is_ok());
        assert!("alice".parse::<Email>().is_err());
        assert!("@example.com".parse::<Email>().is_err());
        assert!("alice@-bad.com".parse::<Email>().is_err());
        assert!("alice@example..com".parse::<Email>().is_err());
        assert!("al ice@example.com".parse::<Email>().is_err());
    }

    #[test]
    fn phone_validation() {
        assert!("91234567".parse::<Phone>().is_ok());
        assert!("911".parse::<Phone>().is_ok());
        assert!("91".parse::<Phone>().is_err());
        assert!("9123 4567".parse::<Phone>().is_err());
    }

    #[test]
    fn amount_parsing() {
        assert_eq!("12".parse::<Amount>().unwrap().cents(), 1200);
        assert_eq!("12.5".parse::<Amount>().unwrap().cents(), 1250);
        assert_eq!("12.05".parse::<Amount>().unwrap().cents(), 1205);
        assert_eq!("0.99".parse::<Amount>().unwrap().to_string(), "0.99");

        assert!("-1".parse::<Amount>().is_err());
        assert!("1.234".parse::<Amount>().is_err());
        assert!("1.".parse::<Amount>().is_err());
        assert!(".5".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
    }

    #[test]
    fn amount_serializes_as_string() {
        let amount: Amount = "3.5".parse().unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"3.50\"");

        let parsed: Amount = serde_json::from_str("\"3.50\"").unwrap();
        assert_eq!(parsed, amount);
    }

    #[test]
    fn tag_validation() {
        assert!("exco".parse::<Tag>().is_ok());
        assert!("two words".parse::<Tag>().is_err());
        assert!("".parse::<Tag>().is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(Year::MAX).is_ok());
        assert_eq!(Year::new(0), Err(FieldError::InvalidYear(0)));
        assert!(serde_json::from_str::<Year>("9").is_err());
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank("Name", "  Alice ").unwrap(), "Alice");
        assert_eq!(non_blank("Name", "   "), Err(FieldError::Blank("Name")));
    }
}
