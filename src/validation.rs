//! Field Validation
//!
//! Checks run before a wizard step may advance or a form may submit.
//! Each returns the message shown under the field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9 ()-]+$").expect("phone pattern"));
static POSTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]{1,8}[A-Za-z0-9]$").expect("postcode pattern"));

/// Field name -> message, in field order for stable rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.entry(field).or_insert(message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    required(value, "Email")?;
    if EMAIL.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Enter a valid email address".to_string())
    }
}

pub fn phone(value: &str) -> Result<(), String> {
    required(value, "Phone number")?;
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if PHONE.is_match(value.trim()) && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err("Enter a valid phone number".to_string())
    }
}

pub fn postcode(value: &str) -> Result<(), String> {
    required(value, "Postcode")?;
    if POSTCODE.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Enter a valid postcode".to_string())
    }
}

/// `YYYY-MM-DD` (what `<input type="date">` produces), not after `today`
pub fn date_of_birth(value: &str, today: NaiveDate) -> Result<(), String> {
    required(value, "Date of birth")?;
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Enter a valid date".to_string())?;
    if date > today {
        Err("Date of birth cannot be in the future".to_string())
    } else {
        Ok(())
    }
}

pub fn consent(given: bool) -> Result<(), String> {
    if given {
        Ok(())
    } else {
        Err("You must confirm the declaration".to_string())
    }
}

/// Minimum length after trimming
pub fn min_len(value: &str, label: &str, min: usize) -> Result<(), String> {
    required(value, label)?;
    if value.trim().chars().count() < min {
        Err(format!("{} must be at least {} characters", label, min))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_email() {
        assert!(email("someone@example.org").is_ok());
        assert!(email(" someone@example.org ").is_ok());
        assert_eq!(email("").unwrap_err(), "Email is required");
        assert!(email("someone@example").is_err());
        assert!(email("some one@example.org").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(phone("+44 (0)113 496 0000").is_ok());
        assert!(phone("0113-4960000").is_ok());
        assert!(phone("12345").is_err());
        assert!(phone("call me").is_err());
    }

    #[test]
    fn test_postcode() {
        assert!(postcode("LS1 4AP").is_ok());
        assert!(postcode("D02 X285").is_ok());
        assert!(postcode("90210").is_ok());
        assert!(postcode("!").is_err());
    }

    #[test]
    fn test_date_of_birth() {
        assert!(date_of_birth("1984-02-29", today()).is_ok());
        assert!(date_of_birth("2026-10-19", today()).is_ok());
        assert_eq!(date_of_birth("2027-01-01", today()).unwrap_err(), "Date of birth cannot be in the future");
        assert_eq!(date_of_birth("1985-02-29", today()).unwrap_err(), "Enter a valid date");
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.check("email", email(""));
        errors.check("email", Err("second".to_string()));
        errors.check("phone", phone("0113 496 0000"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(errors.into_result().is_err());
    }
}
