//! Field value types and format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Render the value as the plain text a list cell would show.
    ///
    /// Search and filter matching both operate on this form, so a filter
    /// value of `"Electronics"` matches `FieldValue::String("Electronics")`
    /// and `"42"` matches `FieldValue::Integer(42)`.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
            FieldValue::Null => String::new(),
        }
    }

    /// Total ordering across field values, used by the sort stage.
    ///
    /// Same-kind values compare naturally: strings lexicographically,
    /// numbers numerically (integers and floats compare as f64, NaN
    /// ordering after every real number), booleans false before true,
    /// datetimes chronologically. `Null` orders before everything else.
    /// Remaining cross-kind pairs fall back to a fixed kind rank so the
    /// ordering is total and sorting never panics.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Null, Null) => Ordering::Equal,
            (Null, _) => Ordering::Less,
            (_, Null) => Ordering::Greater,
            (String(a), String(b)) => a.cmp(b),
            (Boolean(a), Boolean(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or_else(|| {
                    // NaN sorts after every real number
                    match (x.is_nan(), y.is_nan()) {
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        _ => Ordering::Equal,
                    }
                }),
                _ => a.kind_rank().cmp(&b.kind_rank()),
            },
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::String(_) => 3,
            FieldValue::DateTime(_) => 4,
        }
    }
}

/// Field format validators for string inputs
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Phone,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &FieldValue) -> bool {
        let string_value = match value.as_str() {
            Some(s) => s,
            None => return false,
        };

        match self {
            FieldFormat::Email => Self::is_valid_email(string_value),
            FieldFormat::Phone => Self::is_valid_phone(string_value),
            FieldFormat::Custom(regex) => regex.is_match(string_value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_phone(phone: &str) -> bool {
        static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PHONE_REGEX.get_or_init(|| {
            // At least 8 digits, max 15 (E.164 standard)
            Regex::new(r"^\+?[1-9]\d{7,14}$").unwrap()
        });
        regex.is_match(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_integer_widens_to_f64() {
        let value = FieldValue::Integer(42);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_f64(), Some(42.0));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_str(), None);
        assert_eq!(value.display_text(), "");
    }

    #[test]
    fn test_display_text() {
        assert_eq!(FieldValue::String("abc".into()).display_text(), "abc");
        assert_eq!(FieldValue::Integer(7).display_text(), "7");
        assert_eq!(FieldValue::Boolean(true).display_text(), "true");
    }

    #[test]
    fn test_compare_strings_lexicographic() {
        let a = FieldValue::String("Hydraulic Hose".into());
        let b = FieldValue::String("Hydraulic Pump".into());
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn test_compare_numbers_across_kinds() {
        let int = FieldValue::Integer(3);
        let float = FieldValue::Float(2.5);
        assert_eq!(int.compare(&float), Ordering::Greater);
        assert_eq!(float.compare(&int), Ordering::Less);
        assert_eq!(
            FieldValue::Integer(5).compare(&FieldValue::Float(5.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_nan_sorts_last() {
        let nan = FieldValue::Float(f64::NAN);
        let num = FieldValue::Float(1.0);
        assert_eq!(num.compare(&nan), Ordering::Less);
        assert_eq!(nan.compare(&num), Ordering::Greater);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
    }

    #[test]
    fn test_compare_null_first() {
        let null = FieldValue::Null;
        assert_eq!(null.compare(&FieldValue::Integer(0)), Ordering::Less);
        assert_eq!(
            FieldValue::String(String::new()).compare(&null),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_datetimes() {
        let early = FieldValue::DateTime("2024-12-15T09:30:00Z".parse().unwrap());
        let late = FieldValue::DateTime("2025-01-02T10:00:00Z".parse().unwrap());
        assert_eq!(early.compare(&late), Ordering::Less);
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate(&FieldValue::String("s.chen@meridianmfg.com".to_string())));
        assert!(format.validate(&FieldValue::String(
            "user.name+tag@example.co.uk".to_string()
        )));
        assert!(!format.validate(&FieldValue::String("invalid-email".to_string())));
        assert!(!format.validate(&FieldValue::String("@example.com".to_string())));
    }

    #[test]
    fn test_phone_validation() {
        let format = FieldFormat::Phone;

        assert!(format.validate(&FieldValue::String("+33612345678".to_string())));
        assert!(format.validate(&FieldValue::String("33612345678".to_string())));
        assert!(!format.validate(&FieldValue::String("123".to_string())));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap());

        assert!(format.validate(&FieldValue::String("ELC-4821".to_string())));
        assert!(!format.validate(&FieldValue::String("elc-4821".to_string())));
        assert!(!format.validate(&FieldValue::String("ELCX-4821".to_string())));
    }

    #[test]
    fn test_format_validate_rejects_non_string() {
        let format = FieldFormat::Email;
        assert!(!format.validate(&FieldValue::Integer(42)));
        assert!(!format.validate(&FieldValue::Boolean(true)));
        assert!(!format.validate(&FieldValue::Null));
    }

    #[test]
    fn test_serde_roundtrip() {
        for original in [
            FieldValue::String("hello".to_string()),
            FieldValue::Integer(42),
            FieldValue::Float(2.718),
            FieldValue::Boolean(false),
            FieldValue::Null,
        ] {
            let json = serde_json::to_string(&original).expect("serialize should succeed");
            let restored: FieldValue =
                serde_json::from_str(&json).expect("deserialize should succeed");
            assert_eq!(original, restored);
        }
    }
}
