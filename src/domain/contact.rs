// src/domain/contact.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const PHONE_MIN_LEN: usize = 4;
const PHONE_MAX_LEN: usize = 15;
const ISD_MAX_LEN: usize = 5;
const CALLER_ID_MAX_LEN: usize = 15;

/// Subscriber number: digits only, 4 to 15 characters by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        Self::with_bounds(value, PHONE_MIN_LEN, PHONE_MAX_LEN)
    }

    pub fn with_bounds(value: impl Into<String>, min_len: usize, max_len: usize) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        check_length(&value, min_len, max_len)?;
        if !is_numeric(&value) {
            return Err(DomainError::validation("Mobile number must be numeric."));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// International dialling prefix, stored without the leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsdCode(String);

impl IsdCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        parse_isd(value.into(), ISD_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full number as reported by caller-id providers: ISD rules, up to 15 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdPhoneNumber(String);

impl CallerIdPhoneNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        parse_isd(value.into(), CALLER_ID_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_isd(value: String, max_len: usize) -> DomainResult<String> {
    let value = value.trim();
    check_length(value, 0, max_len)?;
    let digits = value.strip_prefix('+').unwrap_or(value);
    if !is_numeric(digits) {
        return Err(DomainError::validation(
            "ISD code should be a numeric string which can optionally start with +",
        ));
    }
    Ok(digits.to_string())
}

fn check_length(value: &str, min_len: usize, max_len: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len < min_len {
        return Err(DomainError::Validation(format!(
            "ensure this field has at least {min_len} characters"
        )));
    }
    if len > max_len {
        return Err(DomainError::Validation(format!(
            "ensure this field has no more than {max_len} characters"
        )));
    }
    Ok(())
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

macro_rules! impl_string_conversions {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_string_conversions!(PhoneNumber, IsdCode, CallerIdPhoneNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_accepts_digits_within_bounds() {
        assert_eq!(PhoneNumber::new("9876543210").unwrap().as_str(), "9876543210");
        assert_eq!(PhoneNumber::new(" 1234 ").unwrap().as_str(), "1234");
    }

    #[test]
    fn phone_number_rejects_non_numeric() {
        let err = PhoneNumber::new("98765x3210").unwrap_err();
        assert!(err.to_string().contains("Mobile number must be numeric."));
    }

    #[test]
    fn phone_number_enforces_length() {
        assert!(PhoneNumber::new("123").is_err());
        assert!(PhoneNumber::new("1234567890123456").is_err());
        assert!(PhoneNumber::with_bounds("12", 2, 3).is_ok());
    }

    #[test]
    fn isd_code_strips_plus() {
        assert_eq!(IsdCode::new("+91").unwrap().as_str(), "91");
        assert_eq!(IsdCode::new("1").unwrap().to_string(), "1");
    }

    #[test]
    fn isd_code_rejects_invalid_values() {
        assert!(IsdCode::new("+").is_err());
        assert!(IsdCode::new("9a").is_err());
        assert!(IsdCode::new("++91").is_err());
        assert!(IsdCode::new("123456").is_err());
    }

    #[test]
    fn caller_id_number_allows_fifteen_characters() {
        let number = CallerIdPhoneNumber::new("+91987654321012").unwrap();
        assert_eq!(String::from(number), "91987654321012");
        assert!(CallerIdPhoneNumber::new("+9198765432101234").is_err());
    }
}
