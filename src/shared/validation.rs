use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Regex for contact phone numbers
    /// Optional leading "+", then digits separated by single spaces or hyphens
    /// - Valid: "+268 7601 2345", "24042731", "+268-2404-2731"
    /// - Invalid: "phone", "+", "76 01  2345", "7601-"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]+(?:[ -][0-9]+)*$").unwrap();
}

/// Contact phone check for optional fields stored as `''` when unknown
pub fn validate_contact_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || PHONE_REGEX.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("phone")
        .with_message("Contact phone may contain digits, spaces, hyphens and a leading +".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+268 7601 2345"));
        assert!(PHONE_REGEX.is_match("24042731"));
        assert!(PHONE_REGEX.is_match("+268-2404-2731"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match("+"));
        assert!(!PHONE_REGEX.is_match("76 01  2345")); // double space
        assert!(!PHONE_REGEX.is_match("7601-")); // trailing separator
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_contact_phone_allows_blank() {
        assert!(validate_contact_phone("").is_ok());
        assert!(validate_contact_phone("+268 2404 2731").is_ok());
        assert!(validate_contact_phone("call the office").is_err());
    }
}
