use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_FIELD_WIDTH: usize = 12;

static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode pattern is valid"));
static VOWEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[aeiou]").expect("vowel pattern is valid"));

pub fn write_postcard(sender: &str, receiver: &str, message: &str) -> Result<String> {
    validate_non_empty_string("sender", sender)?;
    validate_non_empty_string("receiver", receiver)?;
    validate_non_empty_string("message", message)?;

    Ok(format!(
        "Priy {},\n\n{}\n\nAapka/Aapki,\n{}",
        receiver, message, sender
    ))
}

/// Six ASCII digits, never starting with 0.
pub fn is_valid_pincode(code: &str) -> bool {
    PINCODE_RE.is_match(code)
}

/// `label` padded to `width` characters (12 by default), then `": value"`.
pub fn format_postcard_field(label: &str, value: &str, width: Option<usize>) -> String {
    let width = width.unwrap_or(DEFAULT_FIELD_WIDTH);
    format!("{:<width$}: {}", label, value, width = width)
}

/// Whether `state_code` shows up as a whole word in the address.
pub fn is_from_state(address: &str, state_code: &str) -> bool {
    // 州代碼當字面值比對，不當正規表達式
    let pattern = format!(r"\b{}\b", regex::escape(state_code));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(address),
        Err(e) => {
            tracing::debug!("Could not build state pattern for '{}': {}", state_code, e);
            false
        }
    }
}

pub fn count_vowels(message: &str) -> usize {
    VOWEL_RE.find_iter(message).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_postcard() {
        assert_eq!(
            write_postcard("Guddu", "Dadi ji", "Hum theek hain").unwrap(),
            "Priy Dadi ji,\n\nHum theek hain\n\nAapka/Aapki,\nGuddu"
        );
        assert!(write_postcard("Guddu", "  ", "Hum theek hain").is_err());
        assert!(write_postcard("", "Dadi ji", "hello").is_err());
    }

    #[test]
    fn test_is_valid_pincode() {
        assert!(is_valid_pincode("400001"));
        assert!(!is_valid_pincode("012345"));
        assert!(!is_valid_pincode("40001"));
        assert!(!is_valid_pincode("4000011"));
        assert!(!is_valid_pincode("40a001"));
        assert!(!is_valid_pincode("४००००१"));
    }

    #[test]
    fn test_format_postcard_field() {
        assert_eq!(format_postcard_field("From", "Guddu", None), "From        : Guddu");
        assert_eq!(format_postcard_field("To", "Dadi ji", Some(8)), "To      : Dadi ji");
        assert_eq!(format_postcard_field("Address", "Lucknow", Some(3)), "Address: Lucknow");
    }

    #[test]
    fn test_is_from_state() {
        assert!(is_from_state("Guddu, Lucknow, UP", "UP"));
        assert!(!is_from_state("Priya, Mumbai, MH", "UP"));
        assert!(!is_from_state("123 Main Street, ANYWHERE", "NY"));
        assert!(!is_from_state("Delhi", "D.l"));
    }

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels("Namaste India"), 6);
        assert_eq!(count_vowels("Namaste"), 3);
        assert_eq!(count_vowels(""), 0);
        assert_eq!(count_vowels("rhythm"), 0);
    }
}
