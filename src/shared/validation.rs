use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Loose `local@domain.tld` shape check used for the optional email field
    /// - Valid: "a@b.co", "first.last@example.com"
    /// - Invalid: "a@b", "not-an-email", "a b@c.de", "a@@b.co"
    pub static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Length left after trimming surrounding whitespace, in UTF-16 code units
///
/// Matches what the survey page measures in the browser, so an emoji counts
/// as two.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}
