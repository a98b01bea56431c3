use crate::domain::Contact;
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder name for a line that holds nothing but a phone number.
pub const NO_NAME: &str = "No Name";

/// List markers and separators commonly pasted in front of or between entries.
pub const NOISE_CHARS: [char; 4] = ['•', '°', ':', '>'];

/// Optional `+88`/`88`, then an 11-digit mobile number on operators 013-019.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?88)?01[3-9][0-9]{8}").expect("Failed to compile phone pattern")
});

pub fn clean_line(line: &str) -> String {
    line.replace(&NOISE_CHARS[..], " ").trim().to_string()
}

/// Pulls a name and raw phone out of one line of free text.
///
/// Returns `None` for blank lines and lines without a Bangladeshi mobile
/// number. Only the first number on the line is used; the name is whatever
/// remains once that match is cut out.
pub fn extract_contact(line: &str) -> Option<Contact> {
    if line.trim().is_empty() {
        return None;
    }

    let cleaned = clean_line(line);
    let found = PHONE_PATTERN.find(&cleaned)?;

    let mut rest = String::with_capacity(cleaned.len() - found.len());
    rest.push_str(&cleaned[..found.start()]);
    rest.push_str(&cleaned[found.end()..]);
    let name = match rest.trim() {
        "" => NO_NAME,
        name => name,
    };

    Some(Contact::new(name, found.as_str()))
}
