use contactum_core::{normalize_phone, Contact, Profile};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Stand-in for a name or phone missing from a vCard block.
pub const UNKNOWN: &str = "Unknown";

static BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)BEGIN:VCARD.*?END:VCARD").expect("Failed to compile vcard block pattern")
});
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"N:(.*?);;;").expect("Failed to compile name pattern"));
static TEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TEL(?:;CELL)?(?:;PREF)?:([+0-9]+)").expect("Failed to compile tel pattern")
});

/// Renders one contact as a vCard 2.1 record with no trailing newline.
///
/// The name goes into the family-name slot of `N` verbatim; `;` and `,` are
/// not escaped.
pub fn build_record(name: &str, phone: &str, profile: Profile) -> String {
    render_record(name, &normalize_phone(phone, profile))
}

pub(crate) fn render_record(name: &str, normalized_phone: &str) -> String {
    format!("BEGIN:VCARD\nVERSION:2.1\nN:{name};;;\nTEL;CELL;PREF:{normalized_phone}\nEND:VCARD")
}

/// Extracts contacts from vCard text in input order.
///
/// [`Profile::Lenient`] returns one contact per `BEGIN:VCARD`..`END:VCARD`
/// block, filling [`UNKNOWN`] for absent fields. [`Profile::Strict`] scans line
/// by line and drops cards missing a name or a phone. Content without any card
/// yields an empty list.
pub fn parse_vcf(content: &str, profile: Profile) -> Vec<Contact> {
    let contacts = match profile {
        Profile::Lenient => parse_blocks(content),
        Profile::Strict => parse_lines(content),
    };
    debug!(%profile, count = contacts.len(), "parsed vcf contacts");
    contacts
}

fn parse_blocks(content: &str) -> Vec<Contact> {
    BLOCK_PATTERN
        .find_iter(content)
        .map(|block| {
            let block = block.as_str();
            let name = NAME_PATTERN
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map_or(UNKNOWN, |m| m.as_str().trim());
            let phone = TEL_PATTERN
                .captures(block)
                .and_then(|caps| caps.get(1))
                .map_or(UNKNOWN, |m| m.as_str());
            Contact::new(name, phone)
        })
        .collect()
}

#[derive(Default)]
struct RawCard {
    name: Option<String>,
    phone: Option<String>,
}

impl RawCard {
    fn into_contact(self) -> Option<Contact> {
        match (self.name, self.phone) {
            (Some(name), Some(phone)) if !name.is_empty() && !phone.is_empty() => {
                Some(Contact::new(name, phone))
            }
            _ => None,
        }
    }
}

fn parse_lines(content: &str) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let mut dropped = 0usize;
    let mut card = RawCard::default();

    for line in content.lines() {
        if line.starts_with("BEGIN:VCARD") {
            card = RawCard::default();
        } else if let Some(value) = line.strip_prefix("N:") {
            card.name = Some(structured_name(value));
        } else if line.starts_with("TEL;") {
            if let Some(digits) = first_digit_run(line) {
                card.phone = Some(digits.to_string());
            }
        } else if line.starts_with("END:VCARD") {
            match std::mem::take(&mut card).into_contact() {
                Some(contact) => contacts.push(contact),
                None => dropped += 1,
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, "dropped incomplete vcards");
    }
    contacts
}

/// `N:<family>;<given>;...` rendered as `"<given> <family>"`.
fn structured_name(value: &str) -> String {
    let mut parts = value.split(';');
    let family = parts.next().unwrap_or_default();
    let given = parts.next().unwrap_or_default();
    format!("{given} {family}").trim().to_string()
}

fn first_digit_run(line: &str) -> Option<&str> {
    let start = line.find(|ch: char| ch.is_ascii_digit())?;
    let rest = &line[start..];
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
