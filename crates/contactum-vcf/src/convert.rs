use crate::vcf::render_record;
use contactum_core::{extract_contact, normalize_phone, Contact, Profile};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    /// Recognised contacts with their phone already normalized.
    pub contacts: Vec<Contact>,
    /// Non-blank lines that held no recognisable mobile number.
    pub skipped_lines: usize,
}

impl ConversionReport {
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// One record per contact, joined by a single `\n`.
    pub fn to_vcf(&self) -> String {
        self.contacts
            .iter()
            .map(|contact| render_record(&contact.name, &contact.phone))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn convert_bulk_report(text: &str, profile: Profile) -> ConversionReport {
    let mut report = ConversionReport::default();
    for (index, line) in text.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match extract_contact(line) {
            Some(contact) => {
                let phone = normalize_phone(&contact.phone, profile);
                report.contacts.push(Contact::new(contact.name, phone));
            }
            None => {
                debug!(line = index + 1, "no mobile number found, skipping line");
                report.skipped_lines += 1;
            }
        }
    }
    report
}

/// Converts free text with one contact per line into vCard 2.1 records.
///
/// Lines without a Bangladeshi mobile number are skipped. An empty string
/// means nothing was recognised.
pub fn convert_bulk(text: &str, profile: Profile) -> String {
    convert_bulk_report(text, profile).to_vcf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcf::{build_record, parse_vcf};

    #[test]
    fn convert_bulk_emits_one_record_per_recognised_line() {
        let out = convert_bulk("John Doe 01712345678\nNo number here", Profile::Lenient);
        assert_eq!(
            out,
            "BEGIN:VCARD\nVERSION:2.1\nN:John Doe;;;\nTEL;CELL;PREF:+8801712345678\nEND:VCARD"
        );
    }

    #[test]
    fn convert_bulk_uses_placeholder_name() {
        let out = convert_bulk("01712345678", Profile::Lenient);
        assert!(out.contains("\nN:No Name;;;\n"));
    }

    #[test]
    fn convert_bulk_joins_records_with_single_newline() {
        let out = convert_bulk(
            "• Rahim: 01812345678\n\n   \n> Karim +8801912345678\r\n",
            Profile::Strict,
        );
        let expected = [
            build_record("Rahim", "01812345678", Profile::Strict),
            build_record("Karim", "+8801912345678", Profile::Strict),
        ]
        .join("\n");
        assert_eq!(out, expected);
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn convert_bulk_records_follow_fixed_line_order() {
        let out = convert_bulk("A 01712345678\nB 01812345678", Profile::Lenient);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 10);
        for chunk in lines.chunks(5) {
            assert_eq!(chunk[0], "BEGIN:VCARD");
            assert_eq!(chunk[1], "VERSION:2.1");
            assert!(chunk[2].starts_with("N:"));
            assert!(chunk[3].starts_with("TEL;CELL;PREF:"));
            assert_eq!(chunk[4], "END:VCARD");
        }
    }

    #[test]
    fn convert_bulk_returns_empty_when_nothing_matches() {
        assert_eq!(convert_bulk("", Profile::Lenient), "");
        assert_eq!(convert_bulk("hello\nworld", Profile::Lenient), "");
    }

    #[test]
    fn report_counts_skipped_lines() {
        let report = convert_bulk_report("a\n\nB 01712345678\nc 123", Profile::Lenient);
        assert_eq!(report.skipped_lines, 2);
        assert_eq!(
            report.contacts,
            vec![Contact::new("B", "+8801712345678")]
        );
        assert!(!report.is_empty());
    }

    #[test]
    fn converted_output_parses_back() {
        let out = convert_bulk("Alice 01712345678\nBob 8801812345678", Profile::Lenient);
        let contacts = parse_vcf(&out, Profile::Lenient);
        assert_eq!(
            contacts,
            vec![
                Contact::new("Alice", "+8801712345678"),
                Contact::new("Bob", "+8801812345678"),
            ]
        );
    }
}
