use contactum_core::Contact;
use serde::Serialize;

pub const VCF_MEDIA_TYPE: &str = "text/vcard;charset=utf-8";
pub const TEXT_MEDIA_TYPE: &str = "text/plain;charset=utf-8";

pub const NO_CONTACTS_FOR_VCF: &str = "No valid contacts found to generate VCF.";
pub const NO_CONTACTS_IN_VCF: &str = "No contacts could be extracted from this VCF file.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Vcf,
    Text,
}

impl OutputFormat {
    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::Vcf => VCF_MEDIA_TYPE,
            OutputFormat::Text => TEXT_MEDIA_TYPE,
        }
    }

    /// Notice shown in place of an empty result.
    pub fn empty_notice(self) -> &'static str {
        match self {
            OutputFormat::Vcf => NO_CONTACTS_FOR_VCF,
            OutputFormat::Text => NO_CONTACTS_IN_VCF,
        }
    }
}

pub fn render_contacts_text(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        out.push_str(&format!(
            "Name: {}\nPhone: {}\n---\n",
            contact.name, contact.phone
        ));
    }
    out
}
