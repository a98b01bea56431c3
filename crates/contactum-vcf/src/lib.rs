pub mod convert;
pub mod error;
pub mod export;
pub mod input;
pub mod vcf;

pub use convert::{convert_bulk, convert_bulk_report, ConversionReport};
pub use error::{Result, VcfError};
pub use export::{render_contacts_text, OutputFormat};
pub use vcf::{build_record, parse_vcf};
