pub mod domain;
pub mod error;
pub mod extract;
pub mod profile;

pub use domain::*;
pub use error::CoreError;
pub use extract::{clean_line, extract_contact, NO_NAME};
pub use profile::Profile;
