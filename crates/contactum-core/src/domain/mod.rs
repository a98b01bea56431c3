pub mod contact;
pub mod phone;

pub use contact::Contact;
pub use phone::{normalize_phone, transliterate_bengali_digits, BENGALI_DIGITS};
