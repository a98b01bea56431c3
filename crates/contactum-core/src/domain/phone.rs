use crate::profile::Profile;

/// Bengali digit glyphs, indexed by the Western digit they stand for.
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

const COUNTRY_PREFIX: &str = "880";

pub fn transliterate_bengali_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| match BENGALI_DIGITS.iter().position(|&digit| digit == ch) {
            Some(index) => char::from(b'0' + index as u8),
            None => ch,
        })
        .collect()
}

/// Formats a raw phone string as a `+880` Bangladeshi number.
///
/// Bengali digits are transliterated and every other non-digit is dropped. A
/// leading `880` loses only its `88`, so the national trunk `0` survives and
/// the number comes out as `+88` followed by the 11-digit local form.
///
/// Under [`Profile::Lenient`] any digit string is formatted, including the
/// empty one (`"+880"`). Under [`Profile::Strict`] only an 11-digit `01...`
/// or a 10-digit `1...` number is formatted; anything else is returned as the
/// transliterated input.
pub fn normalize_phone(raw: &str, profile: Profile) -> String {
    let transliterated = transliterate_bengali_digits(raw);
    let digits: String = transliterated
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    let local = match digits.strip_prefix(COUNTRY_PREFIX) {
        Some(_) => &digits[2..],
        None => digits.as_str(),
    };

    match profile {
        Profile::Lenient => {
            if local.starts_with('0') {
                format!("+88{local}")
            } else {
                format!("+880{local}")
            }
        }
        Profile::Strict => {
            if local.starts_with("01") && local.len() == 11 {
                format!("+88{local}")
            } else if local.starts_with('1') && local.len() == 10 {
                format!("+880{local}")
            } else {
                transliterated
            }
        }
    }
}
