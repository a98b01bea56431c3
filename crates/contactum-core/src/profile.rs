use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects how forgiving normalization and VCF parsing are.
///
/// `Lenient` formats any digit string as a `+880` number and parses every
/// vCard block, substituting `"Unknown"` for missing fields. `Strict` only
/// reformats numbers of a recognised Bangladeshi mobile shape and drops vCards
/// that lack a name or a phone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Lenient,
    Strict,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Lenient => "lenient",
            Profile::Strict => "strict",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "lenient" => Ok(Profile::Lenient),
            "strict" => Ok(Profile::Strict),
            _ => Err(CoreError::InvalidProfile(trimmed.to_string())),
        }
    }
}
