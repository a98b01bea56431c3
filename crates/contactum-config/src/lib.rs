use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use contactum_core::Profile;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "contactum";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_VCF_FILE: &str = "contacts.vcf";
pub const DEFAULT_TEXT_FILE: &str = "extracted_contacts.txt";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub profile: Profile,
    pub output: OutputConfig,
}

/// File names used when an output path names a directory.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub vcf_file: String,
    pub text_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            vcf_file: DEFAULT_VCF_FILE.to_string(),
            text_file: DEFAULT_TEXT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid output.{field} value: {value:?}")]
    InvalidFileName { field: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    profile: Option<Profile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    vcf_file: Option<String>,
    text_file: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(profile) = parsed.profile {
        config.profile = profile;
    }

    if let Some(output) = parsed.output {
        if let Some(name) = output.vcf_file {
            config.output.vcf_file = validate_file_name("vcf_file", name)?;
        }
        if let Some(name) = output.text_file {
            config.output.text_file = validate_file_name("text_file", name)?;
        }
    }

    Ok(config)
}

fn validate_file_name(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(&['/', '\\'][..]) {
        return Err(ConfigError::InvalidFileName { field, value });
    }
    Ok(trimmed.to_string())
}
