use anyhow::Error;
use contactum_config::ConfigError;
use contactum_core::CoreError;
use contactum_vcf::VcfError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(CliError::InvalidInput(_)) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(vcf_err) = cause.downcast_ref::<VcfError>() {
            return ExitCode::from(vcf_exit_code(vcf_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir | ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidFileName { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn vcf_exit_code(err: &VcfError) -> u8 {
    match err {
        VcfError::Read { .. } | VcfError::Io(_) => EXIT_FAILURE,
    }
}
