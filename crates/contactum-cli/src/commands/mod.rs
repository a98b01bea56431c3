use anyhow::Result;
use contactum_config::AppConfig;
use contactum_core::Profile;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod convert;
pub mod normalize;
pub mod read;

pub struct Context<'a> {
    pub json: bool,
    pub profile: Profile,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
