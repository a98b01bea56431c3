use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use contactum_core::normalize_phone;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NormalizedNumber<'a> {
    input: &'a str,
    normalized: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let results: Vec<NormalizedNumber<'_>> = args
        .numbers
        .iter()
        .map(|raw| NormalizedNumber {
            input: raw,
            normalized: normalize_phone(raw, ctx.profile),
        })
        .collect();

    if ctx.json {
        return print_json(&results);
    }
    for result in results {
        println!("{}", result.normalized);
    }
    Ok(())
}
