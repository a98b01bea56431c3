use crate::commands::{print_json, Context};
use crate::util::{read_input, write_output};
use anyhow::Result;
use clap::Args;
use contactum_vcf::{parse_vcf, render_contacts_text, OutputFormat};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// VCF file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,
    /// Output file, or a directory to write the configured text file name into
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn read(ctx: &Context<'_>, args: ReadArgs) -> Result<()> {
    let content = read_input(args.input.as_deref())?;
    let contacts = parse_vcf(&content, ctx.profile);

    if ctx.json && args.out.is_none() {
        return print_json(&contacts);
    }

    if contacts.is_empty() {
        eprintln!("{}", OutputFormat::Text.empty_notice());
        return Ok(());
    }

    write_output(
        ctx,
        OutputFormat::Text,
        contacts.len(),
        args.out.as_deref(),
        &render_contacts_text(&contacts),
    )
}
