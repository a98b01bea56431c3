use crate::commands::Context;
use crate::error::invalid_input;
use crate::util::{read_input, write_output};
use anyhow::Result;
use clap::Args;
use contactum_vcf::{convert_bulk_report, OutputFormat};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Text file with one "name number" entry per line; stdin when omitted or `-`
    pub input: Option<PathBuf>,
    /// Output file, or a directory to write the configured VCF file name into
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn convert(ctx: &Context<'_>, args: ConvertArgs) -> Result<()> {
    if ctx.json && args.out.is_none() {
        return Err(invalid_input("--json requires --out for convert"));
    }

    let text = read_input(args.input.as_deref())?;
    let report = convert_bulk_report(&text, ctx.profile);
    if report.skipped_lines > 0 {
        info!(
            skipped = report.skipped_lines,
            "lines without a mobile number were skipped"
        );
    }

    if report.is_empty() {
        eprintln!("{}", OutputFormat::Vcf.empty_notice());
        return Ok(());
    }

    write_output(
        ctx,
        OutputFormat::Vcf,
        report.contacts.len(),
        args.out.as_deref(),
        &report.to_vcf(),
    )
}
