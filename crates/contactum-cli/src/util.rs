use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use contactum_vcf::input;
use contactum_vcf::OutputFormat;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ExportReport {
    format: OutputFormat,
    media_type: &'static str,
    count: usize,
    output: String,
}

/// Reads the named file, or stdin when no path (or `-`) is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(input::read_text_file(path)?),
        _ => input::read_text(io::stdin().lock()).with_context(|| "read stdin"),
    }
}

pub fn resolve_output_path(out: &Path, default_name: &str) -> PathBuf {
    if out.is_dir() {
        out.join(default_name)
    } else {
        out.to_path_buf()
    }
}

pub fn write_output(
    ctx: &Context<'_>,
    format: OutputFormat,
    count: usize,
    out: Option<&Path>,
    data: &str,
) -> Result<()> {
    let Some(out) = out else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data.as_bytes())?;
        if !data.ends_with('\n') {
            writeln!(stdout)?;
        }
        return Ok(());
    };

    let default_name = match format {
        OutputFormat::Vcf => &ctx.config.output.vcf_file,
        OutputFormat::Text => &ctx.config.output.text_file,
    };
    let path = resolve_output_path(out, default_name);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    fs::write(&path, data).with_context(|| format!("write output file {}", path.display()))?;
    debug!(path = %path.display(), bytes = data.len(), "output written");

    if ctx.json {
        return print_json(&ExportReport {
            format,
            media_type: format.media_type(),
            count,
            output: path.display().to_string(),
        });
    }
    println!("Wrote {} contacts to {}", count, path.display());
    Ok(())
}
