use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use kivonat_ingest::{StatementFormat, parse_statement_text};
use log::{error, info, warn};

mod export;
mod extract;

#[derive(Parser, Debug)]
#[command(name = "kivonat", version, about = "Convert MBH Netbank statement PDFs to CSV")]
struct Cli {
    /// PDF file or directory of PDFs (defaults to your Downloads folder)
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let target = match cli.path {
        Some(path) => path,
        None => default_downloads_dir()?,
    };
    let tool = extract::locate_pdftotext()?;

    if target.is_file() {
        if !is_pdf(&target) {
            bail!("{} is not a valid directory or PDF file", target.display());
        }
        let csv_path = convert_pdf(&tool, &target)?;
        println!("Converted {} -> {}", file_name(&target), file_name(&csv_path));
        return Ok(());
    }

    if !target.is_dir() {
        bail!("{} is not a valid directory or PDF file", target.display());
    }

    let pdfs = discover_pdfs(&target)?;
    if pdfs.is_empty() {
        println!("No PDF files found in {}.", target.display());
        return Ok(());
    }

    let mut converted = 0usize;
    for pdf in &pdfs {
        match convert_pdf(&tool, pdf) {
            Ok(csv_path) => {
                converted += 1;
                println!("Converted {} -> {}", file_name(pdf), file_name(&csv_path));
            }
            // A bad statement is reported and skipped; the rest of the
            // batch still runs.
            Err(err) => error!("skipping {}: {err:#}", pdf.display()),
        }
    }
    info!("converted {converted} of {} statements", pdfs.len());
    Ok(())
}

/// Extract, parse and export one statement. Returns the CSV path.
fn convert_pdf(tool: &Path, pdf: &Path) -> Result<PathBuf> {
    let text = extract::extract_text(tool, pdf)?;
    let records = parse_statement_text(&text, &StatementFormat::default())?;
    if records.is_empty() {
        warn!("no transactions recognized in {}", pdf.display());
    }
    let csv_path = pdf.with_extension("csv");
    export::write_csv(&csv_path, &records)?;
    info!("{}: {} transactions", pdf.display(), records.len());
    Ok(csv_path)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// PDFs directly inside `dir` (non-recursive), in stable sorted order.
fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))?;
    let mut pdfs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_pdf(path))
        .collect();
    pdfs.sort();
    Ok(pdfs)
}

fn default_downloads_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join("Downloads"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
