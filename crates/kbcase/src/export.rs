//! Export command for producing case-model inputs

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use kbcase_pcb2scad::{PlacementListing, Scanner};
use log::{info, warn};
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Arguments for the `export` command
#[derive(Args, Debug)]
#[command(about = "Export board data for the case model")]
pub struct ExportArgs {
    #[command(subcommand)]
    pub command: ExportCommands,
}

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export footprint placements as OpenSCAD coordinate tables
    Scad(ScadArgs),
}

/// Arguments for the `export scad` subcommand
#[derive(Args, Debug)]
pub struct ScadArgs {
    /// Placement listing files (reads standard input when omitted)
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Output file path (defaults to standard output)
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Execute the `export` command
pub fn execute(args: ExportArgs) -> Result<()> {
    match args.command {
        ExportCommands::Scad(args) => execute_scad(args),
    }
}

/// Execute the `export scad` subcommand
fn execute_scad(args: ScadArgs) -> Result<()> {
    let listing = scan_inputs(&args.files)?;

    if listing.is_empty() {
        warn!("no tracked footprints found in input");
    }
    info!(
        "collected {} switches, {} mounts, {} audio jacks, {} usb receptacles",
        listing.switches.len(),
        listing.mounts.len(),
        listing.audio_jacks.len(),
        listing.usb.len()
    );

    let scad = listing.to_scad();

    match &args.output {
        Some(path) => fs::write(path, &scad)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => print!("{scad}"),
    }

    Ok(())
}

/// Scan the named files in argument order, or standard input when none are
/// given. All inputs form one stream: scanner state carries across file
/// boundaries.
fn scan_inputs(files: &[PathBuf]) -> Result<PlacementListing> {
    let mut scanner = Scanner::new();

    if files.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read standard input")?;
            scanner.scan_line(&line)?;
        }
    } else {
        for path in files {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read placement listing: {}", path.display()))?;

            for line in content.lines() {
                scanner
                    .scan_line(line)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
            }
        }
    }

    Ok(scanner.finish())
}
