//! The diff command

use std::path::{Path, PathBuf};

use colored::Colorize;
use osm_core::{DiffEngine, DiffReport, DiffStatus, OsmConfig};

use crate::error::Result;

/// Show how each destination differs from the source selection.
pub fn run_diff(
    config: &OsmConfig,
    source: &Path,
    dests: &[PathBuf],
    patch: bool,
    json: bool,
) -> Result<()> {
    let engine = DiffEngine::new(source, config)?;

    let mut reports = Vec::with_capacity(dests.len());
    for dest in dests {
        let report = engine.diff(dest)?;
        if !json {
            print_report(&report, patch)?;
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_report(report: &DiffReport, patch: bool) -> Result<()> {
    println!(
        "{} Comparing {} -> {}",
        "=>".blue().bold(),
        report.source.display(),
        report.dest.display().to_string().cyan()
    );

    if report.skipped_same_root {
        println!(
            "{} Destination is the source vault, skipping.",
            "SKIP".yellow().bold()
        );
        return Ok(());
    }

    if !report.has_changes() {
        println!("{} In sync.", "OK".green().bold());
        return Ok(());
    }

    for entry in report.changes() {
        let marker = entry.status.marker().to_string();
        let marker = match entry.status {
            DiffStatus::Added => marker.green(),
            DiffStatus::Removed => marker.red(),
            DiffStatus::Modified | DiffStatus::Identical => marker.yellow(),
        };
        println!("   {} {}", marker, entry.path);

        if patch && entry.status == DiffStatus::Modified {
            match entry.unified_patch()? {
                Some(text) => print!("{text}"),
                None => println!("   {}", "(binary file)".dimmed()),
            }
        }
    }

    println!(
        "{} {} added, {} modified, {} removed",
        "DIFF".yellow().bold(),
        report.count(DiffStatus::Added),
        report.count(DiffStatus::Modified),
        report.count(DiffStatus::Removed)
    );
    Ok(())
}
