//! The sync command

use std::path::{Path, PathBuf};

use colored::Colorize;
use osm_core::{ActionKind, OsmConfig, SyncEngine, SyncOptions, SyncReport};

use crate::error::Result;

/// Copy the selection from `source` into every destination.
///
/// All destinations must exist before any is written. They are then
/// processed in order; the first failure stops the run.
pub fn run_sync(
    config: &OsmConfig,
    source: &Path,
    dests: &[PathBuf],
    dry_run: bool,
    remove_stale: bool,
    json: bool,
) -> Result<()> {
    let engine = SyncEngine::new(source, config)?;
    let options = SyncOptions {
        dry_run,
        remove_stale,
    };

    let reports = engine.sync_all(dests, options)?;
    if !json {
        for report in &reports {
            print_report(report);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    let prefix = if report.dry_run { "[dry-run] " } else { "" };
    println!(
        "{} {}Syncing {} -> {}",
        "=>".blue().bold(),
        prefix,
        report.source.display(),
        report.dest.display().to_string().cyan()
    );

    if report.skipped_same_root {
        println!(
            "{} Destination is the source vault, skipping.",
            "SKIP".yellow().bold()
        );
        return;
    }

    for action in &report.actions {
        match action.kind {
            ActionKind::Copy => println!("   {} {}", "+".green(), action.path),
            ActionKind::Remove => println!("   {} {}", "-".red(), action.path),
            ActionKind::Unchanged => {}
        }
    }

    let verb = if report.dry_run { "would copy" } else { "copied" };
    let removed = if report.dry_run { "would remove" } else { "removed" };
    println!(
        "{} {} {}, {} {}, {} unchanged",
        "OK".green().bold(),
        report.count(ActionKind::Copy),
        verb,
        report.count(ActionKind::Remove),
        removed,
        report.count(ActionKind::Unchanged)
    );
}
