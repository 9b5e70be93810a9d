//! The select command

use std::fs;
use std::path::Path;

use colored::Colorize;
use osm_core::{OsmConfig, Selection};
use osm_select::{Directive, RelativePath, SortOrder, Verb, parse_lines};

use crate::error::{CliError, Result};

/// How the select command presents its result
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOutput {
    pub trace: bool,
    pub json: bool,
    pub ignore_case: bool,
}

/// Resolve the directives under `root` and print the selection.
///
/// Directives come from `directives_file` when given (one
/// `Include:`/`Exclude:` line each), otherwise from the configuration.
pub fn run_select(
    config: &OsmConfig,
    root: &Path,
    directives_file: Option<&Path>,
    output: SelectOutput,
) -> Result<()> {
    let directives = match directives_file {
        Some(path) => read_directives(path, config)?,
        None => config.directives()?,
    };
    let selection = Selection::with_directives(root, directives)?;

    let result = if output.trace {
        selection.select_with(&mut print_trace)?
    } else {
        selection.select()?
    };

    let order = if output.ignore_case {
        SortOrder::CaseInsensitive
    } else {
        config.sort_order
    };
    let files: Vec<&str> = result
        .sorted_by(order)
        .into_iter()
        .map(RelativePath::as_str)
        .collect();

    if output.json {
        let value = serde_json::json!({
            "root": selection.root(),
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if output.trace {
        println!();
        println!(
            "{} {} files selected",
            "=>".blue().bold(),
            files.len().to_string().bold()
        );
    }
    for file in files {
        println!("{file}");
    }
    Ok(())
}

fn read_directives(path: &Path, config: &OsmConfig) -> Result<Vec<Directive>> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::user(format!("Cannot read {}: {e}", path.display())))?;
    Ok(parse_lines(&text, config.directive_policy)?)
}

fn print_trace(_index: usize, directive: &Directive, matched: &[RelativePath]) {
    let header = match directive.verb {
        Verb::Include => "Including from".green().bold(),
        Verb::Exclude => "Excluding from".red().bold(),
    };
    println!("{} {}", header, directive.pattern.cyan());
    if matched.is_empty() {
        println!("   {}", "(no files)".dimmed());
    }
    for path in matched {
        println!("   {path}");
    }
}
