//! Filesystem collaborator: discovers candidate units under a root,
//! transforms them in parallel, and reports the outcome per unit.
//!
//! Units are independent, so the fan-out needs no synchronization beyond
//! each worker owning its unit's read -> transform -> write sequence.
//! Reporting happens afterwards, sequentially and sorted by path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use similar::{ChangeTag, TextDiff};
use walkdir::WalkDir;

use crate::transform::transform;
use crate::ts::{Flavor, ParseError};

/// Run configuration for one invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Report what would change without writing anything.
    pub dry_run: bool,
    /// Print a unified diff for each rewritten unit.
    pub show_diff: bool,
}

/// Per-run counts, reported at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub rewritten: usize,
    pub parse_failures: usize,
    pub unchanged: usize,
}

enum UnitOutcome {
    Rewritten { original: String, rewritten: String },
    Unchanged,
    ParseFailed(ParseError),
}

/// Discover the candidate units below `root`: every `.ts` / `.tsx` file,
/// recursively, with `node_modules` directories pruned. A root that is
/// itself a candidate file yields exactly that unit.
pub fn collect_units(root: &Path) -> Result<Vec<(PathBuf, Flavor)>> {
    let mut units = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != "node_modules");

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(flavor) = Flavor::from_path(entry.path()) {
            units.push((entry.path().to_path_buf(), flavor));
        }
    }

    units.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(units)
}

/// Transform everything under `root` and report each outcome.
///
/// Parse failures are per-unit skips; read and write failures abort the run.
pub fn process_root(root: &Path, options: Options) -> Result<Summary> {
    let units = collect_units(root)?;

    let outcomes: Vec<(PathBuf, UnitOutcome)> = units
        .into_par_iter()
        .map(|(path, flavor)| {
            let outcome = process_unit(&path, flavor, options)?;
            Ok((path, outcome))
        })
        .collect::<Result<_>>()?;

    let mut summary = Summary::default();
    for (path, outcome) in &outcomes {
        match outcome {
            UnitOutcome::Rewritten {
                original,
                rewritten,
            } => {
                summary.rewritten += 1;
                if options.dry_run {
                    println!("{} {}", "would rewrite".cyan(), path.display());
                } else {
                    println!("{} {}", "rewrote".green(), path.display());
                }
                if options.show_diff {
                    display_diff(path, original, rewritten);
                }
            }
            UnitOutcome::Unchanged => {
                summary.unchanged += 1;
            }
            UnitOutcome::ParseFailed(err) => {
                summary.parse_failures += 1;
                eprintln!(
                    "{} parse failed for {:?}: {}",
                    "warning:".yellow(),
                    path.display().to_string(),
                    err
                );
            }
        }
    }

    Ok(summary)
}

/// One unit's full pipeline: read, transform, persist.
fn process_unit(path: &Path, flavor: Flavor, options: Options) -> Result<UnitOutcome> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    match transform(&source, flavor) {
        Err(err) => Ok(UnitOutcome::ParseFailed(err)),
        Ok(None) => Ok(UnitOutcome::Unchanged),
        Ok(Some(rewritten)) => {
            if !options.dry_run {
                atomic_write(path, rewritten.as_bytes())
                    .with_context(|| format!("failed to write file: {}", path.display()))?;
            }
            Ok(UnitOutcome::Rewritten {
                original: source,
                rewritten,
            })
        }
    }
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full write succeeds or the original file is left intact.
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("path has no parent directory: {}", path.display()))?;

    // Tempfile in the same directory to stay on one filesystem
    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Show a unified diff between the original and rewritten unit.
fn display_diff(path: &Path, original: &str, rewritten: &str) {
    println!(
        "{}",
        format!("--- {} (original)", path.display()).dimmed()
    );
    println!(
        "{}",
        format!("+++ {} (rewritten)", path.display()).dimmed()
    );

    let diff = TextDiff::from_lines(original, rewritten);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => format!(" {}", change).normal(),
        };
        print!("{}", sign);
    }
}
