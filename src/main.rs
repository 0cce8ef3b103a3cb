use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use decohoist::walk::{process_root, Options};

#[derive(Parser)]
#[command(name = "decohoist")]
#[command(about = "Hoist export keywords above class decorators in TypeScript sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Root path to rewrite (a directory walked recursively, or one file)
    path: Option<PathBuf>,

    /// Show what would change without modifying files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show unified diff of changes
    #[arg(short, long)]
    diff: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // No path means nothing to do: print usage and exit cleanly.
    let Some(path) = cli.path else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    if !path.exists() {
        eprintln!("{} path does not exist: {}", "error:".red(), path.display());
        return Ok(ExitCode::from(1));
    }

    let options = Options {
        dry_run: cli.dry_run,
        show_diff: cli.diff,
    };
    let summary = process_root(&path, options)?;

    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  {} {}",
        format!("{}", summary.rewritten).green(),
        if cli.dry_run { "would rewrite" } else { "rewritten" }
    );
    println!(
        "  {} parse failures",
        format!("{}", summary.parse_failures).yellow()
    );
    println!("  {} unchanged", summary.unchanged);

    // Per-unit parse failures are skips, not run failures.
    Ok(ExitCode::SUCCESS)
}
