//! Per-file processing pipeline
//!
//! read → order → backup → write, with the policy resolved once for the
//! whole run. The loop stops on the first error; a file is only touched
//! after its complete rewritten text exists in memory, and an existing
//! target is copied to a sibling backup before being overwritten.

use crate::error::CliError;
use clap::ArgMatches;
use declsort_config::{discover, Policy};
use declsort_order::{order_source, ComparatorChain};
use owo_colors::OwoColorize;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .into_iter()
        .flatten()
        .collect();
    let output = matches.get_one::<String>("output");
    if output.is_some() && files.len() > 1 {
        return Err(CliError::OutputWithManyInputs);
    }
    let to_stdout = matches.get_flag("stdout");
    let backup_ext = matches
        .get_one::<String>("backup-ext")
        .expect("backup-ext has a default");

    let policy = resolve_policy(matches, &files)?;
    let chain: ComparatorChain = policy.comparator_chain()?;

    for file in &files {
        let input = Path::new(file.as_str());
        if !input.is_file() {
            return Err(CliError::InputNotFound(input.to_path_buf()));
        }
        let source = fs::read_to_string(input).map_err(|err| CliError::Read {
            path: input.to_path_buf(),
            message: err.to_string(),
        })?;

        let rewritten = order_source(&source, &chain);

        if to_stdout {
            print!("{}", rewritten);
            continue;
        }
        let target = output
            .map(PathBuf::from)
            .unwrap_or_else(|| input.to_path_buf());
        write_with_backup(&target, &rewritten, backup_ext)?;
        eprintln!("{} {}", "reordered".green(), target.display());
    }
    Ok(())
}

/// `--config` wins; otherwise the nearest `declsort.json` above the first
/// input; otherwise the built-in policy.
fn resolve_policy(matches: &ArgMatches, files: &[&String]) -> Result<Policy, CliError> {
    if let Some(path) = matches.get_one::<String>("config") {
        return Ok(Policy::from_path(path)?);
    }
    let start = files
        .first()
        .and_then(|f| Path::new(f.as_str()).parent())
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    match discover(&start) {
        Some(path) => Ok(Policy::from_path(path)?),
        None => Ok(Policy::embedded_default().clone()),
    }
}

fn write_with_backup(target: &Path, text: &str, backup_ext: &str) -> Result<(), CliError> {
    if target.exists() {
        let backup = backup_path(target, backup_ext);
        fs::copy(target, &backup).map_err(|err| CliError::OutputPath {
            path: backup,
            message: err.to_string(),
        })?;
    }
    fs::write(target, text).map_err(|err| CliError::OutputPath {
        path: target.to_path_buf(),
        message: err.to_string(),
    })
}

/// `widgets.ts` backs up to `widgets.ts.bak`: appended, not substituted,
/// so distinct inputs never share a backup path
fn backup_path(target: &Path, ext: &str) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(ext);
    target.with_file_name(name)
}
