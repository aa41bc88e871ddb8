//! Command-line interface for declsort
//!
//! Reorders the top-level declarations of source files according to an
//! ordering policy.
//!
//! Usage:
//!   declsort `<files>`... [--config `<policy>`]      - Rewrite files in place
//!   declsort `<file>` --stdout                     - Print instead of writing
//!   declsort `<file>` -o `<path>`                    - Write to a different path

mod error;
mod pipeline;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

fn main() {
    let matches = Command::new("declsort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reorder the top-level declarations of source files by a configurable policy")
        .arg_required_else_help(true)
        .arg(
            Arg::new("files")
                .help("Source files to reorder")
                .required(true)
                .num_args(1..)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("Policy file (default: nearest declsort.json, else the built-in policy)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write here instead of in place (single input only)"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .action(ArgAction::SetTrue)
                .help("Print the rewritten text instead of writing files"),
        )
        .arg(
            Arg::new("backup-ext")
                .long("backup-ext")
                .value_name("EXT")
                .default_value("bak")
                .help("Extension appended to the pre-overwrite backup copy"),
        )
        .arg(
            Arg::new("pause")
                .long("pause")
                .action(ArgAction::SetTrue)
                .help("Wait for enter before exiting"),
        )
        .get_matches();

    let result = pipeline::run(&matches);
    if let Err(err) = &result {
        eprintln!("{} {}", "error:".red().bold(), err);
    }
    if matches.get_flag("pause") {
        wait_for_acknowledgment();
    }
    if result.is_err() {
        std::process::exit(1);
    }
}

/// Optional end-of-run acknowledgment, for wrapper scripts that would
/// close the terminal before the user sees the outcome
fn wait_for_acknowledgment() {
    print!("Press enter to continue...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
