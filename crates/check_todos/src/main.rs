use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use check_todos::{scan, ScanConfig};

/// Exit status when the scan itself could not complete.
const EXIT_ERROR: i32 = 2;

fn build_command() -> Command {
    Command::new("check_todos")
        .version("0.1.0")
        .about("Fails when TODO comments or todo! tokens don't reference an issue like (#123)")
        .arg(
            Arg::new("dirs")
                .value_name("DIR")
                .num_args(0..)
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directories (or files) to scan recursively; defaults to the current directory"),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Skip files and directories whose basename matches the given name"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn config_from_matches(matches: &ArgMatches) -> ScanConfig {
    ScanConfig {
        roots: matches
            .get_many::<PathBuf>("dirs")
            .unwrap_or_default()
            .cloned()
            .collect(),
        exclusions: matches
            .get_many::<String>("exclude")
            .unwrap_or_default()
            .cloned()
            .collect(),
        verbose: matches.get_flag("verbose"),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &ScanConfig) -> Result<i32> {
    let report = scan(config)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.render().as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report to stdout")?;

    Ok(report.exit_code())
}

fn main() {
    let matches = build_command().get_matches();
    let config = config_from_matches(&matches);
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    match run(&config) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(EXIT_ERROR);
        }
    }
}
