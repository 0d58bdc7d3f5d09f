use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

/// Inputs compared equal.
const EXIT_SAME: u8 = 0;
/// A difference was found.
const EXIT_DIFFERENT: u8 = 1;
/// The comparison could not run (unreadable file, bad JSON, bad config).
/// Matches clap's status for usage errors.
const EXIT_TROUBLE: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let outcome = commands::run_command(cli);
    if let Err(err) = &outcome {
        eprintln!("{} {err:#}", "error:".red().bold());
    }
    ExitCode::from(status(&outcome))
}

fn status(outcome: &anyhow::Result<bool>) -> u8 {
    match outcome {
        Ok(false) => EXIT_SAME,
        Ok(true) => EXIT_DIFFERENT,
        Err(_) => EXIT_TROUBLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_distinct_from_differences() {
        assert_eq!(status(&Ok(false)), 0);
        assert_eq!(status(&Ok(true)), 1);
        assert_eq!(status(&Err(anyhow::anyhow!("failed to read got.txt"))), 2);
    }

    #[test]
    fn missing_input_file_maps_to_trouble() {
        let cli = cli::Cli::try_parse_from([
            "whydiff",
            "bytes",
            "/definitely/not/here",
            "/nor/here",
        ])
        .unwrap();
        assert_eq!(status(&commands::run_command(cli)), EXIT_TROUBLE);
    }

    #[test]
    fn bad_config_maps_to_trouble() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("whydiff.toml");
        std::fs::write(&config, "max_lines = \"many\"").unwrap();
        let cli = cli::Cli::try_parse_from([
            "whydiff",
            "--config",
            config.to_str().unwrap(),
            "len",
            "[]",
            "0",
        ])
        .unwrap();
        assert_eq!(status(&commands::run_command(cli)), EXIT_TROUBLE);
    }
}
