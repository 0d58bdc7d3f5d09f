use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "whydiff",
    about = "whydiff — explain why two values differ",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding limits and layout
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find the first differing byte between two files
    Bytes(ScalarArgs),
    /// Find the first differing codepoint between two UTF-8 files
    Chars(ScalarArgs),
    /// Show line context, unified, and side-by-side views of two text files
    Lines(LinesArgs),
    /// Check that a JSON container holds a JSON item
    Contains(ContainsArgs),
    /// Check that a JSON container has an expected length
    Len(LenArgs),
}

#[derive(Args)]
pub struct ScalarArgs {
    pub got: PathBuf,
    pub want: PathBuf,
    /// Units shown on each side of the divergence
    #[arg(short, long, allow_negative_numbers = true)]
    pub window: Option<isize>,
}

#[derive(Args)]
pub struct LinesArgs {
    pub got: PathBuf,
    pub want: PathBuf,
    /// Lines shown before and after the divergent line
    #[arg(short = 'C', long, allow_negative_numbers = true)]
    pub context: Option<isize>,
}

#[derive(Args)]
pub struct ContainsArgs {
    /// Container as a JSON literal, e.g. '[1,2,3]'
    pub container: String,
    /// Item as a JSON literal, e.g. '2' or '"key"'
    pub item: String,
}

#[derive(Args)]
pub struct LenArgs {
    /// Container as a JSON literal
    pub container: String,
    pub expected: usize,
}
