//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Envy - configuration file templates with per-environment variables
#[derive(Parser, Debug)]
#[command(name = "envy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Start workspace discovery from this directory
    #[arg(short, long, global = true)]
    pub dir: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an envy workspace
    Init(InitArgs),

    /// Register a configuration file as a template
    Add(AddArgs),

    /// List registered templates
    List(ListArgs),

    /// Show the resolved variables for a selection
    Vars(VarsArgs),

    /// Check templates and variables for consistency
    Check(CheckArgs),

    /// Generate configuration files from templates
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Reinitialize even if an envy directory already exists
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// File to register as a template
    pub file: Utf8PathBuf,

    /// Template name (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct VarsArgs {
    /// Category selection as category=selector (repeatable; order decides
    /// which category wins on collisions)
    #[arg(short = 's', long = "set", value_name = "CATEGORY=SELECTOR", value_parser = parse_selection_pair)]
    pub set: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Category selection as category=selector (repeatable)
    #[arg(short = 's', long = "set", value_name = "CATEGORY=SELECTOR", value_parser = parse_selection_pair)]
    pub set: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Category selection as category=selector (repeatable)
    #[arg(short = 's', long = "set", value_name = "CATEGORY=SELECTOR", value_parser = parse_selection_pair)]
    pub set: Vec<(String, String)>,

    /// Write files even when the consistency check reports missing variables
    #[arg(short, long)]
    pub force: bool,
}

/// Parse one `category=selector` pair
fn parse_selection_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((category, selector)) if !category.is_empty() && !selector.is_empty() => {
            Ok((category.to_string(), selector.to_string()))
        }
        _ => Err(format!("expected CATEGORY=SELECTOR, got '{}'", s)),
    }
}
