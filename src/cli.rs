use clap::Parser;
use oscal_component_gen::application::dto::OutputFormat;
use std::path::PathBuf;

/// Generate OSCAL component definitions from CSV control inventories
#[derive(Parser, Debug)]
#[command(name = "oscal-component-gen")]
#[command(version)]
#[command(
    about = "Generate OSCAL component definitions from CSV control inventories",
    long_about = None
)]
pub struct Args {
    /// CSV file with a header row followed by rows of
    /// control acronym, component name, control description
    #[arg(required_unless_present = "latest")]
    pub input: Option<PathBuf>,

    /// Output format: yaml or json [default: yaml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory where generated documents are kept, one file per document id
    #[arg(short = 's', long)]
    pub store_dir: Option<PathBuf>,

    /// Print the most recently stored document instead of generating one
    #[arg(long, conflicts_with = "input")]
    pub latest: bool,

    /// Path to a config file (defaults to ./oscal-component.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only print errors and warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
