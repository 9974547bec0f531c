use crate::types::{ColorChoice, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batchtrace")]
#[command(about = "Classify traceability events and render batch trace trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: $BATCHTRACE_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify raw business-step identifiers into event types
    Classify {
        #[arg(required = true, value_name = "BIZ_STEP")]
        biz_steps: Vec<String>,
    },

    /// Render a batch trace tree from a JSON document
    Tree {
        #[arg(value_name = "FILE", help = "Batch tree JSON file, or - for stdin")]
        input: PathBuf,

        #[arg(long, help = "Report quantity and code inconsistencies on stderr")]
        check: bool,

        #[arg(long, help = "Like --check, but fail when any inconsistency is found")]
        strict: bool,
    },

    /// Classify and summarize a list of traceability events
    Events {
        #[arg(
            value_name = "FILE",
            help = "JSON array, EPCIS document, or JSON Lines file, or - for stdin"
        )]
        input: PathBuf,
    },
}
