use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "synspec",
    about = "Satisfaction and optimality bookkeeping for synthesis specifications",
    version,
    author,
    long_about = None
)]
pub struct SynspecCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a specification and the formulas it submits for model checking
    Show {
        /// Path to the specification file (YAML)
        #[arg(short, long)]
        spec: PathBuf,
    },

    /// Evaluate concrete candidates in order, tracking the optimum
    Evaluate {
        /// Path to the specification file (YAML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Path to the candidate results file (YAML)
        #[arg(short, long)]
        candidates: PathBuf,
    },

    /// Interpret the bounding evaluation of a family
    Family {
        /// Path to the specification file (YAML)
        #[arg(short, long)]
        spec: PathBuf,

        /// Path to the family results file (YAML)
        #[arg(short, long)]
        family: PathBuf,

        /// Known optimum to seed the objective with
        #[arg(long)]
        optimum: Option<f64>,
    },
}
