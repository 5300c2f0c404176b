use anyhow::Result;
use clap::Parser;
use log::{ error, info };

mod cli;
use cli::{ Commands, SynspecCli };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = SynspecCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    let outcome = match &cli.command {
        Commands::Show { spec } => cli::commands::show::execute(spec, cli.output_format),
        Commands::Evaluate { spec, candidates } => {
            cli::commands::evaluate::execute(spec, candidates, cli.output_format)
        }
        Commands::Family { spec, family, optimum } => {
            cli::commands::family::execute(spec, family, *optimum, cli.output_format)
        }
    };

    if let Err(e) = &outcome {
        error!("Command failed: {}", e);
        cli::ui::print_error(&e.to_string());
    }
    outcome
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
