//! AkiraDocs CLI - Command-line interface for API specification documentation
//!
//! This is the main entry point for the AkiraDocs CLI application, providing
//! commands for validating, browsing, sampling, rendering and editing API
//! specifications.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration feeds logging, so it is loaded first and its error reported after
    let config = Config::load_with_file(cli.config.as_deref());

    // Initialize logging
    if let Err(e) = init_logging(&cli, config.as_ref().ok()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
async fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    config.validate()?;

    let mut output = OutputWriter::new(cli.output, cli.use_color(), cli.quiet, cli.verbosity_level());
    output.set_show_progress(config.output.progress);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &config, &mut output).await,
        Commands::Nav(args) => handlers::handle_nav(args, &config, &mut output).await,
        Commands::Sample(args) => handlers::handle_sample(args, &config, &mut output).await,
        Commands::Render(args) => handlers::handle_render(args, &config, &mut output).await,
        Commands::Raw(args) => handlers::handle_raw(args, &config, &mut output).await,
        Commands::Apply(args) => handlers::handle_apply(args, &config, &mut output).await,
        Commands::Config(args) => handlers::handle_config(args, &config, &mut output).await,
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: Option<&Config>) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    if let Some(config) = config {
        logging_config.merge_with_file(&config.logging);
    }

    // Environment overrides the configuration file
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["akira", "-vv", "validate", "api.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["akira", "--quiet", "validate", "api.json"]);
        assert_eq!(cli.verbosity_level(), 0);

        let cli = Cli::parse_from(["akira", "-o", "json", "nav", "api.yaml", "--grouped"]);
        assert_eq!(cli.output, cli::OutputFormat::Json);
    }
}
