//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use akira_core::source::Locator;
use akira_core::Format;
use clap::{Args, Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// AkiraDocs CLI - API specifications to browsable documentation
///
/// Validate OpenAPI-style specifications, browse their endpoints, generate
/// client code samples, render markdown documentation and try edits without
/// ever touching the original file.
#[derive(Parser, Debug)]
#[command(
    name = "akira",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "AKIRA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a specification and report whether it is valid
    Validate(ValidateArgs),

    /// List the endpoints of a specification in display order
    Nav(NavArgs),

    /// Generate example client code for endpoints
    Sample(SampleArgs),

    /// Render markdown documentation
    Render(RenderArgs),

    /// Print the canonical JSON form of a specification
    Raw(RawArgs),

    /// Apply an edited specification on top of a committed one
    Apply(ApplyArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Specification input shared by every document command
#[derive(Args, Debug, Clone)]
pub struct SpecInput {
    /// Specification file (JSON or YAML), `-` for stdin, or `repo:<id>`
    #[arg(value_name = "SPEC")]
    pub spec: String,

    /// Force the input format instead of detecting it
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,
}

impl SpecInput {
    pub fn locator(&self) -> Locator {
        Locator::from_arg(&self.spec)
    }
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: SpecInput,

    /// Show the per-endpoint breakdown
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the nav command
#[derive(Parser, Debug)]
pub struct NavArgs {
    #[command(flatten)]
    pub input: SpecInput,

    /// Group entries by path
    #[arg(long)]
    pub grouped: bool,
}

/// Arguments for the sample command
#[derive(Parser, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub input: SpecInput,

    /// Endpoint id (`<method>-<path>`); all endpoints when omitted
    #[arg(short, long, value_name = "ENDPOINT_ID")]
    pub endpoint: Option<String>,

    /// Dialects to generate (fetch, python, curl); configured defaults when omitted
    #[arg(short, long, value_name = "DIALECT")]
    pub dialect: Vec<String>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: SpecInput,

    /// Include code samples under each endpoint
    #[arg(long)]
    pub samples: bool,

    /// Append the raw specification
    #[arg(long)]
    pub raw: bool,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the raw command
#[derive(Parser, Debug)]
pub struct RawArgs {
    #[command(flatten)]
    pub input: SpecInput,
}

/// Arguments for the apply command
#[derive(Parser, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub input: SpecInput,

    /// Edited specification text to commit, `-` for stdin
    #[arg(value_name = "EDITED")]
    pub edited: String,

    /// Write the canonical form of the committed result here
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize a default configuration file
    Init(ConfigInitArgs),

    /// Show current configuration values
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Initialize user config (~/.config/akira/config.toml) instead of .akira.toml
    #[arg(long)]
    pub user: bool,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Specification input formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => Format::Json,
            InputFormat::Yaml => Format::Yaml,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
