//! Command-line interface for the classforge utility
//!
//! Provides a CLI to turn spreadsheet-exported UML class diagrams into Rust
//! source scaffolding.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use classforge::core::logging::init_logging;
use classforge::model::Diagram;
use classforge::render::ScaffoldWriter;
use classforge::source::DiagramSheet;

/// Classforge - Generate source scaffolding from class diagram exports
#[derive(Parser)]
#[command(name = "classforge")]
#[command(about = "A Rust utility to turn spreadsheet-exported UML class diagrams into source scaffolding")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate source scaffolding from a class diagram export
    Generate {
        /// Input xlsx file containing the class diagram export
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated source files
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show the resolved contents of a class diagram export
    Inspect {
        /// Input xlsx file containing the class diagram export
        #[arg(short, long)]
        input: PathBuf,
    },
}

/// Main CLI application
pub struct ClassforgeApp;

impl ClassforgeApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("CLASSFORGE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("CLASSFORGE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classforge v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate { input, output } => {
                self.generate_command(&input, &output, cli.verbose)
            }
            Commands::Inspect { input } => self.inspect_command(&input),
        }
    }

    fn generate_command(
        &self,
        input: &std::path::Path,
        output: &std::path::Path,
        verbose: bool,
    ) -> Result<()> {
        let diagram = load(input)?;
        let written = ScaffoldWriter::new().write(&diagram, output)?;
        info!(
            diagram = diagram.name(),
            files = written.len(),
            "Generation complete"
        );

        for path in &written {
            println!("{}", path.display());
        }
        if verbose {
            eprintln!(
                "Wrote {} file(s) for diagram '{}'",
                written.len(),
                diagram.name()
            );
        }
        Ok(())
    }

    fn inspect_command(&self, input: &std::path::Path) -> Result<()> {
        let diagram = load(input)?;

        println!("Diagram: {}", diagram.name());
        println!("Packages: {}", diagram.packages().len());
        for package in diagram.packages() {
            println!(
                "  {} ({} classes)",
                package.name.as_deref().unwrap_or("<unnamed>"),
                package.classes().len()
            );
        }
        println!("Classes: {}", diagram.classes().len());
        for class in diagram.classes() {
            let mut facts = vec![
                format!("{} attributes", class.attributes().len()),
                format!("{} associations", class.associations().len()),
            ];
            if class.is_abstract() {
                facts.push("abstract".to_string());
            }
            if let Some(superclass) = class.superclass() {
                if let Some(parent) = diagram.class(superclass).name.as_deref() {
                    facts.push(format!("specializes {}", parent));
                }
            }
            println!(
                "  {} ({})",
                class.name.as_deref().unwrap_or("<unnamed>"),
                facts.join(", ")
            );
        }
        Ok(())
    }
}

impl Default for ClassforgeApp {
    fn default() -> Self {
        Self::new()
    }
}

fn load(input: &std::path::Path) -> Result<Diagram> {
    let sheet = DiagramSheet::open(input)?;
    let (name, rows) = sheet.into_parts();
    Ok(Diagram::populate(name, &rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from([
            "classforge",
            "generate",
            "--input",
            "model.xlsx",
            "--output",
            "out",
        ]);
        match cli.command {
            Commands::Generate { input, output } => {
                assert_eq!(input, PathBuf::from("model.xlsx"));
                assert_eq!(output, PathBuf::from("out"));
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_log_flags_default() {
        let cli = Cli::parse_from(["classforge", "inspect", "--input", "model.xlsx"]);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }
}
