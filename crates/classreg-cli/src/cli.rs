//! Command-line interface for the classreg utility
//!
//! Builds a class registry from a command script and prints a summary.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::report::{text_summary, RegistryReport};
use crate::script::{parse_script, ScriptCommand, Session};
use classreg::core::logging::{init_logging, LogConfig};

/// Classreg - build UML class registries from command scripts
#[derive(Parser)]
#[command(name = "classreg")]
#[command(about = "Build in-memory UML class registries from command scripts")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
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
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
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
    /// Execute a command script and print the resulting registry
    Run {
        /// Script file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a command script without executing it
    Check {
        /// Script file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List the commands available in scripts
    Commands {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
#[derive(Default)]
pub struct ClassregApp;

impl ClassregApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        let config = LogConfig::resolve(
            cli.log_level.map(|l| l.as_str()),
            cli.log_format.map(|f| f.as_str()),
            |key| std::env::var(key).ok(),
        );
        if let Err(e) = init_logging(&config) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classreg v{}", env!("CARGO_PKG_VERSION"));
        }

        let output = match cli.command {
            Commands::Run { input, json } => self.run_command(input, json, cli.verbose)?,
            Commands::Check { input } => self.check_command(input, cli.verbose)?,
            Commands::Commands { json } => self.commands_command(json)?,
        };
        println!("{}", output);
        Ok(())
    }

    /// Handle the run command
    pub fn run_command(&self, input: Option<PathBuf>, json: bool, verbose: bool) -> Result<String> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let statements = parse_script(&content)?;
        let mut session = Session::new();
        session.run(statements);

        if json {
            let report = RegistryReport::from_registry(session.registry())
                .with_shown(session.output().to_vec());
            return Ok(serde_json::to_string_pretty(&report)?);
        }

        let mut sections: Vec<String> = session.output().to_vec();
        sections.push(text_summary(session.registry()));
        Ok(sections.join("\n\n"))
    }

    /// Handle the check command
    pub fn check_command(&self, input: Option<PathBuf>, verbose: bool) -> Result<String> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let statements = parse_script(&content)?;
        Ok(format!("✓ Valid script: {} statements", statements.len()))
    }

    /// Handle the commands command
    pub fn commands_command(&self, json: bool) -> Result<String> {
        let catalog = ScriptCommand::catalog();

        if json {
            let commands: Vec<_> = catalog
                .iter()
                .map(|(name, about)| serde_json::json!({ "name": name, "description": about }))
                .collect();
            let value = serde_json::json!({
                "commands": commands,
                "total": catalog.len(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let width = catalog.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut lines = vec!["Script commands:".to_string()];
        for (name, about) in &catalog {
            lines.push(format!("  {:width$}  {}", name, about, width = width));
        }
        Ok(lines.join("\n"))
    }

    /// Read the script from a file, or stdin for `-` or no path
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing_run_command() {
        let cli = Cli::try_parse_from(["classreg", "run", "--input", "model.txt", "--json"]).unwrap();
        match cli.command {
            Commands::Run { input, json } => {
                assert_eq!(input.unwrap().to_string_lossy(), "model.txt");
                assert!(json);
            }
            _ => panic!("Expected Run command"),
        }
        assert!(cli.log_level.is_none());
        assert!(cli.log_format.is_none());
    }

    #[test]
    fn test_cli_parsing_global_flags() {
        let cli = Cli::try_parse_from([
            "classreg",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "-v",
            "commands",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Commands { json: false }));
    }

    #[test]
    fn test_cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["classreg", "--log-level", "loud", "commands"]).is_err());
    }

    #[test]
    fn test_run_command_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.classreg");
        fs::write(&path, "add-class A\nadd-class B\nadd-relationship A B --kind dependency\n")
            .unwrap();

        let app = ClassregApp::new();
        let output = app.run_command(Some(path), false, false).unwrap();
        assert!(output.contains("+class A"));
        assert!(output.contains("--dependency--> B"));
        assert!(output.ends_with("2 classes, 1 relationships"));
    }

    #[test]
    fn test_run_command_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.classreg");
        fs::write(&path, "add-class A --abstract\n").unwrap();

        let output = ClassregApp::new().run_command(Some(path), true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["classes"][0]["name"], "A");
        assert_eq!(value["classes"][0]["is_abstract"], true);
        assert!(value["shown"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_run_command_json_keeps_show_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.classreg");
        fs::write(&path, "add-class A\nadd-class B\nadd-relationship A B --kind uses\nshow A\nshow Ghost\n")
            .unwrap();

        let output = ClassregApp::new().run_command(Some(path), true, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["shown"][0], "+class A\n  --uses--> B");
        assert_eq!(value["shown"][1], "Ghost: not found");
        assert_eq!(value["classes"][0]["relationships"][0]["kind"], "uses");
    }

    #[test]
    fn test_check_command_reports_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.classreg");
        fs::write(&path, "add-class A\nadd-class\n").unwrap();

        let err = ClassregApp::new().check_command(Some(path), false).unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_missing_input_file() {
        let err = ClassregApp::new()
            .read_input(Some(PathBuf::from("/definitely/not/here.classreg")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_commands_listing() {
        let app = ClassregApp::new();
        let text = app.commands_command(false).unwrap();
        assert!(text.starts_with("Script commands:"));
        assert!(text.contains("add-relationship"));

        let json: serde_json::Value =
            serde_json::from_str(&app.commands_command(true).unwrap()).unwrap();
        assert_eq!(json["total"], 15);
    }
}
