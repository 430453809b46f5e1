//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for docsmith using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Docsmith - Swagger to HTML documentation exporter
#[derive(Parser, Debug)]
#[command(name = "docsmith")]
#[command(version, about, long_about = None)]
#[command(author = "Docsmith Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docsmith.toml", env = "DOCSMITH_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOCSMITH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the API documentation of every configured service
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
