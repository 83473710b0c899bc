//! javats CLI tool.
//!
//! Usage:
//! ```bash
//! javats check [OPTIONS] <PATHS>...
//! javats build [OPTIONS] <PATHS>...
//! javats inspect <FILE>
//! javats list-rules
//! javats init
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod project;

/// Java-flavored OOP rules for TypeScript, checked before emitting
#[derive(Parser)]
#[command(name = "javats")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check .javats files against the dialect rules
    Check {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Rule preset: mature or legacy
        #[arg(long)]
        preset: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Validate and transpile .javats files to TypeScript and JavaScript
    Build {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        paths: Vec<String>,

        /// Output directory (default: build.out_dir from config)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Also emit compiled JavaScript with the entry runner
        #[arg(long)]
        emit_js: bool,

        /// Do not emit the TypeScript rewrite
        #[arg(long)]
        no_emit_ts: bool,

        /// Rule preset: mature or legacy
        #[arg(long)]
        preset: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Print the structure of a .javats file as JSON
    Inspect {
        /// File to inspect
        file: PathBuf,
    },

    /// List available rules
    ListRules,

    /// Initialize a new JavaTS project
    Init {
        /// Project name (directory to create)
        #[arg(short, long, default_value = "javats-project")]
        name: String,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output, grouped by file.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
    /// Source snippets rendered with miette.
    Pretty,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let locate = || -> Result<project::Project> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        project::Project::locate(&cwd, cli.config.as_deref())
    };

    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
            preset,
            exclude,
        } => commands::check::run(&paths, format, rules, preset.as_deref(), exclude, &locate()?),
        Commands::Build {
            paths,
            out_dir,
            emit_js,
            no_emit_ts,
            preset,
            exclude,
        } => {
            let options = commands::build::BuildOptions {
                out_dir,
                emit_js,
                no_emit_ts,
                preset,
                exclude,
            };
            commands::build::run(&paths, options, &locate()?).await
        }
        Commands::Inspect { file } => commands::inspect::run(&file),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { name, force } => commands::init::run(&name, force),
    }
}
