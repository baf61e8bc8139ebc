//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run translation checks over every `.ts` file
//! - `lookup`: Resolve one source string against a translation file
//! - `contexts`: List the contexts of a translation file
//! - `export`: Re-serialize a translation file as TS or JSON
//! - `init`: Initialize tscat configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::commands::runner::CheckType;

#[derive(Debug, Parser)]
#[command(name = "tscat", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.file.verbose,
            Some(Command::Contexts(cmd)) => cmd.file.verbose,
            Some(Command::Export(cmd)) => cmd.file.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Arguments shared by commands that work on a whole project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project directory; .tscatrc.json is searched from here upwards
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Translations directory, relative to --path (overrides config file)
    #[arg(long)]
    pub translations_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments shared by commands that work on a single `.ts` file.
#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// Translation file (.ts)
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckType>,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub file: FileArgs,

    /// Context name, e.g. "Strings"
    pub context: String,

    /// Source string to translate
    pub source: String,

    /// Disambiguation comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Count for plural forms; %n in the result is replaced by it
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,
}

#[derive(Debug, Args)]
pub struct ContextsCommand {
    #[command(flatten)]
    pub file: FileArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Ts,
    Json,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub file: FileArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Ts)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation files (unfinished, empty, placeholders, unknown status)
    Check(CheckCommand),
    /// Print the translation of a source string
    Lookup(LookupCommand),
    /// List contexts of a translation file with per-status counts
    Contexts(ContextsCommand),
    /// Re-serialize a translation file as TS or JSON
    Export(ExportCommand),
    /// Initialize a new .tscatrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
