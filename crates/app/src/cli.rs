//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use vellum_application::use_cases::{COLLECTION_FILE, ENVIRONMENTS_DIR, FOLDER_FILE};

/// Read, write and check Vellum request files.
#[derive(Debug, Parser)]
#[command(name = "vellum", version, about)]
pub struct Cli {
    /// Configuration file (defaults to `vellum.toml` when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log dispatch activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a file and print it as JSON.
    Parse {
        /// File to parse.
        file: PathBuf,
        /// File variant; guessed from the path when omitted.
        #[arg(long, value_enum)]
        kind: Option<Kind>,
    },

    /// Read a JSON object and print it in the text format.
    Serialize {
        /// JSON file to read.
        file: PathBuf,
        /// Object variant.
        #[arg(long, value_enum, default_value_t = Kind::Request)]
        kind: Kind,
        /// Write a collection object as a folder root.
        #[arg(long)]
        folder: bool,
    },

    /// Rewrite a file in canonical form.
    Fmt {
        /// File to format.
        file: PathBuf,
        /// File variant; guessed from the path when omitted.
        #[arg(long, value_enum)]
        kind: Option<Kind>,
        /// Format a collection file as a folder root.
        #[arg(long)]
        folder: bool,
        /// Replace the file instead of printing.
        #[arg(long)]
        write: bool,
    },

    /// Parse files and report every failure.
    Check {
        /// Files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// File variant; guessed per file when omitted.
        #[arg(long, value_enum)]
        kind: Option<Kind>,
    },

    /// Summarize a collection directory.
    Scan {
        /// Collection directory.
        dir: PathBuf,
    },
}

/// File variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// A request file.
    Request,
    /// An environment file.
    Environment,
    /// A collection or folder root file.
    Collection,
}

impl Kind {
    /// Guesses the variant from the file name and its directory.
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        let name = path.file_name().and_then(|name| name.to_str());
        let parent = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str());

        if matches!(name, Some(COLLECTION_FILE | FOLDER_FILE)) {
            Self::Collection
        } else if parent == Some(ENVIRONMENTS_DIR) {
            Self::Environment
        } else {
            Self::Request
        }
    }
}

/// Whether `path` names a folder root file.
#[must_use]
pub fn is_folder_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == FOLDER_FILE)
}
