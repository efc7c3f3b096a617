/*!
 * Configuration handling for dirsnap
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{DirsnapError, Result};

/// Command-line arguments for dirsnap
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirsnap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a text snapshot of a directory tree and its contents",
    long_about = "Renders an indented tree of a directory plus optional per-file content blocks, honoring the repository .gitignore and ad-hoc glob patterns. The snapshot is printed to stdout and can be copied to the system clipboard."
)]
pub struct Args {
    /// Start directory to snapshot
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Maximum recursion depth (-1 for unlimited)
    #[clap(short, long, default_value = "3", allow_negative_numbers = true)]
    pub depth: i32,

    /// Skip the file contents section (structure only)
    #[clap(long)]
    pub no_contents: bool,

    /// Keep notebook files (*.ipynb is ignored by default)
    #[clap(long)]
    pub with_notebooks: bool,

    /// Comma-separated list of extra ignore patterns
    #[clap(long, value_delimiter = ',')]
    pub ignore_patterns: Vec<String>,

    /// Comma-separated list of patterns restricting which file contents are shown
    #[clap(long, value_delimiter = ',')]
    pub include_patterns: Vec<String>,

    /// Do not read the repository .gitignore
    #[clap(long)]
    pub no_gitignore: bool,

    /// Copy output to system clipboard
    #[clap(short = 'c', long)]
    pub clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to snapshot
    pub target_dir: PathBuf,

    /// Maximum recursion depth (-1 means unlimited)
    pub max_depth: i32,

    /// Whether to emit the file contents section
    pub include_contents: bool,

    /// Whether to auto-ignore notebook files
    pub ignore_notebooks: bool,

    /// Ad-hoc ignore patterns (start-relative)
    pub ignore_patterns: Vec<String>,

    /// Content inclusion patterns (if empty, include all)
    pub include_patterns: Vec<String>,

    /// Whether to read the repository ignore file
    pub respect_gitignore: bool,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory_path),
            max_depth: args.depth,
            include_contents: !args.no_contents,
            ignore_notebooks: !args.with_notebooks,
            ignore_patterns: args.ignore_patterns,
            include_patterns: args.include_patterns,
            respect_gitignore: !args.no_gitignore,
            clip: args.clip,
        }
    }

    /// Validate the configuration
    ///
    /// A missing or non-directory start path is the one fatal condition of
    /// the whole tool; it is rejected here before any traversal begins.
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(DirsnapError::PathNotFound(format!(
                "start directory not found or not a directory: {}",
                self.target_dir.display()
            )));
        }

        if self.max_depth < -1 {
            return Err(DirsnapError::InvalidArgument(format!(
                "depth must be -1 (unlimited) or non-negative, got {}",
                self.max_depth
            )));
        }

        Ok(())
    }
}
