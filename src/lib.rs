/*!
 * dirsnap - Render a text snapshot of directory structure and contents
 *
 * This library walks a directory tree twice, once for the structural tree
 * and once for file contents, honoring .gitignore-style exclusion rules and
 * an optional content inclusion filter, and assembles a deterministic
 * plain-text snapshot suitable for LLM context.
 */

pub mod clipboard;
pub mod config;
pub mod contents;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod tree;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use contents::ContentCollector;
pub use error::{DirsnapError, Result};
pub use rules::{find_repo_root, IgnoreRule, RuleSet};
pub use tree::TreeRenderer;
pub use writer::{Snapshot, SnapshotWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
