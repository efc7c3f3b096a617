/*!
 * Shared helpers for dirsnap
 */

use once_cell::sync::Lazy;

/// Patterns always applied relative to the start directory, on top of any
/// ignore-file rules and CLI-supplied patterns.
pub static DEFAULT_IGNORE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control metadata
        ".git/",
        ".svn/",
        ".hg/",
        ".gitignore",
        // Dependency locks
        "package-lock.json",
        "yarn.lock",
        "Cargo.lock",
        // Build and tool caches
        "__pycache__/",
        "node_modules/",
        ".ipynb_checkpoints/",
        // OS files
        ".DS_Store",
    ]
});

/// Human-readable depth for the header block.
pub fn format_depth(max_depth: i32) -> String {
    if max_depth == -1 {
        "unlimited".to_string()
    } else {
        max_depth.to_string()
    }
}
