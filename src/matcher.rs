/*!
 * Glob pattern matching for ignore and include rules
 *
 * One matcher serves every rule form the tool understands: plain globs,
 * basename-only patterns, and directory-anchored patterns ending in `/`.
 */

use glob_match::glob_match;

/// Check a slash-separated relative path against a single pattern.
///
/// Supported forms:
/// - Glob metacharacters (`*`, `?`, `[..]`) with shell semantics.
/// - A pattern without a separator matches the final path segment anywhere
///   in the tree.
/// - A pattern ending in `/` is directory-anchored: it matches the directory
///   at that relative path and everything nested beneath it, but never a
///   plain file of the same name.
///
/// Patterns are tried against both the full relative path and the basename,
/// so rules written either way behave as expected. `is_dir` carries whether
/// the candidate is a directory; the traversal already knows this, and the
/// trailing-slash form needs it.
pub fn matches(rel_path: &str, pattern: &str, is_dir: bool) -> bool {
    if let Some(base) = pattern.strip_suffix('/') {
        if base.is_empty() {
            return false;
        }
        // The directory itself, or anything under it.
        if is_dir && (rel_path == base || glob_match(base, rel_path)) {
            return true;
        }
        let mut prefix = String::with_capacity(base.len() + 1);
        prefix.push_str(base);
        prefix.push('/');
        return rel_path.starts_with(&prefix);
    }

    glob_match(pattern, rel_path) || glob_match(pattern, basename(rel_path))
}

/// Case-insensitive basename match, used by the content inclusion filter.
pub fn matches_basename_ci(rel_path: &str, pattern: &str) -> bool {
    let name = basename(rel_path).to_lowercase();
    glob_match(&pattern.to_lowercase(), &name)
}

fn basename(rel_path: &str) -> &str {
    rel_path.rsplit('/').next().unwrap_or(rel_path)
}
