/*!
 * Ignore rule loading and evaluation
 *
 * Two independent rule lists feed every ignore decision: patterns parsed
 * from the repository-root `.gitignore`, matched against paths relative to
 * the resolved repository anchor, and custom patterns (CLI-supplied plus
 * the built-in defaults), matched against paths relative to the traversal
 * start directory. The two bases are never mixed.
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::matcher;
use crate::utils::DEFAULT_IGNORE;

/// Marker subdirectory identifying a repository root.
const REPO_MARKER: &str = ".git";

/// Name of the ignore file read at the repository anchor.
pub const IGNORE_FILE: &str = ".gitignore";

/// Find the repository anchor for a start directory.
///
/// Walks upward from `start_dir` looking for a `.git` subdirectory and
/// returns the first ancestor containing one. If the filesystem root is
/// reached without a match, the original directory is returned unchanged.
pub fn find_repo_root(start_dir: &Path) -> PathBuf {
    let mut current = start_dir.to_path_buf();
    loop {
        if current.join(REPO_MARKER).is_dir() {
            return current;
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return start_dir.to_path_buf(),
        }
    }
}

/// A single parsed ignore pattern.
///
/// Immutable once parsed. `dir_only` marks a trailing-slash pattern and
/// `rooted` marks a pattern containing a separator, which can only match
/// the full relative path (a basename hit is impossible for those).
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    pattern: String,
    dir_only: bool,
    rooted: bool,
}

impl IgnoreRule {
    pub fn new(pattern: &str) -> Self {
        let dir_only = pattern.ends_with('/');
        let rooted = pattern.trim_end_matches('/').contains('/');
        Self {
            pattern: pattern.to_string(),
            dir_only,
            rooted,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn dir_only(&self) -> bool {
        self.dir_only
    }

    pub fn rooted(&self) -> bool {
        self.rooted
    }

    fn matches(&self, rel_path: &str, is_dir: bool) -> bool {
        matcher::matches(rel_path, &self.pattern, is_dir)
    }
}

/// The combined rule set used by both traversals.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Repository anchor; base for `root_rules` matching.
    anchor: PathBuf,
    /// Rules parsed from the ignore file at the anchor, in file order.
    root_rules: Vec<IgnoreRule>,
    /// CLI-supplied and default rules, matched relative to the start dir.
    custom_rules: Vec<IgnoreRule>,
    /// Whether an ignore file was found and parsed.
    loaded_ignore_file: bool,
}

impl RuleSet {
    /// Build the rule set for one run.
    ///
    /// Reads `<anchor>/.gitignore` when `use_ignore_file` is set; a missing
    /// file is not an error and simply yields no root rules. Custom patterns
    /// are extended with the built-in defaults, and with `*.ipynb` when
    /// notebook filtering is requested.
    pub fn load(
        anchor: &Path,
        custom_patterns: &[String],
        ignore_notebooks: bool,
        use_ignore_file: bool,
    ) -> Self {
        let mut root_rules = Vec::new();
        let mut loaded_ignore_file = false;

        if use_ignore_file {
            if let Ok(text) = fs::read_to_string(anchor.join(IGNORE_FILE)) {
                root_rules = parse_ignore_lines(&text);
                loaded_ignore_file = true;
            }
        }

        let mut custom_rules: Vec<IgnoreRule> =
            custom_patterns.iter().map(|p| IgnoreRule::new(p)).collect();
        if ignore_notebooks {
            custom_rules.push(IgnoreRule::new("*.ipynb"));
        }
        custom_rules.extend(DEFAULT_IGNORE.iter().map(|p| IgnoreRule::new(p)));

        Self {
            anchor: anchor.to_path_buf(),
            root_rules,
            custom_rules,
            loaded_ignore_file,
        }
    }

    /// An empty rule set anchored at `anchor` (used by tests).
    pub fn empty(anchor: &Path) -> Self {
        Self {
            anchor: anchor.to_path_buf(),
            root_rules: Vec::new(),
            custom_rules: Vec::new(),
            loaded_ignore_file: false,
        }
    }

    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    pub fn loaded_ignore_file(&self) -> bool {
        self.loaded_ignore_file
    }

    pub fn root_rule_count(&self) -> usize {
        self.root_rules.len()
    }

    /// Decide whether `path` is excluded from the snapshot.
    ///
    /// Pass one checks ignore-file rules against the path relative to the
    /// repository anchor; pass two checks custom/default rules against the
    /// path relative to `start_dir`. Either pass matching short-circuits.
    /// A path outside the anchor skips pass one.
    pub fn is_ignored(&self, path: &Path, is_dir: bool, start_dir: &Path) -> bool {
        if let Some(rel) = relative_to(path, &self.anchor) {
            if self.root_rules.iter().any(|r| r.matches(&rel, is_dir)) {
                return true;
            }
        }

        if let Some(rel) = relative_to(path, start_dir) {
            if self.custom_rules.iter().any(|r| r.matches(&rel, is_dir)) {
                return true;
            }
        }

        false
    }
}

/// Parse ignore-file text into rules, skipping blanks and `#` comments.
///
/// Order is preserved. `!`-prefixed negation lines are kept as literal
/// patterns; un-ignoring is not supported.
pub fn parse_ignore_lines(text: &str) -> Vec<IgnoreRule> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(IgnoreRule::new)
        .collect()
}

/// Slash-separated form of `path` relative to `base`, or `None` when the
/// path lies outside `base`.
pub(crate) fn relative_to(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let text = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
