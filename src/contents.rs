/*!
 * File content collection
 *
 * Walks the tree a second time, independently of the structure pass, and
 * emits a labeled content block for every non-ignored file that passes the
 * inclusion filter. The filter narrows this section only; the structural
 * tree never consults it.
 */

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::matcher;
use crate::rules::{relative_to, RuleSet};

/// Collector for the "File Contents" section.
pub struct ContentCollector<'a> {
    start_dir: &'a Path,
    max_depth: i32,
    rules: &'a RuleSet,
    include_patterns: &'a [String],
}

impl<'a> ContentCollector<'a> {
    pub fn new(
        start_dir: &'a Path,
        max_depth: i32,
        rules: &'a RuleSet,
        include_patterns: &'a [String],
    ) -> Self {
        Self {
            start_dir,
            max_depth,
            rules,
            include_patterns,
        }
    }

    /// Collect content blocks for the whole tree.
    ///
    /// The result is either empty or starts with a newline followed by the
    /// first separator line, ready to append after a section title.
    pub fn collect(&self) -> String {
        self.collect_dir(self.start_dir, 0)
    }

    fn collect_dir(&self, dir: &Path, depth: usize) -> String {
        // Unlike the structure pass, this one stops before descending past
        // the limit; no header has to be shown for an unvisited level.
        if self.max_depth != -1 && depth as i32 >= self.max_depth {
            return String::new();
        }

        let (files, dirs) = self.list_children(dir);
        let mut out = Vec::new();

        for path in &files {
            if !self.include_matches(path) {
                continue;
            }
            let label = relative_to(path, self.start_dir)
                .unwrap_or_else(|| path.display().to_string());
            out.push(format!("\n--- {label} ---"));
            out.push(read_file_text(path));
        }

        for path in &dirs {
            let subtree = self.collect_dir(path, depth + 1);
            if !subtree.is_empty() {
                out.push(subtree);
            }
        }

        out.join("\n")
    }

    /// Immediate non-ignored children, files then directories, sorted.
    /// Listing failures degrade to an empty level in this pass; the
    /// structure section is where they are surfaced.
    fn list_children(&self, dir: &Path) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            let is_dir = entry.file_type().is_dir();
            if self.rules.is_ignored(entry.path(), is_dir, self.start_dir) {
                continue;
            }
            if is_dir {
                dirs.push(entry.into_path());
            } else {
                files.push(entry.into_path());
            }
        }

        (files, dirs)
    }

    fn include_matches(&self, path: &Path) -> bool {
        if self.include_patterns.is_empty() {
            return true;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.include_patterns
            .iter()
            .any(|p| matcher::matches_basename_ci(&name, p))
    }
}

/// Read a file as text, substituting U+FFFD for invalid UTF-8.
///
/// Any other read failure becomes an inline annotation for this file only;
/// the rest of the traversal is unaffected.
fn read_file_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => format!(
            "<<Error reading {}: {}>>",
            path.file_name().unwrap_or_default().to_string_lossy(),
            e
        ),
    }
}
