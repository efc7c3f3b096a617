/*!
 * Directory structure rendering
 *
 * Produces the connector-annotated tree listing. The walk is depth-first
 * and deterministic: at every level files come first, then directories,
 * each group in ascending name order. A second, independent walk produces
 * the contents section (see `contents`).
 */

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::rules::RuleSet;

const BRANCH: &str = "├─";
const TERMINAL: &str = "└─";

/// Renderer for the "Directory Structure" section.
pub struct TreeRenderer<'a> {
    start_dir: &'a Path,
    max_depth: i32,
    rules: &'a RuleSet,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(start_dir: &'a Path, max_depth: i32, rules: &'a RuleSet) -> Self {
        Self {
            start_dir,
            max_depth,
            rules,
        }
    }

    /// Render the tree rooted at the start directory.
    pub fn render(&self) -> String {
        self.render_dir(self.start_dir, 0, TERMINAL)
    }

    fn render_dir(&self, dir: &Path, depth: usize, connector: &str) -> String {
        let indent = "  ".repeat(depth);
        let label = if depth == 0 {
            self.start_dir.display().to_string()
        } else {
            dir.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned()
        };
        let mut lines = vec![format!("{indent}{connector} {label}/")];

        // At the limit the directory header alone is still emitted.
        if self.max_depth != -1 && depth as i32 >= self.max_depth {
            return lines.join("\n");
        }

        let (files, dirs) = match self.list_children(dir) {
            Ok(children) => children,
            Err(note) => {
                lines.push(format!("{indent}  {BRANCH} {note}"));
                return lines.join("\n");
            }
        };

        for (idx, path) in files.iter().enumerate() {
            let conn = if idx == files.len() - 1 && dirs.is_empty() {
                TERMINAL
            } else {
                BRANCH
            };
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            lines.push(format!("{indent}  {conn} {name}"));
        }

        for (idx, path) in dirs.iter().enumerate() {
            let conn = if idx == dirs.len() - 1 { TERMINAL } else { BRANCH };
            lines.push(self.render_dir(path, depth + 1, conn));
        }

        lines.join("\n")
    }

    /// List the immediate non-ignored children of `dir`, files and
    /// directories separately, each sorted by name.
    ///
    /// A failure to list the directory itself (permission denied, or the
    /// directory vanishing between discovery and listing) is returned as a
    /// placeholder annotation; per-entry stat failures skip that entry.
    fn list_children(&self, dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), String> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            match entry {
                Ok(e) => {
                    let is_dir = e.file_type().is_dir();
                    if self.rules.is_ignored(e.path(), is_dir, self.start_dir) {
                        continue;
                    }
                    if is_dir {
                        dirs.push(e.into_path());
                    } else {
                        files.push(e.into_path());
                    }
                }
                Err(err) if err.path() == Some(dir) => {
                    let note = match err.io_error().map(io::Error::kind) {
                        Some(io::ErrorKind::PermissionDenied) => "[Permission Denied]",
                        Some(io::ErrorKind::NotFound) => "[Not Found]",
                        _ => "[Unreadable]",
                    };
                    return Err(note.to_string());
                }
                Err(_) => {}
            }
        }

        Ok((files, dirs))
    }
}
