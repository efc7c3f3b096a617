/*!
 * Snapshot assembly and output
 */

use std::io::{self, Write};

use crate::config::Config;
use crate::utils::format_depth;

/// The two rendered sections of one run.
pub struct Snapshot {
    /// Rendered directory tree.
    pub structure: String,
    /// Content blocks, when requested and non-empty.
    pub contents: Option<String>,
}

/// Formats the header block and sections into the final output text.
pub struct SnapshotWriter {
    config: Config,
}

impl SnapshotWriter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the complete snapshot: header block, structure section, and
    /// the contents section when present. Output is a pure function of the
    /// configuration and the snapshot, so repeat runs over an unchanged
    /// tree are byte-identical.
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Target directory: {}\n",
            self.config.target_dir.display()
        ));
        out.push_str(&format!(
            "Max depth: {}\n",
            format_depth(self.config.max_depth)
        ));
        if !self.config.ignore_patterns.is_empty() {
            out.push_str(&format!(
                "Ignore patterns: {}\n",
                self.config.ignore_patterns.join(", ")
            ));
        }
        if !self.config.include_patterns.is_empty() {
            out.push_str(&format!(
                "Include patterns: {}\n",
                self.config.include_patterns.join(", ")
            ));
        }

        out.push('\n');
        out.push_str("Directory Structure:\n");
        out.push_str(&snapshot.structure);
        out.push('\n');

        if let Some(contents) = &snapshot.contents {
            out.push_str("\nFile Contents:");
            // Content blocks carry their own leading newlines.
            out.push_str(contents);
            out.push('\n');
        }

        out
    }

    /// Write the rendered snapshot to `out`.
    pub fn write<W: Write>(&self, out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
        out.write_all(self.render(snapshot).as_bytes())
    }
}
