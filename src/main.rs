/*!
 * Command-line interface for dirsnap
 */

use std::fs;
use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use dirsnap::clipboard;
use dirsnap::config::{Args, Config};
use dirsnap::contents::ContentCollector;
use dirsnap::rules::{self, RuleSet, IGNORE_FILE};
use dirsnap::tree::TreeRenderer;
use dirsnap::writer::{Snapshot, SnapshotWriter};

fn main() -> dirsnap::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        generate(shell, &mut cmd, "dirsnap", &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration; a bad start path is the one
    // fatal error of the whole run.
    let mut config = Config::from_args(args);
    config.validate()?;
    config.target_dir = fs::canonicalize(&config.target_dir)?;

    // Resolve the repository anchor and build the combined rule set
    let anchor = rules::find_repo_root(&config.target_dir);
    let ruleset = RuleSet::load(
        &anchor,
        &config.ignore_patterns,
        config.ignore_notebooks,
        config.respect_gitignore,
    );

    // Diagnostics go to stderr, never interleaved with the snapshot
    if !config.respect_gitignore {
        eprintln!("{} filtering disabled", IGNORE_FILE);
    } else if ruleset.loaded_ignore_file() {
        eprintln!(
            "Loaded {} rule(s) from: {}",
            ruleset.root_rule_count(),
            ruleset.anchor().join(IGNORE_FILE).display()
        );
    } else {
        eprintln!("No {} found at: {}", IGNORE_FILE, ruleset.anchor().display());
    }

    // Two independent synchronous passes: structure, then contents
    let structure = TreeRenderer::new(&config.target_dir, config.max_depth, &ruleset).render();
    let contents = if config.include_contents {
        let text = ContentCollector::new(
            &config.target_dir,
            config.max_depth,
            &ruleset,
            &config.include_patterns,
        )
        .collect();
        (!text.is_empty()).then_some(text)
    } else {
        None
    };

    let snapshot = Snapshot {
        structure,
        contents,
    };
    let writer = SnapshotWriter::new(config.clone());
    let output = writer.render(&snapshot);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;

    // Clipboard absence degrades to a warning, never a failed run
    if config.clip {
        match clipboard::copy_to_clipboard(&output) {
            Ok(()) => eprintln!("Copied snapshot to clipboard"),
            Err(e) => eprintln!("Warning: clipboard copy skipped: {}", e),
        }
    }

    Ok(())
}
