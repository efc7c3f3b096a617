/*!
 * Clipboard support for dirsnap
 *
 * Detects an available system clipboard mechanism and pipes text to it.
 * The clipboard is an optional collaborator: when none is found the caller
 * is expected to warn and continue, never to fail the run.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the provider command
    #[error("Clipboard command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Known clipboard mechanisms, tried in the order returned by
/// [`candidate_providers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    Tmux,
    MacOs,
    Wsl,
    Wayland,
    Xsel,
    Xclip,
    Termux,
}

impl Provider {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::MacOs => ("pbcopy", &[]),
            Self::Wsl => ("clip.exe", &[]),
            Self::Wayland => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::Termux => ("termux-clipboard-set", &[]),
        }
    }

    fn available(self) -> bool {
        match self {
            Self::Tmux => command_exists("tmux") && in_tmux_session(),
            other => command_exists(other.command().0),
        }
    }
}

/// Copy text to the system clipboard.
///
/// Tries each candidate provider for the current platform in preference
/// order and pipes `text` over stdin to the first available one.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = candidate_providers()
        .into_iter()
        .find(|p| p.available())
        .ok_or(ClipboardError::NoClipboardFound)?;

    let (cmd, args) = provider.command();
    run_provider(cmd, args, text)
}

/// Check if a command exists on the system.
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for path in paths.split(':') {
            if Path::new(path).join(command).exists() {
                return true;
            }
        }
    }

    // Fall back to probing the command directly.
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Providers worth trying on this platform, in preference order.
/// tmux comes first when running inside a session.
fn candidate_providers() -> Vec<Provider> {
    let mut providers = vec![Provider::Tmux];

    if cfg!(target_os = "macos") {
        providers.push(Provider::MacOs);
    } else if cfg!(target_os = "windows") {
        providers.push(Provider::Wsl);
    } else if cfg!(target_os = "android") {
        providers.push(Provider::Termux);
    } else if cfg!(target_os = "linux") {
        if env::var("WSL_DISTRO_NAME").is_ok() {
            providers.push(Provider::Wsl);
        }
        providers.push(Provider::Wayland);
        providers.push(Provider::Xsel);
        providers.push(Provider::Xclip);
    }

    providers
}

fn in_tmux_session() -> bool {
    env::var("TMUX").is_ok()
}

/// Spawn the provider command and feed it `text` over stdin.
fn run_provider(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to spawn {cmd}")))?;

    let stdin = child
        .stdin
        .as_mut()
        .ok_or_else(|| ClipboardError::CommandFailed(format!("failed to open stdin for {cmd}")))?;
    stdin
        .write_all(text.as_bytes())
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to write to {cmd}")))?;

    let status = child
        .wait()
        .map_err(|_| ClipboardError::CommandFailed(format!("failed to wait for {cmd}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{cmd} exited with status: {status}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("ls"));
        assert!(command_exists("echo"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[test]
    fn test_candidate_providers_start_with_tmux() {
        let providers = candidate_providers();
        assert_eq!(providers.first(), Some(&Provider::Tmux));
    }

    #[test]
    #[ignore] // Requires a running tmux session
    fn test_tmux_clipboard_roundtrip() {
        if !command_exists("tmux") || env::var("TMUX").is_err() {
            return;
        }

        let test_text = "dirsnap clipboard test";
        let (cmd, args) = Provider::Tmux.command();
        run_provider(cmd, args, test_text).expect("failed to copy to tmux buffer");

        let output = Command::new("tmux")
            .args(["show-buffer"])
            .output()
            .expect("failed to run tmux show-buffer");
        let buffer = String::from_utf8_lossy(&output.stdout);
        assert_eq!(buffer.trim_end(), test_text);
    }
}
