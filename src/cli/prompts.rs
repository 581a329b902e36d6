//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::Strength;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Report the strength of a generation run. Suppressed in quiet mode.
///
/// For a batch the label shown is the weakest in the batch.
pub fn strength(label: Strength, batch: bool) {
    if quiet::enabled() {
        return;
    }
    if batch {
        eprintln!("Weakest strength: {label}");
    } else {
        eprintln!("Strength: {label}");
    }
}

/// Print clipboard copied confirmation. Suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("Copied to clipboard.");
    }
}

/// Print clipboard error. Never suppressed; a failed copy must not look
/// like a success.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to
/// terminal output, false to abort. Quiet/non-interactive mode falls back
/// silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
