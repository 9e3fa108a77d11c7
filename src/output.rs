//! Output control for the langtour CLI
//!
//! Stdout carries the lesson transcript and nothing else; status messages go
//! to stderr and are gated by a global quiet flag. Keeping the two streams
//! separate is what makes `--json` output safe to pipe into other tools.

use std::sync::atomic::{AtomicBool, Ordering};


/// How the transcript is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain lesson text, exactly as the original walkthrough prints it.
    Text,
    /// One pretty-printed JSON document describing the whole transcript.
    Json,
}

impl OutputFormat {
    /// Map the CLI's `--json` flag onto a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Global quiet mode flag
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable quiet mode (suppresses stderr status output)
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
}

/// Check if quiet mode is enabled
pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Print a status message to stderr unless quiet mode is on.
/// Stderr keeps the transcript on stdout clean for piping and `--json`.
pub fn print_info(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a warning to stderr unless quiet mode is on.
#[allow(dead_code)] // Used by warn_print! macro
pub fn print_warn(args: std::fmt::Arguments<'_>) {
    if !is_quiet() {
        eprintln!("{}", args);
    }
}

/// Print a status message unless quiet mode is on
#[macro_export]
macro_rules! info_print {
    ($($arg:tt)*) => {
        $crate::output::print_info(format_args!($($arg)*));
    };
}

/// Print a warning unless quiet mode is on
#[macro_export]
macro_rules! warn_print {
    ($($arg:tt)*) => {
        $crate::output::print_warn(format_args!($($arg)*));
    };
}
