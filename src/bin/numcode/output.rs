use std::fmt::Display;

/// Console output honoring `--quiet` / `--verbose`.
pub struct Output {
    /// Suppress everything except errors.
    quiet: bool,
    /// Emit `DIAG:` lines on stderr.
    verbose: bool,
}

impl Output {
    /// Build from the global flags.
    pub const fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Result line on stdout.
    pub fn info_user(&self, msg: impl Display) {
        if !self.quiet {
            println!("{msg}");
        }
    }

    /// Warning on stderr.
    pub fn warn_user(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("WARN: {msg}");
        }
    }

    /// Error on stderr, never suppressed.
    pub fn error_user(msg: impl Display) {
        eprintln!("ERROR: {msg}");
    }

    /// Diagnostic on stderr, verbose only.
    pub fn info_diag(&self, msg: impl Display) {
        if self.verbose && !self.quiet {
            eprintln!("DIAG: {msg}");
        }
    }
}
