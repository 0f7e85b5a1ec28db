//! Presentation choices that depend on the terminal, fixed once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored and tables render unbounded.
const MIN_TABLE_WIDTH: usize = 40;

/// What the process can observe about where its output goes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.trim().parse().ok()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// ANSI colours on action and state cells of `--format table`.
    pub table_color: bool,
    /// Spinner on stderr while inputs load.
    pub spinner: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, terminal: Terminal) -> Self {
        let interactive = terminal.stdout_tty && !flags.quiet;
        Self {
            table_color: interactive && flags.format == OutputFormat::Table && !terminal.no_color,
            // Debug logs share stderr with the spinner.
            spinner: interactive && !flags.verbose && flags.format != OutputFormat::Json,
            term_width: terminal.columns.filter(|width| *width >= MIN_TABLE_WIDTH),
        }
    }
}

static PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs::resolve(flags, Terminal::detect());
    tracing::trace!(?prefs, "ui preferences resolved");
    let _ = PREFS.set(prefs);
}

/// Preferences from [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    PREFS.get().copied().unwrap_or_default()
}
