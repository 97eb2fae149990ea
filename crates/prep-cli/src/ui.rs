use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Terminal-dependent rendering choices, fixed once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let columns = std::env::var("COLUMNS").ok();

    let _ = UI_PREFS.set(UiPrefs {
        table_color: wants_color(flags, is_tty, no_color),
        term_width: parse_width(columns.as_deref()),
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

fn wants_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    is_tty && !no_color && !flags.quiet && flags.format == OutputFormat::Table
}

/// Widths under 40 columns are ignored; tables render unconstrained instead.
fn parse_width(columns: Option<&str>) -> Option<usize> {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40)
}
