use crossterm::terminal::size;
use crossterm::tty::IsTty;
use std::env;
use std::io::{self, stdout, Write};

/// Width used when the terminal cannot be queried
pub const FALLBACK_WIDTH: usize = 80;

/// Current terminal width in columns.
///
/// A positive `COLUMNS` wins, then the window size, then `FALLBACK_WIDTH`.
pub fn width() -> usize {
    if let Some(cols) = columns_env(env::var("COLUMNS").ok().as_deref()) {
        return cols;
    }
    match size() {
        Ok((w, _)) if w > 0 => w as usize,
        _ => FALLBACK_WIDTH,
    }
}

fn columns_env(value: Option<&str>) -> Option<usize> {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&c| c > 0)
}

/// Whether stdout is an interactive terminal
pub fn stdout_is_tty() -> bool {
    stdout().is_tty()
}

/// Make sure the console interprets SGR sequences; false if it cannot
#[cfg(windows)]
pub fn enable_ansi() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
pub fn enable_ansi() -> bool {
    true
}

/// Write the finished rows to stdout as one block ending in a newline
pub fn print_block(lines: &[String]) -> io::Result<()> {
    let mut out = stdout().lock();
    write_block(&mut out, lines)?;
    out.flush()
}

pub fn write_block<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    out.write_all(lines.join("\n").as_bytes())?;
    out.write_all(b"\n")
}
