//! Color tokens and ANSI escape handling for glyph rows.

use crossterm::style::Color;
use std::borrow::Cow;

/// SGR sequence that ends every colored glyph
pub const RESET: &str = "\x1b[0m";

/// Fixed color tokens used by the colorizer
pub mod tokens {
    use crossterm::style::Color;

    pub const RED: Color = Color::DarkRed;
    pub const GREEN: Color = Color::DarkGreen;
    pub const YELLOW: Color = Color::DarkYellow;
    pub const MAGENTA: Color = Color::DarkMagenta;
    pub const BRIGHT_YELLOW: Color = Color::Yellow;
    pub const BRIGHT_GREEN: Color = Color::Green;
    pub const BROWN: Color = Color::AnsiValue(94);
}

/// SGR foreground sequence for a color, matching classic 16-color codes
pub fn sgr(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Rgb { r, g, b } => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::AnsiValue(v) => return Cow::Owned(format!("\x1b[38;5;{}m", v)),
        // Standard colors (0-7)
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        // Bright colors (8-15)
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => RESET,
    };
    Cow::Borrowed(code)
}

/// Wrap a glyph (or run of glyphs) in a color, reset-terminated
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{}{}", sgr(color), text, RESET)
}

/// Strip SGR color sequences (`ESC [ params m`) from a row.
///
/// Rows without any escape byte are returned borrowed.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' || chars.peek() != Some(&'[') {
            out.push(ch);
            continue;
        }

        // Look ahead for `[0-9;]*m`; anything else is kept verbatim
        let mut seq = String::from("\x1b[");
        chars.next();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() || next == ';' {
                seq.push(next);
                chars.next();
            } else {
                if next == 'm' {
                    chars.next();
                    terminated = true;
                }
                break;
            }
        }
        if !terminated {
            out.push_str(&seq);
        }
    }

    Cow::Owned(out)
}

/// Printable length of a row: character count once color codes are removed
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
