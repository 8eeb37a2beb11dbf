//! Plant shape generators
//!
//! Every generator is a pure function of its size, the random source and the
//! unicode flag. Output rows are top to bottom, ragged, with trailing spaces
//! trimmed and leading spaces kept for alignment.

pub mod flowers;
pub mod trees;

use rand::prelude::*;

/// Ordered rows of one plant's rendering
pub type Glyphs = Vec<String>;

/// Stalk and trunk character; the colorizer keys on runs of it
pub const STEM: char = '|';

/// Pick one entry of a non-empty constant palette
pub(crate) fn pick<T: Copy>(rng: &mut StdRng, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

pub(crate) fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Rasterize a disc stretched 2:1 horizontally to offset the character aspect.
///
/// Scans `y` in `-r..=r` and `x` in `-2r..=2r`; `cell` receives `(x, y, d2)`
/// with `d2 = (x/2)^2 + y^2` and returns the glyph to place, if any. Rows that
/// end up empty are dropped from the top and bottom of the result.
pub(crate) fn disc<F>(radius: i32, mut cell: F) -> Glyphs
where
    F: FnMut(i32, i32, f64) -> Option<char>,
{
    let mut lines: Glyphs = Vec::with_capacity((2 * radius + 1) as usize);
    for y in -radius..=radius {
        let mut row = String::new();
        for x in -2 * radius..=2 * radius {
            let dx = x as f64 / 2.0;
            let d2 = dx * dx + (y * y) as f64;
            row.push(cell(x, y, d2).unwrap_or(' '));
        }
        lines.push(row.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);
    lines
}

/// Append `height` rows of a `width`-wide stalk starting at column `col`
pub(crate) fn append_stalk(lines: &mut Glyphs, col: usize, width: usize, height: usize) {
    let row = format!("{}{}", spaces(col), STEM.to_string().repeat(width));
    lines.extend(std::iter::repeat(row).take(height));
}
