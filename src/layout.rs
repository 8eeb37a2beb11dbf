//! Arranging rendered plants into a text block.
//!
//! Rows may carry color codes, so every width here is a visible width.

use crate::colors::visible_len;
use crate::shapes::{spaces, Glyphs};

/// Visible size of one plant's rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub fn of(lines: &[String]) -> Self {
        Self {
            width: lines.iter().map(|l| visible_len(l)).max().unwrap_or(0),
            height: lines.len(),
        }
    }
}

/// Widest plant across the whole collection
pub fn max_width(plants: &[Glyphs]) -> usize {
    plants
        .iter()
        .map(|p| Footprint::of(p).width)
        .max()
        .unwrap_or(0)
}

/// Columns that fit `term_width`: `(term_width + gap) / (widest + gap)`, at least 1
pub fn auto_fit_columns(plants: &[Glyphs], term_width: usize, gap: usize) -> usize {
    let cell = (max_width(plants) + gap).max(1);
    ((term_width + gap) / cell).max(1)
}

/// Lay plants out in rows of `columns`, bottom-aligned on a shared ground line.
///
/// Each plant is padded on top to the tallest plant of its row and on the
/// right to its own width; columns are joined with `gap` spaces and every row
/// of plants is followed by one blank line.
pub fn layout_horizontal(plants: &[Glyphs], columns: usize, gap: usize) -> Vec<String> {
    let columns = columns.max(1);
    let joint = spaces(gap);
    let mut out = Vec::new();

    for group in plants.chunks(columns) {
        let footprints: Vec<Footprint> = group.iter().map(|p| Footprint::of(p)).collect();
        let row_height = footprints.iter().map(|f| f.height).max().unwrap_or(0);

        let padded: Vec<Vec<String>> = group
            .iter()
            .zip(&footprints)
            .map(|(lines, fp)| {
                let blank = spaces(fp.width);
                let mut block = vec![blank; row_height - fp.height];
                block.extend(lines.iter().map(|l| {
                    let pad = fp.width.saturating_sub(visible_len(l));
                    format!("{}{}", l, spaces(pad))
                }));
                block
            })
            .collect();

        for r in 0..row_height {
            let parts: Vec<&str> = padded.iter().map(|block| block[r].as_str()).collect();
            out.push(parts.join(joint.as_str()).trim_end().to_string());
        }
        out.push(String::new());
    }

    out
}

/// Stack plants one after another with `gap` blank lines between them
pub fn layout_vertical(plants: &[Glyphs], gap: usize) -> Vec<String> {
    let mut out = Vec::new();
    for (i, lines) in plants.iter().enumerate() {
        if i > 0 {
            out.extend(std::iter::repeat(String::new()).take(gap));
        }
        out.extend(lines.iter().cloned());
    }
    out
}
