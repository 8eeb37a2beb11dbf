//! Flower shapes: round, star, tulip, sunflower and cherry blossom.
//! Flower stalks are always a single `|` wide.

use super::{append_stalk, disc, pick, spaces, Glyphs};
use rand::prelude::*;
use std::fmt;

const PETALS: [char; 8] = ['*', 'o', '@', 'O', '0', '+', 'x', 'X'];
const CENTERS: [char; 4] = ['@', '*', 'O', '.'];
const TULIP_LEAVES: [&str; 4] = ["<>", "/\\", "()", "~~"];
const SUNFLOWER_PETALS: [char; 4] = ['0', 'O', '*', '@'];
const SUNFLOWER_CENTERS: [char; 3] = ['@', '0', 'O'];
const CHERRY_PETALS: [char; 3] = ['o', '✿', '❀'];
const CHERRY_PETALS_ASCII: [char; 2] = ['o', '*'];
const CHERRY_CENTERS: [char; 2] = ['.', '@'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowerKind {
    Round,
    Star,
    Tulip,
    Sunflower,
    Cherry,
}

impl FlowerKind {
    pub const ALL: [FlowerKind; 5] = [
        FlowerKind::Round,
        FlowerKind::Star,
        FlowerKind::Tulip,
        FlowerKind::Sunflower,
        FlowerKind::Cherry,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FlowerKind::Round => "round",
            FlowerKind::Star => "star",
            FlowerKind::Tulip => "tulip",
            FlowerKind::Sunflower => "sunflower",
            FlowerKind::Cherry => "cherry",
        }
    }
}

impl fmt::Display for FlowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate the glyphs for one flower. `size` is clamped to at least 1.
pub fn generate(kind: FlowerKind, size: u8, rng: &mut StdRng, unicode: bool) -> Glyphs {
    let s = size.max(1) as usize;
    match kind {
        FlowerKind::Round => round(s, rng),
        FlowerKind::Star => star(s, rng),
        FlowerKind::Tulip => tulip(s, rng),
        FlowerKind::Sunflower => sunflower(s, rng),
        FlowerKind::Cherry => cherry(s, rng, unicode),
    }
}

/// Fuzzy disc: each cell gets its own noise so the rim comes out ragged
fn round(s: usize, rng: &mut StdRng) -> Glyphs {
    let radius = 1 + s as i32;
    let petal = pick(rng, &PETALS);
    let center = pick(rng, &CENTERS);

    let mut lines = disc(radius, |x, y, d2| {
        let noise = rng.gen::<f64>() * 0.6;
        let reach = radius as f64 + 0.25 - noise;
        if d2 > reach * reach {
            None
        } else if x.abs() <= 1 && y.abs() <= 1 {
            Some(center)
        } else {
            Some(petal)
        }
    });

    let stem_height = rng.gen_range(1 + s..=2 + 2 * s);
    append_stalk(&mut lines, 2 * radius as usize, 1, stem_height);
    lines
}

fn star(s: usize, rng: &mut StdRng) -> Glyphs {
    let petal = pick(rng, &PETALS);
    let center = pick(rng, &CENTERS);
    let mut lines = vec![
        format!("{}{}", spaces(2 * s), petal),
        format!("{}{}{}{}", spaces(s), petal, spaces(2 * s - 1), petal),
        format!("{}{}{}", petal, spaces(4 * s - 1), petal),
        format!("{}{}{}{}", spaces(s), petal, spaces(2 * s - 1), petal),
        format!("{}{}", spaces(2 * s), center),
    ];
    let stem_height = 1 + s + rng.gen_range(0..=s);
    append_stalk(&mut lines, 2 * s, 1, stem_height);
    lines
}

fn tulip(s: usize, rng: &mut StdRng) -> Glyphs {
    let petal = pick(rng, &PETALS);
    let center = pick(rng, &CENTERS);
    let mut lines = vec![
        format!("{}{}{}{}", spaces(1 + s), petal, spaces(s), petal),
        format!(
            "{}{}{}{}{}{}",
            spaces(s),
            petal,
            spaces(1 + s),
            center,
            spaces(s),
            petal
        ),
        format!("{}{}{}", petal, spaces(3 + s), petal),
    ];
    let leaves = pick(rng, &TULIP_LEAVES);
    lines.push(format!("{}{}", spaces(1 + s), leaves));
    let stem_height = 1 + s + rng.gen_range(0..=2);
    append_stalk(&mut lines, 2 + s, 1, stem_height);
    lines
}

fn sunflower(s: usize, rng: &mut StdRng) -> Glyphs {
    let petal = pick(rng, &SUNFLOWER_PETALS);
    let center = pick(rng, &SUNFLOWER_CENTERS);
    let mut lines = vec![
        format!("{}{}", spaces(2 + s), petal.to_string().repeat(3 + s)),
        format!(
            "{}{}{}{}{}{}",
            spaces(1 + s),
            petal,
            spaces(1 + s),
            center,
            spaces(1 + s),
            petal
        ),
        format!("{}{}{}", petal, spaces(3 + s), petal),
    ];
    append_stalk(&mut lines, 2 + s, 1, 2 + s);
    lines
}

fn cherry(s: usize, rng: &mut StdRng, unicode: bool) -> Glyphs {
    let petal = if unicode {
        pick(rng, &CHERRY_PETALS)
    } else {
        pick(rng, &CHERRY_PETALS_ASCII)
    };
    let center = pick(rng, &CHERRY_CENTERS);
    let mut lines = vec![
        format!("{}{} {}", spaces(1 + s), petal, petal),
        format!("{}{}{}{}", spaces(s), petal, center, petal),
        format!("{}{}{}", petal, spaces(1 + s), petal),
    ];
    append_stalk(&mut lines, 2 + s, 1, 1 + s);
    lines
}
