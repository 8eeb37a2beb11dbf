//! Per-glyph coloring of plant rows.
//!
//! Stalks and trunks (runs of `|`) get one fixed color per run; every other
//! glyph draws a fresh color from the palette of its plant.

use crate::colors::{paint, tokens};
use crate::plant::PlantKind;
use crate::shapes::flowers::FlowerKind;
use crate::shapes::trees::TreeKind;
use crate::shapes::{pick, Glyphs, STEM};
use crossterm::style::Color;
use rand::prelude::*;

const CHERRY: [Color; 2] = [tokens::MAGENTA, tokens::BRIGHT_YELLOW];
const SUNFLOWER: [Color; 2] = [tokens::YELLOW, tokens::BRIGHT_YELLOW];
const FLOWER: [Color; 5] = [
    tokens::BRIGHT_GREEN,
    tokens::GREEN,
    tokens::BRIGHT_YELLOW,
    tokens::MAGENTA,
    tokens::RED,
];
const BONSAI: [Color; 1] = [tokens::BRIGHT_GREEN];
const TREE: [Color; 2] = [tokens::GREEN, tokens::BRIGHT_GREEN];

/// Fixed color for stalk and trunk runs
fn stem_color(kind: PlantKind) -> Color {
    if kind.is_tree() {
        tokens::BROWN
    } else {
        tokens::GREEN
    }
}

/// Palette petals, centers and foliage draw from
fn leaf_palette(kind: PlantKind) -> &'static [Color] {
    match kind {
        PlantKind::Flower(FlowerKind::Cherry) | PlantKind::Tree(TreeKind::Cherry) => &CHERRY,
        PlantKind::Flower(FlowerKind::Sunflower) => &SUNFLOWER,
        PlantKind::Flower(_) => &FLOWER,
        PlantKind::Tree(TreeKind::Bonsai) => &BONSAI,
        PlantKind::Tree(_) => &TREE,
    }
}

/// Color every non-space glyph of `lines`. Identity when `enabled` is false.
pub fn colorize(lines: Glyphs, kind: PlantKind, enabled: bool, rng: &mut StdRng) -> Glyphs {
    if !enabled {
        return lines;
    }

    let palette = leaf_palette(kind);
    lines
        .iter()
        .map(|line| colorize_line(line, kind, palette, rng))
        .collect()
}

fn colorize_line(line: &str, kind: PlantKind, palette: &[Color], rng: &mut StdRng) -> String {
    let mut out = String::with_capacity(line.len() * 8);
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ' ' {
            out.push(ch);
            continue;
        }

        if ch == STEM {
            let mut run = String::from(ch);
            while chars.peek() == Some(&STEM) {
                run.push(STEM);
                chars.next();
            }
            out.push_str(&paint(&run, stem_color(kind)));
            continue;
        }

        let color = if palette.len() == 1 {
            palette[0]
        } else {
            pick(rng, palette)
        };
        out.push_str(&paint(ch.encode_utf8(&mut [0; 4]), color));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{sgr, strip_ansi, visible_len, RESET};

    fn flower(kind: FlowerKind) -> PlantKind {
        PlantKind::Flower(kind)
    }

    #[test]
    fn disabled_is_identity() {
        let lines = vec!["  *".to_string(), "  |".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        let out = colorize(lines.clone(), flower(FlowerKind::Round), false, &mut rng);
        assert_eq!(out, lines);
    }

    #[test]
    fn stripping_restores_the_rows() {
        let lines = vec![" o ✿".to_string(), "#####".to_string(), "  |||".to_string(), String::new()];
        let mut rng = StdRng::seed_from_u64(7);
        let kind = PlantKind::Tree(TreeKind::Broad);
        let out = colorize(lines.clone(), kind, true, &mut rng);
        assert_eq!(out.len(), lines.len());
        for (colored, plain) in out.iter().zip(&lines) {
            assert_eq!(strip_ansi(colored), plain.as_str());
            assert_eq!(visible_len(colored), visible_len(plain));
        }
    }

    #[test]
    fn trunk_run_is_one_brown_unit() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = colorize(vec!["  |||".to_string()], PlantKind::Tree(TreeKind::Pine), true, &mut rng);
        assert_eq!(out[0], format!("  {}|||{}", sgr(tokens::BROWN), RESET));
    }

    #[test]
    fn flower_stalk_is_green() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = colorize(vec![" |".to_string()], flower(FlowerKind::Tulip), true, &mut rng);
        assert_eq!(out[0], format!(" {}|{}", sgr(tokens::GREEN), RESET));
    }

    #[test]
    fn bonsai_foliage_is_bright_green() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = colorize(vec!["##".to_string()], PlantKind::Tree(TreeKind::Bonsai), true, &mut rng);
        let cell = format!("{}#{}", sgr(tokens::BRIGHT_GREEN), RESET);
        assert_eq!(out[0], format!("{cell}{cell}"));
    }

    #[test]
    fn palettes_follow_category() {
        assert_eq!(leaf_palette(PlantKind::Tree(TreeKind::Cherry)), &CHERRY);
        assert_eq!(leaf_palette(flower(FlowerKind::Cherry)), &CHERRY);
        assert_eq!(leaf_palette(flower(FlowerKind::Sunflower)), &SUNFLOWER);
        assert_eq!(leaf_palette(flower(FlowerKind::Star)), &FLOWER);
        assert_eq!(leaf_palette(PlantKind::Tree(TreeKind::Stylized)), &TREE);
    }

    #[test]
    fn sunflower_petals_stay_yellow() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = colorize(vec!["OOOO@".to_string()], flower(FlowerKind::Sunflower), true, &mut rng);
        let yellow = sgr(tokens::YELLOW);
        let bright = sgr(tokens::BRIGHT_YELLOW);
        let rest = out[0].replace(yellow.as_ref(), "").replace(bright.as_ref(), "");
        assert_eq!(rest, format!("O{r}O{r}O{r}O{r}@{r}", r = RESET));
    }
}
