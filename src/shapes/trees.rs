//! Tree shapes: pine, broad, bonsai, cherry and stylized.
//! Trees stand on trunks several `|` wide that grow with size.

use super::{append_stalk, disc, pick, spaces, Glyphs};
use crate::colors::visible_len;
use rand::prelude::*;
use std::fmt;

const FOLIAGE: char = '#';
const PINE_NEEDLE: char = '^';
const BLOSSOM: char = '✿';
const BLOSSOM_ASCII: char = 'o';

const CANOPY_PATTERNS: [&str; 3] = [r"\/", r"\/ \/", r" \/ \/"];

const STYLIZED_ART: [&str; 11] = [
    r"           \\/ |    |/",
    r"        \\/ / \\||/  /_/___/_",
    r"         \\/   |/ \\/",
    r"    _\__\_\   |  /_____/ _",
    r"           \  | /          /",
    r"  __ _-----`  |{,-----------~",
    r"            \ }{",
    r"             }{{",
    r"             }}{",
    r"             {{{}",
    r"       , -=-~{ .-^- _",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeKind {
    Pine,
    Broad,
    Bonsai,
    Cherry,
    Stylized,
}

impl TreeKind {
    pub const ALL: [TreeKind; 5] = [
        TreeKind::Pine,
        TreeKind::Broad,
        TreeKind::Bonsai,
        TreeKind::Cherry,
        TreeKind::Stylized,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TreeKind::Pine => "pine",
            TreeKind::Broad => "broad",
            TreeKind::Bonsai => "bonsai",
            TreeKind::Cherry => "cherry",
            TreeKind::Stylized => "stylized",
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate the glyphs for one tree. `size` is clamped to at least 1.
pub fn generate(kind: TreeKind, size: u8, rng: &mut StdRng, unicode: bool) -> Glyphs {
    let s = size.max(1) as usize;
    match kind {
        TreeKind::Pine => pine(s),
        TreeKind::Broad => broad(s, FOLIAGE),
        TreeKind::Bonsai => broad(s.saturating_sub(1).max(1), FOLIAGE),
        TreeKind::Cherry => broad(s + 1, if unicode { BLOSSOM } else { BLOSSOM_ASCII }),
        TreeKind::Stylized => stylized(s + 1, rng),
    }
}

/// Three stacked triangles, each wider than the one above
fn pine(s: usize) -> Glyphs {
    let axis = 4 * s + 2;
    let mut lines = Glyphs::new();
    for layer in 0..3 {
        let rows = 1 + 2 * (layer + s);
        for row in 0..rows {
            let needles = PINE_NEEDLE.to_string().repeat(1 + 2 * row);
            lines.push(format!("{}{}", spaces(axis.saturating_sub(row)), needles));
        }
    }

    let trunk_w = 1 + s;
    append_stalk(&mut lines, axis.saturating_sub(trunk_w / 2), trunk_w, 1 + s);
    lines
}

/// Solid disc canopy on a trunk centered under it
fn broad(s: usize, leaf: char) -> Glyphs {
    let radius = 2 + s as i32;
    let reach = radius as f64 + 0.2;
    let mut lines = disc(radius, |_, _, d2| (d2 <= reach * reach).then_some(leaf));

    let trunk_w = 1 + 2 * s;
    let center = 2 * radius as usize;
    append_stalk(&mut lines, center.saturating_sub(trunk_w / 2), trunk_w, 1 + s);
    lines
}

/// Fixed art with jittered canopy rows on top and a scaled trunk below
fn stylized(s: usize, rng: &mut StdRng) -> Glyphs {
    let extra_rows = 2 * s;
    let variation = s;

    let mut lines = Glyphs::new();
    for r in 0..extra_rows {
        let pattern = pick(rng, &CANOPY_PATTERNS);
        let indent = 6usize.saturating_sub(r) + rng.gen_range(0..=variation);
        let repeats = 1 + r % (1 + variation);
        lines.push(format!("{}{}", spaces(indent), pattern.repeat(repeats)));
    }
    lines.extend(STYLIZED_ART.iter().map(|l| l.to_string()));

    let trunk_w = 1 + 2 * s;
    let trunk_h = 2 + s;
    let width = lines.iter().map(|l| visible_len(l)).max().unwrap_or(trunk_w);
    let trunk_col = (width / 2).saturating_sub(trunk_w / 2);

    if s >= 3 {
        lines.push(format!(
            "{}{}",
            spaces(trunk_col.saturating_sub(2)),
            "~".repeat(trunk_w + 4)
        ));
    }

    append_stalk(&mut lines, trunk_col, trunk_w, trunk_h);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trunk_width(lines: &Glyphs) -> usize {
        lines.last().unwrap().trim_start().chars().count()
    }

    #[test]
    fn every_kind_and_size_produces_rows() {
        for seed in 0..10 {
            for kind in TreeKind::ALL {
                for size in 0..=5 {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let lines = generate(kind, size, &mut rng, true);
                    assert!(!lines.is_empty(), "{kind} size {size}");
                    assert!(lines.iter().all(|l| !l.ends_with(' ')));
                }
            }
        }
    }

    #[test]
    fn pine_layers_grow_by_two() {
        let lines = pine(1);
        // layers of 3, 5 and 7 rows, then a 2-row trunk
        assert_eq!(lines.len(), 3 + 5 + 7 + 2);
        assert_eq!(lines[0], format!("{}^", spaces(6)));
        assert_eq!(lines[2], format!("{}^^^^^", spaces(4)));
        assert_eq!(lines[3], format!("{}^", spaces(6)));
        assert_eq!(lines[14], format!("{}{}", spaces(0), "^".repeat(13)));
        assert_eq!(lines[15], format!("{}||", spaces(5)));
    }

    #[test]
    fn trunks_scale_with_size() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in [TreeKind::Pine, TreeKind::Broad, TreeKind::Stylized] {
            let small = generate(kind, 1, &mut rng, true);
            let large = generate(kind, 3, &mut rng, true);
            assert!(trunk_width(&large) > trunk_width(&small), "{kind}");
            assert!(trunk_width(&small) >= 2, "{kind}");
        }
    }

    #[test]
    fn broad_trunk_is_centered() {
        let lines = broad(1, FOLIAGE);
        // radius 3: canopy center column 6, trunk 3 wide
        assert_eq!(lines[3], "#".repeat(13));
        assert_eq!(lines.last().unwrap(), &format!("{}|||", spaces(5)));
        assert_eq!(lines.len(), 7 + 2);
    }

    #[test]
    fn bonsai_is_smaller_broad_tree() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate(TreeKind::Bonsai, 2, &mut rng, true), broad(1, FOLIAGE));
        assert_eq!(generate(TreeKind::Bonsai, 1, &mut rng, true), broad(1, FOLIAGE));
    }

    #[test]
    fn cherry_tree_blossoms() {
        let mut rng = StdRng::seed_from_u64(0);
        let fancy = generate(TreeKind::Cherry, 1, &mut rng, true);
        assert!(fancy.iter().any(|l| l.contains(BLOSSOM)));
        assert!(fancy.iter().all(|l| !l.contains(FOLIAGE)));

        let plain = generate(TreeKind::Cherry, 1, &mut rng, false);
        assert!(plain.iter().all(|l| l.is_ascii()));
        assert!(plain.iter().any(|l| l.contains(BLOSSOM_ASCII)));
    }

    #[test]
    fn stylized_keeps_art_and_adds_canopy() {
        let mut rng = StdRng::seed_from_u64(4);
        let lines = stylized(2, &mut rng);
        // 4 canopy rows, 11 art rows, 4 trunk rows
        assert_eq!(lines.len(), 4 + 11 + 4);
        assert_eq!(lines[4], STYLIZED_ART[0]);
        assert_eq!(trunk_width(&lines), 5);
    }

    #[test]
    fn large_stylized_gets_root_line() {
        let mut rng = StdRng::seed_from_u64(4);
        let lines = stylized(3, &mut rng);
        let trunk_rows = 5;
        let root = &lines[lines.len() - trunk_rows - 1];
        assert_eq!(root.trim_start(), "~".repeat(11));
    }
}
