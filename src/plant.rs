use crate::shapes::flowers::{self, FlowerKind};
use crate::shapes::trees::{self, TreeKind};
use crate::shapes::{pick, Glyphs};
use rand::prelude::*;
use std::fmt;

/// Upper bound (inclusive) for per-plant sub-seeds
pub const SUB_SEED_MAX: u64 = (1 << 31) - 1;

/// Category and shape of a plant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlantKind {
    Flower(FlowerKind),
    Tree(TreeKind),
}

impl PlantKind {
    pub fn is_tree(self) -> bool {
        matches!(self, PlantKind::Tree(_))
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantKind::Flower(kind) => write!(f, "flower-{}", kind),
            PlantKind::Tree(kind) => write!(f, "tree-{}", kind),
        }
    }
}

/// A generated plant: its glyph rows and what it is
#[derive(Clone, Debug)]
pub struct Plant {
    pub lines: Glyphs,
    pub kind: PlantKind,
}

/// Draw the next sub-seed from the master source.
///
/// Exactly one draw per plant, before the plant does any work, so a plant's
/// own random consumption never shifts the plants after it.
pub fn next_sub_seed(master: &mut StdRng) -> u64 {
    master.gen_range(0..=SUB_SEED_MAX)
}

/// Isolated random source for one plant
pub fn sub_source(sub_seed: u64) -> StdRng {
    StdRng::seed_from_u64(sub_seed)
}

/// Pick a flower kind and generate it from `rng`
pub fn random_flower(size: u8, rng: &mut StdRng, unicode: bool) -> Plant {
    let kind = pick(rng, &FlowerKind::ALL);
    Plant {
        lines: flowers::generate(kind, size, rng, unicode),
        kind: PlantKind::Flower(kind),
    }
}

/// Pick a tree kind and generate it from `rng`
pub fn random_tree(size: u8, rng: &mut StdRng, unicode: bool) -> Plant {
    let kind = pick(rng, &TreeKind::ALL);
    Plant {
        lines: trees::generate(kind, size, rng, unicode),
        kind: PlantKind::Tree(kind),
    }
}
