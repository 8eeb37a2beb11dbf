use crate::colorize::colorize;
use crate::config::{ColorMode, GardenConfig, LayoutMode};
use crate::layout::{auto_fit_columns, layout_horizontal, layout_vertical};
use crate::plant::{next_sub_seed, random_flower, random_tree, sub_source};
use crate::shapes::Glyphs;
use crate::terminal;
use rand::prelude::*;
use std::io;

/// Generate the garden and print it to stdout
pub fn run(config: GardenConfig) -> io::Result<()> {
    let seed = config.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    });

    let mut color = match config.color {
        ColorMode::On => true,
        ColorMode::Off => false,
        ColorMode::Auto => terminal::stdout_is_tty(),
    };
    if color && !terminal::enable_ansi() {
        eprintln!("warning: console does not support ANSI colors, printing without color");
        color = false;
    }

    let plants = grow(&config, seed, color);
    let lines = match config.layout {
        LayoutMode::Vertical => layout_vertical(&plants, config.gap),
        LayoutMode::Horizontal => {
            let cols = if config.auto_fit {
                auto_fit_columns(&plants, terminal::width(), config.gap)
            } else {
                config.cols
            };
            layout_horizontal(&plants, cols, config.gap * 2)
        }
    };

    terminal::print_block(&lines)
}

/// Flowers first, then trees; each plant owns a sub-source drawn from the master
pub fn grow(config: &GardenConfig, seed: u64, color: bool) -> Vec<Glyphs> {
    let mut master = StdRng::seed_from_u64(seed);
    let mut plants = Vec::with_capacity(config.count + config.trees);

    for i in 0..config.count {
        let sub_seed = next_sub_seed(&mut master);
        let mut rng = sub_source(sub_seed);
        let plant = random_flower(config.size, &mut rng, config.unicode);
        if config.verbose {
            eprintln!("flower {}/{}: {} (seed {})", i + 1, config.count, plant.kind, sub_seed);
        }
        plants.push(colorize(plant.lines, plant.kind, color, &mut rng));
    }

    for i in 0..config.trees {
        let sub_seed = next_sub_seed(&mut master);
        let mut rng = sub_source(sub_seed);
        let plant = random_tree(config.size, &mut rng, config.unicode);
        if config.verbose {
            eprintln!("tree {}/{}: {} (seed {})", i + 1, config.trees, plant.kind, sub_seed);
        }
        plants.push(colorize(plant.lines, plant.kind, color, &mut rng));
    }

    plants
}
