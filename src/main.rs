mod colorize;
mod colors;
mod config;
mod garden;
mod layout;
mod plant;
mod settings;
mod shapes;
mod terminal;

use clap::Parser;
use config::{clamp_size, ColorMode, GardenConfig, LayoutMode};
use settings::Settings;
use std::io;

#[derive(Parser)]
#[command(name = "termgarden")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "ASCII flowers & trees generator: prints a garden to the terminal", long_about = None)]
struct Cli {
    /// Number of flowers to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Plant size (1-3)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    size: Option<u8>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of trees to generate
    #[arg(short, long)]
    trees: Option<usize>,

    /// Color output
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Arrangement of the plants
    #[arg(long, value_enum)]
    layout: Option<LayoutMode>,

    /// Columns for horizontal layout
    #[arg(long)]
    cols: Option<usize>,

    /// Spacing between plants
    #[arg(long)]
    gap: Option<usize>,

    /// Fit columns to the terminal width (horizontal layout)
    #[arg(long)]
    auto_fit: bool,

    /// Use ASCII glyphs only
    #[arg(long)]
    no_unicode: bool,

    /// Report each plant's kind and seed on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer flags over the settings file
    fn into_config(self, settings: &Settings) -> GardenConfig {
        let base = settings.to_config();
        GardenConfig {
            count: self.count.unwrap_or(base.count),
            trees: self.trees.unwrap_or(base.trees),
            size: self.size.map(clamp_size).unwrap_or(base.size),
            seed: self.seed,
            color: self.color.unwrap_or(base.color),
            layout: self.layout.unwrap_or(base.layout),
            cols: self.cols.unwrap_or(base.cols).max(1),
            gap: self.gap.unwrap_or(base.gap),
            auto_fit: self.auto_fit || base.auto_fit,
            // Legacy Windows consoles lack the blossom glyphs
            unicode: base.unicode && !self.no_unicode && !cfg!(windows),
            verbose: self.verbose,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config(&Settings::load());
    garden::run(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GardenConfig {
        let mut argv = vec!["termgarden"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().into_config(&Settings::default())
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.count, 6);
        assert_eq!(config.trees, 0);
        assert_eq!(config.size, 1);
        assert_eq!(config.seed, None);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.layout, LayoutMode::Vertical);
        assert_eq!(config.cols, 3);
        assert_eq!(config.gap, 1);
        assert!(!config.auto_fit);
    }

    #[test]
    fn short_and_long_flags() {
        let config = parse(&[
            "-n", "2", "-s", "3", "-t", "4", "--seed", "42", "--color", "on", "--layout",
            "horizontal", "--cols", "0", "--auto-fit", "--no-unicode",
        ]);
        assert_eq!(config.count, 2);
        assert_eq!(config.size, 3);
        assert_eq!(config.trees, 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.color, ColorMode::On);
        assert_eq!(config.layout, LayoutMode::Horizontal);
        assert_eq!(config.cols, 1);
        assert!(config.auto_fit);
        assert!(!config.unicode);
    }

    #[test]
    fn flags_override_settings() {
        let settings = Settings::parse("[garden]\ncount = 9\ntrees = 2\ncolor = \"off\"\n").unwrap();
        let cli = Cli::try_parse_from(["termgarden", "--count", "1"]).unwrap();
        let config = cli.into_config(&settings);
        assert_eq!(config.count, 1);
        assert_eq!(config.trees, 2);
        assert_eq!(config.color, ColorMode::Off);
    }

    #[test]
    fn invalid_values_are_usage_errors() {
        assert!(Cli::try_parse_from(["termgarden", "--size", "4"]).is_err());
        assert!(Cli::try_parse_from(["termgarden", "--color", "maybe"]).is_err());
        assert!(Cli::try_parse_from(["termgarden", "--layout", "diagonal"]).is_err());
        assert!(Cli::try_parse_from(["termgarden", "--count", "-1"]).is_err());
    }
}
