use clap::ValueEnum;
use serde::Deserialize;

/// Largest supported plant size
pub const MAX_SIZE: u8 = 3;

/// Color output policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    On,
    Off,
}

/// How plants are arranged on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One plant after another
    #[default]
    Vertical,
    /// Rows of bottom-aligned plants
    Horizontal,
}

/// Configuration for garden generation
#[derive(Clone, Debug)]
pub struct GardenConfig {
    pub count: usize,
    pub trees: usize,
    pub size: u8,
    pub seed: Option<u64>,
    pub color: ColorMode,
    pub layout: LayoutMode,
    pub cols: usize,
    pub gap: usize,
    pub auto_fit: bool,
    pub unicode: bool,
    pub verbose: bool,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            count: 6,
            trees: 0,
            size: 1,
            seed: None,
            color: ColorMode::Auto,
            layout: LayoutMode::Vertical,
            cols: 3,
            gap: 1,
            auto_fit: false,
            unicode: true,
            verbose: false,
        }
    }
}

/// Clamp a requested plant size into 1..=MAX_SIZE
pub fn clamp_size(size: u8) -> u8 {
    size.clamp(1, MAX_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_clamped() {
        assert_eq!(clamp_size(0), 1);
        assert_eq!(clamp_size(2), 2);
        assert_eq!(clamp_size(9), MAX_SIZE);
    }

    #[test]
    fn defaults_match_cli() {
        let config = GardenConfig::default();
        assert_eq!(config.count, 6);
        assert_eq!(config.trees, 0);
        assert_eq!(config.cols, 3);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.layout, LayoutMode::Vertical);
    }
}
