use crate::config::{clamp_size, ColorMode, GardenConfig, LayoutMode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `config.toml`
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub garden: GardenSettings,
}

/// `[garden]` table: defaults that command-line flags override
#[derive(Debug, Default, Deserialize)]
pub struct GardenSettings {
    pub count: Option<usize>,
    pub trees: Option<usize>,
    pub size: Option<u8>,
    pub color: Option<ColorMode>,
    pub layout: Option<LayoutMode>,
    pub cols: Option<usize>,
    pub gap: Option<usize>,
    pub auto_fit: Option<bool>,
    pub unicode: Option<bool>,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                eprintln!("warning: ignoring {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                eprintln!("warning: cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termgarden")
            .join("config.toml")
    }

    /// Built-in defaults with file values layered on top
    pub fn to_config(&self) -> GardenConfig {
        let base = GardenConfig::default();
        let g = &self.garden;
        GardenConfig {
            count: g.count.unwrap_or(base.count),
            trees: g.trees.unwrap_or(base.trees),
            size: clamp_size(g.size.unwrap_or(base.size)),
            color: g.color.unwrap_or(base.color),
            layout: g.layout.unwrap_or(base.layout),
            cols: g.cols.unwrap_or(base.cols).max(1),
            gap: g.gap.unwrap_or(base.gap),
            auto_fit: g.auto_fit.unwrap_or(base.auto_fit),
            unicode: g.unicode.unwrap_or(base.unicode),
            ..base
        }
    }
}
