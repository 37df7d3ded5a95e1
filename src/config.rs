use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::nav::{DisplayArea, PLACEHOLDER_TEXT, Selection};
use crate::tui::ThemeVariant;

/// Default selection of one display area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaConfig {
    pub name: String,
    #[serde(default)]
    pub category: usize,
    #[serde(default)]
    pub item: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub label: String,
    /// Content text; items without text get placeholder content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub label: String,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Fixed tab title width; natural width when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u16>,
    #[serde(default = "default_placeholder_text")]
    pub placeholder_text: String,
    #[serde(default = "default_areas")]
    pub areas: Vec<AreaConfig>,
    /// Menu layout; the built-in demo catalog is used when empty
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

fn default_placeholder_text() -> String {
    PLACEHOLDER_TEXT.to_string()
}

// Area 1 starts on the first item, Area 2 on the second
fn default_areas() -> Vec<AreaConfig> {
    vec![
        AreaConfig {
            name: "Area 1".to_string(),
            category: 0,
            item: 0,
        },
        AreaConfig {
            name: "Area 2".to_string(),
            category: 0,
            item: 1,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            tab_width: None,
            placeholder_text: default_placeholder_text(),
            areas: default_areas(),
            categories: Vec::new(),
        }
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("tabnav")
        } else {
            // Dot directory in home on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".tabnav")
        };
        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    /// Load a config file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!(
            "Loaded config with {} areas and {} categories",
            config.areas.len(),
            config.categories.len()
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Display areas with their default selections
    pub fn display_areas(&self) -> Vec<DisplayArea> {
        self.areas
            .iter()
            .map(|area| DisplayArea::new(area.name.clone(), Selection::new(area.category, area.item)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeVariant::Mocha);
        assert_eq!(config.placeholder_text, PLACEHOLDER_TEXT);
        assert_eq!(config.areas.len(), 2);
        assert_eq!((config.areas[1].category, config.areas[1].item), (0, 1));
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml("theme = \"latte\"\ntab_width = 12\n").unwrap();
        assert_eq!(config.theme, ThemeVariant::Latte);
        assert_eq!(config.tab_width, Some(12));
        assert_eq!(config.areas, default_areas());
    }

    #[test]
    fn test_catalog_and_areas_from_toml() {
        let toml = r#"
            [[areas]]
            name = "Left"

            [[areas]]
            name = "Middle"
            item = 1

            [[areas]]
            name = "Right"
            category = 1

            [[categories]]
            label = "Products"
            items = [{ label = "iPhone", text = "Phones" }, { label = "iPad" }]

            [[categories]]
            label = "Services"
        "#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.areas.len(), 3);
        assert_eq!(config.areas[2].category, 1);
        assert_eq!(config.categories[0].items[1].text, None);
        assert!(config.categories[1].items.is_empty());

        let areas = config.display_areas();
        assert_eq!(areas[1].selection(), Selection::new(0, 1));
        assert_eq!(areas[2].name(), "Right");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml("theme = \"neon\"").is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("tabnav-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.toml");

        let mut config = Config::default();
        config.tab_width = Some(16);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_gives_default() {
        let path = std::env::temp_dir().join(format!("tabnav-missing-{}.toml", uuid::Uuid::new_v4()));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
