use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/brewcraft.toml";

/// Session tuning loaded from `config/brewcraft.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of inventory slots for a play session.
    pub inventory_size: usize,
    /// Window for two clicks on the same slot to count as a double-click.
    pub double_click_ms: u64,
    /// Item pack the catalog is loaded from.
    pub items_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inventory_size: 36,
            double_click_ms: brewcraft_inventory::DOUBLE_CLICK_WINDOW_MS,
            items_path: "config/items.json".to_string(),
        }
    }
}

impl SessionConfig {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SessionConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SessionConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else if path != Path::new(DEFAULT_CONFIG_PATH) {
                    warn!(
                        "Session config not found at {}. Using defaults",
                        path.display()
                    );
                }
                SessionConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = SessionConfig::load_from_path(Path::new("does/not/exist.toml"));
        assert_eq!(cfg.inventory_size, 36);
        assert_eq!(cfg.double_click_ms, 250);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: SessionConfig = toml::from_str("inventory_size = 9").unwrap();
        assert_eq!(cfg.inventory_size, 9);
        assert_eq!(cfg.items_path, "config/items.json");
    }
}
