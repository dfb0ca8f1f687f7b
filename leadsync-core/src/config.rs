use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use shared_types::Catalog;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CoreConfig {
    #[serde(default)]
    pub catalog: Catalog,
}

impl CoreConfig {
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let config_path = get_config_path();

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            let default_config = r#"
[catalog]
# Uncomment a list to replace the built-in options
# sales_team = ["Priya Singh", "Vikash Kumar"]
# car_models = ["Maruti Swift", "Honda City"]
# budget_ranges = ["₹5-8 Lakhs", "₹8-12 Lakhs"]
# timelines = ["Immediately", "1 month"]
"#;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let config = Self::load_from(&config_path)?;
        tracing::debug!("Loaded config from {}", config_path.display());

        Ok((config, config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        builder.try_deserialize()
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("leadsync").join("core.toml")
    } else {
        PathBuf::from("core.toml")
    }
}
