use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{errors::ConfigError, expense::ExpenseCategory, expense::DEFAULT_CATEGORY};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const STORAGE_DIR: &str = "storage";
const TMP_SUFFIX: &str = "tmp";

/// User preferences for the expense front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Labels offered by the add form. Records are not checked against this list.
    pub categories: Vec<String>,
    pub default_category: String,
    pub currency_symbol: String,
    pub ui_color_enabled: bool,
    /// Optional custom directory for stored expenses. Defaults to `<home>/storage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: ExpenseCategory::default_labels(),
            default_category: DEFAULT_CATEGORY.label().into(),
            currency_symbol: "$".into(),
            ui_color_enabled: true,
            storage_root: None,
        }
    }
}

impl Config {
    pub fn resolve_storage_root(&self, home: &Path) -> PathBuf {
        match &self.storage_root {
            Some(path) => path.clone(),
            None => home.join(STORAGE_DIR),
        }
    }

    /// Position of the default category within `categories`, if listed.
    pub fn default_category_index(&self) -> Option<usize> {
        self.categories
            .iter()
            .position(|label| label == &self.default_category)
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        let config = manager.load().expect("load");
        assert_eq!(config, Config::default());
        assert_eq!(config.default_category_index(), Some(1));
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempdir().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path()).expect("manager");
        fs::write(manager.path(), r#"{ "currency_symbol": "€" }"#).expect("write config");

        let config = manager.load().expect("load");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.categories, ExpenseCategory::default_labels());
        assert!(config.ui_color_enabled);
    }

    #[test]
    fn storage_root_defaults_under_home() {
        let config = Config::default();
        let home = PathBuf::from("/tmp/expense-home");
        assert_eq!(config.resolve_storage_root(&home), home.join("storage"));
    }
}
