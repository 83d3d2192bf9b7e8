use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_receipts_dir")]
    pub receipts_dir: String,
    #[serde(default = "default_tax_percent")]
    pub default_tax_percent: f64,
    #[serde(default = "default_table_count")]
    pub table_count: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default = "default_restaurant_name")]
    pub restaurant_name: String,
}

fn default_receipts_dir() -> String {
    Config::config_dir()
        .join("receipts")
        .to_string_lossy()
        .to_string()
}
fn default_tax_percent() -> f64 {
    5.0
}
fn default_table_count() -> i64 {
    8
}
fn default_restaurant_name() -> String {
    "Restaurant".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            receipts_dir: default_receipts_dir(),
            default_tax_percent: default_tax_percent(),
            table_count: default_table_count(),
            currency: String::new(),
            restaurant_name: default_restaurant_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tablepos")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tablepos")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tablepos.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tablepos.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Receipts directory with `~/` expanded.
    pub fn receipts_path(&self) -> PathBuf {
        expand_tilde(&self.receipts_dir)
    }

    /// Database path with `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Create the directories holding the database file and the receipts.
    pub fn ensure_dirs(&self) -> io::Result<()> {
        if let Some(parent) = self.database_path().parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir_all(self.receipts_path())
    }

    /// Where a `--db` value points: absolute and `~/` paths as given, a
    /// bare or relative name inside the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() || name.starts_with('~') {
            expand_tilde(name)
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Apply the global `--db` / `--receipts` command-line overrides.
    pub fn apply_overrides(&mut self, custom_db: Option<&str>, custom_receipts: Option<&str>) {
        if let Some(name) = custom_db {
            self.database = Self::resolve_db_path(name).to_string_lossy().to_string();
        }
        if let Some(r) = custom_receipts {
            self.receipts_dir = r.to_string();
        }
    }

    /// Reject values the store cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.table_count < 1 {
            return Err(AppError::Config(format!(
                "table_count must be at least 1, got {}",
                self.table_count
            )));
        }
        if !self.default_tax_percent.is_finite()
            || !(0.0..=100.0).contains(&self.default_tax_percent)
        {
            return Err(AppError::Config(format!(
                "default_tax_percent must be between 0 and 100, got {}",
                self.default_tax_percent
            )));
        }
        Ok(())
    }

    /// Initialize the configuration file.
    ///
    /// In test mode the YAML file is not written, only returned.
    pub fn init_all(
        custom_db: Option<&str>,
        custom_receipts: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Config::default();
        config.apply_overrides(custom_db, custom_receipts);

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
