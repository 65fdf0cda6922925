use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RowPolicy;
use crate::error::Result;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "menu_planner.toml";

/// Catalog file used when neither the CLI nor the config names one.
pub const DEFAULT_CATALOG_FILE: &str = "food.csv";

/// Settings read from `menu_planner.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Path to the dish catalog (CSV or JSON).
    pub catalog: PathBuf,

    /// Handling of rows with non-positive serving capacity or negative price.
    pub malformed_rows: RowPolicy,

    /// Tracing filter, e.g. "info" or "menu_planner_rs=debug".
    pub log_level: Option<String>,

    /// Offered as the default answer to the course prompt.
    pub default_courses: Vec<String>,

    /// Offered as the default answer to the diet prompt.
    pub default_diets: Vec<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
            malformed_rows: RowPolicy::default(),
            log_level: None,
            default_courses: vec![
                "starter".to_string(),
                "main course".to_string(),
                "dessert".to_string(),
            ],
            default_diets: vec!["vegetarian".to_string()],
        }
    }
}

impl PlannerConfig {
    /// Load from `path`, or from `menu_planner.toml` when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Tracing filter from verbosity, unless the config pins one.
    pub fn log_level(&self, verbose: u8) -> String {
        if verbose == 0 {
            if let Some(level) = &self.log_level {
                return level.clone();
            }
        }
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    }
}
